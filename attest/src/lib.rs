//! # Attest - Value Generation for Property-Based Testing
//!
//! Attest is the value-generation core of a property testing toolkit. Every
//! arbitrary produces a reproducible sequence of representative inputs: a
//! deterministic list of edge cases known to provoke bugs, followed by a
//! seeded pseudorandom sample stream. Composition through `map`, `filter`,
//! and `with_edge_cases` preserves that contract end to end.
//!
//! ## Quick Start
//!
//! ```rust
//! use attest::Generator;
//! use attest::primitives::int32;
//!
//! let arbitrary = int32(100);
//! let mut source = attest::source::seeded(42);
//!
//! // Edge cases come first, then 100 seeded samples.
//! let values: Vec<i32> = arbitrary
//!     .generate(&mut source)
//!     .map(|generated| generated.into_value())
//!     .collect();
//!
//! assert_eq!(&values[..5], &[0, 1, -1, i32::MIN, i32::MAX]);
//! assert_eq!(values.len(), 105);
//! ```
//!
//! Reproducibility is the caller's lever: the source is constructed and
//! owned outside the library and threaded explicitly into every generation
//! call. Two sources seeded identically yield identical sample streams.

// Public modules
pub mod arbitrary;
pub mod combinators;
pub mod error;
pub mod generated;
pub mod generator;
pub mod primitives;
pub mod registry;
pub mod source;

// Re-export the main public API
pub use arbitrary::{Arbitrary, BoxedArbitrary};
pub use combinators::{Filter, Map, WithEdgeCases};
pub use error::GeneratorError;
pub use generated::Generated;
pub use generator::Generator;
pub use registry::{BuiltIn, NumericKind, resolve, resolve_for};
pub use source::{DefaultSourceProvider, SourceProvider, from_entropy, seeded};

// Re-export arbitrary builders for convenience
pub use primitives::{constant, float32, float64, int32, int64, one_of};
