//! Construction helpers for caller-owned sources of randomness.
//!
//! The core never owns a source: every generation call borrows one from the
//! caller, and two sources in equal states yield equal sample streams. The
//! helpers here only construct sources; once handed out, a source is the
//! caller's to thread through generation calls.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Trait for providing sources of randomness.
pub trait SourceProvider {
    /// The source type this provider creates.
    type Source: rand::RngCore;

    /// Create a source, reproducibly seeded when a seed is given.
    fn source(&self, seed: Option<u64>) -> Self::Source;
}

/// Default provider backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct DefaultSourceProvider;

impl SourceProvider for DefaultSourceProvider {
    type Source = StdRng;

    fn source(&self, seed: Option<u64>) -> Self::Source {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Create a reproducible source from a seed.
pub fn seeded(seed: u64) -> StdRng {
    DefaultSourceProvider.source(Some(seed))
}

/// Create a source seeded from system entropy.
pub fn from_entropy() -> StdRng {
    DefaultSourceProvider.source(None)
}
