//! Base generation capability.

use rand::RngCore;

use crate::generated::Generated;

/// Core trait for producing a lazy sequence of values from a caller-owned
/// source of randomness.
///
/// Advancing the returned iterator may advance the source's internal state;
/// no other state may be touched. The source is borrowed for the lifetime
/// of the sequence, so the caller regains control of it (and of
/// reproducibility) as soon as the sequence is dropped.
///
/// Most consumers use the richer [`Arbitrary`](crate::arbitrary::Arbitrary)
/// capability, which splits the sequence into deterministic edge cases and
/// seeded samples; every `Arbitrary` is a `Generator` through a blanket
/// impl.
pub trait Generator<T> {
    /// Produce a lazy sequence of generated values.
    fn generate<'a>(
        &'a self,
        source: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Generated<T>> + 'a>;
}
