//! Arbitrary capability: deterministic edge cases plus seeded samples.

use rand::RngCore;

use crate::combinators::{Filter, Map, WithEdgeCases};
use crate::generated::Generated;
use crate::generator::Generator;

/// A generator refined with an explicit split between a finite,
/// deterministic edge-case sequence and a (possibly unbounded) seeded
/// sample stream.
///
/// The generation contract, supplied once by the blanket [`Generator`]
/// impl, is: edge cases first, in order, then samples. Edge cases are the
/// cheapest, highest-yield inputs, so a consumer that stops at the first
/// failure hits known trouble spots before any random sampling.
pub trait Arbitrary {
    /// The type of values this arbitrary produces.
    type Value: Clone + 'static;

    /// The deterministic edge cases, in a stable order.
    ///
    /// Independent of any source: the same arbitrary returns the same
    /// sequence, in the same order, on every call.
    fn edge_cases(&self) -> Vec<Self::Value>;

    /// The seeded sample stream. May be unbounded.
    ///
    /// All randomness must come from the supplied source, drawn only as the
    /// iterator is advanced and never by resetting or forking the source,
    /// so a caller controlling the source's state fully controls
    /// reproducibility.
    fn samples<'a>(
        &'a self,
        source: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Generated<Self::Value>> + 'a>;

    /// Transform every value this arbitrary produces.
    ///
    /// Edge cases are mapped eagerly in order; samples are transformed
    /// lazily, once per element, at consumption time, so unbounded streams
    /// stay composable.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        U: Clone + 'static,
        F: Fn(Self::Value) -> U,
    {
        Map::new(self, f)
    }

    /// Keep only the values satisfying `predicate`.
    ///
    /// Rejecting every edge case leaves an empty edge-case list; that is
    /// not an error. An aggressive predicate can starve the sample stream
    /// (or empty a bounded one) — no retry policy exists here, so bounding
    /// consumption is the caller's job.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Value) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Replace the edge cases with exactly the given sequence.
    ///
    /// No merging with the original edge cases; the sample stream is left
    /// untouched. An empty replacement list is valid.
    fn with_edge_cases(self, edge_cases: Vec<Self::Value>) -> WithEdgeCases<Self>
    where
        Self: Sized,
    {
        WithEdgeCases::new(self, edge_cases)
    }
}

/// Every arbitrary is a generator: edge cases first, then samples.
impl<A: Arbitrary> Generator<A::Value> for A {
    fn generate<'a>(
        &'a self,
        source: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Generated<A::Value>> + 'a> {
        let edge_cases = self.edge_cases();
        Box::new(
            edge_cases
                .into_iter()
                .map(Generated::new)
                .chain(self.samples(source)),
        )
    }
}

/// A type-erased arbitrary.
///
/// Lets heterogeneous arbitraries over one value type be stored and
/// returned uniformly; the typed registry lookup returns one.
pub struct BoxedArbitrary<T> {
    inner: Box<dyn Arbitrary<Value = T>>,
}

impl<T: Clone + 'static> BoxedArbitrary<T> {
    /// Box an arbitrary behind the erased interface.
    pub fn new<A>(arbitrary: A) -> Self
    where
        A: Arbitrary<Value = T> + 'static,
    {
        Self {
            inner: Box::new(arbitrary),
        }
    }
}

impl<T> std::fmt::Debug for BoxedArbitrary<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedArbitrary").finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Arbitrary for BoxedArbitrary<T> {
    type Value = T;

    fn edge_cases(&self) -> Vec<T> {
        self.inner.edge_cases()
    }

    fn samples<'a>(
        &'a self,
        source: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Generated<T>> + 'a> {
        self.inner.samples(source)
    }
}
