//! Composite arbitraries produced by the combinators.
//!
//! Each combinator is an explicit value type holding the arbitrary it was
//! built from: construction is pure and cheap, and no hidden mutable state
//! is captured. Combinators never reorder elements; they only map or remove
//! them while preserving the edge-cases-then-samples structure.

use rand::RngCore;

use crate::arbitrary::Arbitrary;
use crate::generated::Generated;

/// An arbitrary that transforms every value produced by another arbitrary.
pub struct Map<A, F> {
    inner: A,
    f: F,
}

impl<A, F> Map<A, F> {
    pub(crate) fn new(inner: A, f: F) -> Self {
        Self { inner, f }
    }
}

impl<A, F, U> Arbitrary for Map<A, F>
where
    A: Arbitrary,
    F: Fn(A::Value) -> U,
    U: Clone + 'static,
{
    type Value = U;

    /// Order and multiplicity preserved; duplicates after mapping are kept.
    fn edge_cases(&self) -> Vec<U> {
        self.inner.edge_cases().into_iter().map(&self.f).collect()
    }

    fn samples<'a>(
        &'a self,
        source: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Generated<U>> + 'a> {
        Box::new(
            self.inner
                .samples(source)
                .map(move |generated| generated.map(&self.f)),
        )
    }
}

/// An arbitrary that keeps only values satisfying a predicate.
pub struct Filter<A, F> {
    inner: A,
    predicate: F,
}

impl<A, F> Filter<A, F> {
    pub(crate) fn new(inner: A, predicate: F) -> Self {
        Self { inner, predicate }
    }
}

impl<A, F> Arbitrary for Filter<A, F>
where
    A: Arbitrary,
    F: Fn(&A::Value) -> bool,
{
    type Value = A::Value;

    fn edge_cases(&self) -> Vec<A::Value> {
        self.inner
            .edge_cases()
            .into_iter()
            .filter(|value| (self.predicate)(value))
            .collect()
    }

    fn samples<'a>(
        &'a self,
        source: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Generated<A::Value>> + 'a> {
        Box::new(
            self.inner
                .samples(source)
                .filter(move |generated| (self.predicate)(generated.value())),
        )
    }
}

/// An arbitrary whose edge cases have been replaced wholesale.
pub struct WithEdgeCases<A: Arbitrary> {
    inner: A,
    edge_cases: Vec<A::Value>,
}

impl<A: Arbitrary> WithEdgeCases<A> {
    pub(crate) fn new(inner: A, edge_cases: Vec<A::Value>) -> Self {
        Self { inner, edge_cases }
    }
}

impl<A: Arbitrary> Arbitrary for WithEdgeCases<A> {
    type Value = A::Value;

    fn edge_cases(&self) -> Vec<A::Value> {
        self.edge_cases.clone()
    }

    fn samples<'a>(
        &'a self,
        source: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Generated<A::Value>> + 'a> {
        self.inner.samples(source)
    }
}
