//! Built-in arbitraries for primitive numeric types and simple values.

use std::marker::PhantomData;

use num_traits::{PrimInt, Signed};
use rand::Rng;
use rand::RngCore;
use rand::distributions::{Distribution, Standard};

use crate::arbitrary::Arbitrary;
use crate::generated::Generated;

/// Full-range arbitrary for signed integer types.
///
/// The sample stream holds exactly `iterations` uniform draws across the
/// whole representable range.
#[derive(Debug, Clone)]
pub struct IntArbitrary<T> {
    iterations: usize,
    _marker: PhantomData<T>,
}

impl<T> IntArbitrary<T> {
    /// Create an arbitrary offering `iterations` random samples.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            _marker: PhantomData,
        }
    }
}

impl<T> Arbitrary for IntArbitrary<T>
where
    T: PrimInt + Signed + 'static,
    Standard: Distribution<T>,
{
    type Value = T;

    /// Zero, the two units, and the representation limits.
    fn edge_cases(&self) -> Vec<T> {
        vec![
            T::zero(),
            T::one(),
            -T::one(),
            T::min_value(),
            T::max_value(),
        ]
    }

    fn samples<'a>(
        &'a self,
        source: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Generated<T>> + 'a> {
        let mut remaining = self.iterations;
        Box::new(std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            Some(Generated::new(source.r#gen()))
        }))
    }
}

/// Arbitrary for floating-point types, sampling uniformly from a finite
/// range.
///
/// The non-finite troublemakers ride in the deterministic edge cases, never
/// in the sample stream.
#[derive(Debug, Clone)]
pub struct FloatArbitrary<T> {
    min: T,
    max: T,
    iterations: usize,
}

macro_rules! impl_float_arbitrary {
    ($($t:ty),*) => {
        $(
            impl FloatArbitrary<$t> {
                /// Create an arbitrary sampling from the default range.
                pub fn new(iterations: usize) -> Self {
                    Self::with_range(-1000.0, 1000.0, iterations)
                }

                /// Create an arbitrary sampling from a custom finite range.
                pub fn with_range(min: $t, max: $t, iterations: usize) -> Self {
                    Self { min, max, iterations }
                }
            }

            impl Arbitrary for FloatArbitrary<$t> {
                type Value = $t;

                fn edge_cases(&self) -> Vec<$t> {
                    vec![
                        0.0,
                        1.0,
                        -1.0,
                        <$t>::MIN,
                        <$t>::MAX,
                        <$t>::MIN_POSITIVE,
                        <$t>::INFINITY,
                        <$t>::NEG_INFINITY,
                        <$t>::NAN,
                    ]
                }

                fn samples<'a>(
                    &'a self,
                    source: &'a mut dyn RngCore,
                ) -> Box<dyn Iterator<Item = Generated<$t>> + 'a> {
                    let (min, max) = (self.min, self.max);
                    let mut remaining = self.iterations;
                    Box::new(std::iter::from_fn(move || {
                        if remaining == 0 {
                            return None;
                        }
                        remaining -= 1;
                        Some(Generated::new(source.gen_range(min..=max)))
                    }))
                }
            }
        )*
    };
}

impl_float_arbitrary!(f32, f64);

/// An arbitrary that always produces the same value.
///
/// Its single edge case is the value itself and its sample stream repeats
/// the value without drawing from the source.
#[derive(Debug, Clone)]
pub struct ConstantArbitrary<T> {
    value: T,
}

impl<T: Clone + 'static> Arbitrary for ConstantArbitrary<T> {
    type Value = T;

    fn edge_cases(&self) -> Vec<T> {
        vec![self.value.clone()]
    }

    fn samples<'a>(
        &'a self,
        _source: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Generated<T>> + 'a> {
        Box::new(std::iter::repeat_with(move || {
            Generated::new(self.value.clone())
        }))
    }
}

/// An arbitrary that draws uniformly from a fixed collection of values.
#[derive(Debug, Clone)]
pub struct OneOfArbitrary<T> {
    values: Vec<T>,
}

impl<T: Clone> OneOfArbitrary<T> {
    /// Create a new one-of arbitrary
    pub fn new(values: Vec<T>) -> Self {
        if values.is_empty() {
            panic!("OneOfArbitrary cannot be created with empty values");
        }
        Self { values }
    }
}

impl<T: Clone + 'static> Arbitrary for OneOfArbitrary<T> {
    type Value = T;

    /// The extremes of the collection; a single element when they coincide.
    fn edge_cases(&self) -> Vec<T> {
        match (self.values.first(), self.values.last()) {
            (Some(first), Some(last)) if self.values.len() > 1 => {
                vec![first.clone(), last.clone()]
            }
            (Some(first), _) => vec![first.clone()],
            _ => Vec::new(),
        }
    }

    fn samples<'a>(
        &'a self,
        source: &'a mut dyn RngCore,
    ) -> Box<dyn Iterator<Item = Generated<T>> + 'a> {
        Box::new(std::iter::repeat_with(move || {
            let index = source.gen_range(0..self.values.len());
            Generated::new(self.values[index].clone())
        }))
    }
}

/// Create a full-range arbitrary for `i32`.
pub fn int32(iterations: usize) -> IntArbitrary<i32> {
    IntArbitrary::new(iterations)
}

/// Create a full-range arbitrary for `i64`.
pub fn int64(iterations: usize) -> IntArbitrary<i64> {
    IntArbitrary::new(iterations)
}

/// Create an arbitrary for `f32` over the default range.
pub fn float32(iterations: usize) -> FloatArbitrary<f32> {
    FloatArbitrary::<f32>::new(iterations)
}

/// Create an arbitrary for `f64` over the default range.
pub fn float64(iterations: usize) -> FloatArbitrary<f64> {
    FloatArbitrary::<f64>::new(iterations)
}

/// Create an arbitrary that always produces the same value.
pub fn constant<T: Clone>(value: T) -> ConstantArbitrary<T> {
    ConstantArbitrary { value }
}

/// Create an arbitrary that chooses uniformly from a collection of values.
pub fn one_of<T: Clone>(values: Vec<T>) -> OneOfArbitrary<T> {
    OneOfArbitrary::new(values)
}
