//! Closed-set lookup from canonical type names to built-in arbitraries.

use std::any::{Any, TypeId};

use log::debug;

use crate::arbitrary::BoxedArbitrary;
use crate::error::GeneratorError;
use crate::primitives::{FloatArbitrary, IntArbitrary};

/// The closed set of numeric kinds with built-in arbitraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Int32,
    Int64,
    Float32,
    Float64,
}

impl NumericKind {
    /// Normalize a type-name spelling to its kind.
    ///
    /// Every accepted alias of a kind folds to the same variant; anything
    /// else is outside the closed set.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "i32" | "int" | "Int" | "int32" | "Int32" | "Integer" => Some(Self::Int32),
            "i64" | "long" | "Long" | "int64" | "Int64" => Some(Self::Int64),
            "f32" | "float" | "Float" | "float32" | "Float32" | "Single" => Some(Self::Float32),
            "f64" | "double" | "Double" | "float64" | "Float64" => Some(Self::Float64),
            _ => None,
        }
    }

    /// Build the built-in arbitrary for this kind.
    pub fn arbitrary(self, iterations: usize) -> BuiltIn {
        match self {
            Self::Int32 => BuiltIn::Int32(IntArbitrary::new(iterations)),
            Self::Int64 => BuiltIn::Int64(IntArbitrary::new(iterations)),
            Self::Float32 => BuiltIn::Float32(FloatArbitrary::<f32>::new(iterations)),
            Self::Float64 => BuiltIn::Float64(FloatArbitrary::<f64>::new(iterations)),
        }
    }
}

/// A built-in arbitrary for one of the supported numeric kinds.
#[derive(Debug, Clone)]
pub enum BuiltIn {
    Int32(IntArbitrary<i32>),
    Int64(IntArbitrary<i64>),
    Float32(FloatArbitrary<f32>),
    Float64(FloatArbitrary<f64>),
}

impl BuiltIn {
    /// The kind this arbitrary generates.
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::Int32(_) => NumericKind::Int32,
            Self::Int64(_) => NumericKind::Int64,
            Self::Float32(_) => NumericKind::Float32,
            Self::Float64(_) => NumericKind::Float64,
        }
    }

    /// Take the `i32` arbitrary, if that is what was resolved.
    pub fn into_int32(self) -> Option<IntArbitrary<i32>> {
        match self {
            Self::Int32(arbitrary) => Some(arbitrary),
            _ => None,
        }
    }

    /// Take the `i64` arbitrary, if that is what was resolved.
    pub fn into_int64(self) -> Option<IntArbitrary<i64>> {
        match self {
            Self::Int64(arbitrary) => Some(arbitrary),
            _ => None,
        }
    }

    /// Take the `f32` arbitrary, if that is what was resolved.
    pub fn into_float32(self) -> Option<FloatArbitrary<f32>> {
        match self {
            Self::Float32(arbitrary) => Some(arbitrary),
            _ => None,
        }
    }

    /// Take the `f64` arbitrary, if that is what was resolved.
    pub fn into_float64(self) -> Option<FloatArbitrary<f64>> {
        match self {
            Self::Float64(arbitrary) => Some(arbitrary),
            _ => None,
        }
    }
}

/// Resolve the built-in arbitrary for a canonical type name.
///
/// `iterations` bounds the sample stream of the returned arbitrary. Names
/// outside the closed set fail with the same error for every iteration
/// count.
pub fn resolve(type_name: &str, iterations: usize) -> Result<BuiltIn, GeneratorError> {
    match NumericKind::parse(type_name) {
        Some(kind) => {
            debug!("resolved `{type_name}` to built-in {kind:?} arbitrary");
            Ok(kind.arbitrary(iterations))
        }
        None => {
            debug!("no built-in arbitrary for `{type_name}`");
            Err(GeneratorError::unresolved(type_name))
        }
    }
}

/// Resolve the built-in arbitrary for a declared value type.
///
/// The type-parameterized convenience over [`resolve`]: the declared type is
/// matched by `TypeId` against the same closed set, and fails identically
/// when it falls outside it.
pub fn resolve_for<T: Any + Clone>(iterations: usize) -> Result<BoxedArbitrary<T>, GeneratorError> {
    let type_id = TypeId::of::<T>();
    let erased: Box<dyn Any> = if type_id == TypeId::of::<i32>() {
        Box::new(BoxedArbitrary::new(IntArbitrary::<i32>::new(iterations)))
    } else if type_id == TypeId::of::<i64>() {
        Box::new(BoxedArbitrary::new(IntArbitrary::<i64>::new(iterations)))
    } else if type_id == TypeId::of::<f32>() {
        Box::new(BoxedArbitrary::new(FloatArbitrary::<f32>::new(iterations)))
    } else if type_id == TypeId::of::<f64>() {
        Box::new(BoxedArbitrary::new(FloatArbitrary::<f64>::new(iterations)))
    } else {
        debug!("no built-in arbitrary for `{}`", std::any::type_name::<T>());
        return Err(GeneratorError::unresolved(std::any::type_name::<T>()));
    };

    match erased.downcast::<BoxedArbitrary<T>>() {
        Ok(arbitrary) => Ok(*arbitrary),
        Err(_) => Err(GeneratorError::internal(
            "built-in arbitrary does not match the requested type",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::Arbitrary;
    use crate::source::seeded;

    #[test]
    fn test_aliases_fold_to_one_kind() {
        for name in ["i32", "int", "Int", "int32", "Int32", "Integer"] {
            assert_eq!(NumericKind::parse(name), Some(NumericKind::Int32));
        }
        for name in ["f64", "double", "Double", "float64", "Float64"] {
            assert_eq!(NumericKind::parse(name), Some(NumericKind::Float64));
        }
        assert_eq!(NumericKind::parse("NotAType"), None);
    }

    #[test]
    fn test_resolve_returns_the_int32_built_in() {
        let built_in = resolve("Int", 10).unwrap();
        assert_eq!(built_in.kind(), NumericKind::Int32);

        let arbitrary = built_in.into_int32().unwrap();
        let edge_cases = arbitrary.edge_cases();
        for expected in [0, 1, -1, i32::MIN, i32::MAX] {
            assert!(edge_cases.contains(&expected));
        }
    }

    #[test]
    fn test_resolve_sizes_samples_by_iterations() {
        let arbitrary = resolve("long", 12).unwrap().into_int64().unwrap();
        let mut source = seeded(1);
        assert_eq!(arbitrary.samples(&mut source).count(), 12);
    }

    #[test]
    fn test_resolve_miss_names_the_offending_type() {
        let error = resolve("NotAType", 10).unwrap_err();
        assert_eq!(error.type_name(), Some("NotAType"));
    }

    #[test]
    fn test_resolve_miss_is_deterministic_across_iteration_counts() {
        let first = resolve("NotAType", 10).unwrap_err();
        let second = resolve("NotAType", 10_000).unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_for_matches_the_declared_type() {
        let arbitrary = resolve_for::<i32>(10).unwrap();
        assert_eq!(arbitrary.edge_cases(), vec![0, 1, -1, i32::MIN, i32::MAX]);

        let arbitrary = resolve_for::<f64>(10).unwrap();
        assert!(arbitrary.edge_cases().iter().any(|x| x.is_nan()));
    }

    #[test]
    fn test_resolve_for_fails_outside_the_closed_set() {
        let error = resolve_for::<String>(10).unwrap_err();
        assert_eq!(error.type_name(), Some(std::any::type_name::<String>()));

        assert!(resolve_for::<u8>(10).is_err());
    }
}
