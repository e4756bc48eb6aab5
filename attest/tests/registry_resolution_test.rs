//! Integration tests for type-name and type-parameter registry resolution

use attest::{Arbitrary, GeneratorError, NumericKind, resolve, resolve_for};

/// `resolve("Int", 10)` succeeds with the full 32-bit integer edge cases.
#[test]
fn resolve_int_succeeds_with_expected_edge_cases() {
    let arbitrary = resolve("Int", 10)
        .expect("Int is in the closed set")
        .into_int32()
        .expect("Int resolves to the 32-bit kind");

    let edge_cases = arbitrary.edge_cases();
    for expected in [0, 1, -1, i32::MIN, i32::MAX] {
        assert!(
            edge_cases.contains(&expected),
            "edge cases are missing {}",
            expected
        );
    }
}

/// Every alias spelling of a kind resolves to the same built-in.
#[test]
fn alias_spellings_resolve_identically() {
    let canonical = resolve("i32", 10).unwrap().kind();
    for alias in ["int", "Int", "int32", "Int32", "Integer"] {
        assert_eq!(resolve(alias, 10).unwrap().kind(), canonical);
    }

    assert_eq!(resolve("Float", 10).unwrap().kind(), NumericKind::Float32);
    assert_eq!(resolve("Double", 10).unwrap().kind(), NumericKind::Float64);
    assert_eq!(resolve("Long", 10).unwrap().kind(), NumericKind::Int64);
}

/// Unknown names fail with an error carrying the offending name, and the
/// iteration count does not change the outcome.
#[test]
fn unknown_names_fail_deterministically() {
    let error = resolve("NotAType", 10).unwrap_err();
    assert_eq!(
        error,
        GeneratorError::UnresolvedGenerator {
            type_name: "NotAType".to_string()
        }
    );

    assert_eq!(resolve("NotAType", 0).unwrap_err(), error);
    assert_eq!(resolve("NotAType", 10_000).unwrap_err(), error);
}

/// The type-parameterized entry point resolves the same closed set.
#[test]
fn resolve_for_covers_the_closed_set() {
    assert_eq!(
        resolve_for::<i32>(5).unwrap().edge_cases(),
        vec![0, 1, -1, i32::MIN, i32::MAX]
    );
    assert_eq!(
        resolve_for::<i64>(5).unwrap().edge_cases(),
        vec![0, 1, -1, i64::MIN, i64::MAX]
    );
    assert!(resolve_for::<f32>(5).is_ok());
    assert!(resolve_for::<f64>(5).is_ok());
}

/// Types outside the closed set fail the same way as unknown names.
#[test]
fn resolve_for_fails_identically_outside_the_closed_set() {
    let error = resolve_for::<String>(5).unwrap_err();
    match &error {
        GeneratorError::UnresolvedGenerator { type_name } => {
            assert!(type_name.contains("String"));
        }
        other => panic!("expected an unresolved-generator error, got {:?}", other),
    }

    assert!(resolve_for::<u32>(5).is_err());
    assert!(resolve_for::<bool>(5).is_err());
}

/// A resolved built-in behaves like any hand-built arbitrary: sized sample
/// stream, deterministic under equal seeds.
#[test]
fn resolved_arbitraries_generate_normally() {
    let arbitrary = resolve_for::<i32>(15).unwrap();

    let mut source1 = attest::seeded(4);
    let mut source2 = attest::seeded(4);

    let stream1: Vec<i32> = arbitrary
        .samples(&mut source1)
        .map(|generated| generated.into_value())
        .collect();
    let stream2: Vec<i32> = arbitrary
        .samples(&mut source2)
        .map(|generated| generated.into_value())
        .collect();

    assert_eq!(stream1.len(), 15);
    assert_eq!(stream1, stream2);
}
