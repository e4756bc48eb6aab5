//! Basic usage examples demonstrating the core Attest API
//!
//! This example walks through the fundamental concepts of the value
//! generation core: built-in arbitraries, edge-case/sample ordering,
//! combinators, and registry resolution.

use attest::primitives::{int32, one_of};
use attest::{Arbitrary, Generator, resolve};

// Example 1: Edge cases always come before samples
fn example_1_edge_cases_first() {
    println!("=== Example 1: Edge Cases First ===");

    let arbitrary = int32(5);
    let mut source = attest::seeded(42);

    for (index, generated) in arbitrary.generate(&mut source).enumerate() {
        println!("  [{}] {}", index, generated.value());
    }
}

// Example 2: Combinators preserve the contract
fn example_2_combinators() {
    println!("=== Example 2: Combinators ===");

    let arbitrary = int32(10)
        .map(|x| x.wrapping_mul(3))
        .filter(|&x| x > 0)
        .with_edge_cases(vec![3, 6, 9]);

    println!("  edge cases: {:?}", arbitrary.edge_cases());

    let mut source = attest::seeded(7);
    let samples: Vec<i32> = arbitrary
        .samples(&mut source)
        .map(|generated| generated.into_value())
        .collect();
    println!("  {} positive multiples of three survived", samples.len());
}

// Example 3: Reproducibility is driven entirely by the source
fn example_3_reproducibility() {
    println!("=== Example 3: Reproducibility ===");

    let arbitrary = one_of(vec!["red", "green", "blue"]);

    let mut source1 = attest::seeded(2024);
    let mut source2 = attest::seeded(2024);

    let run1: Vec<&str> = arbitrary
        .samples(&mut source1)
        .take(6)
        .map(|generated| generated.into_value())
        .collect();
    let run2: Vec<&str> = arbitrary
        .samples(&mut source2)
        .take(6)
        .map(|generated| generated.into_value())
        .collect();

    println!("  run 1: {:?}", run1);
    println!("  run 2: {:?}", run2);
    println!("  equal: {}", run1 == run2);
}

// Example 4: Resolving built-ins from the registry
fn example_4_registry() {
    println!("=== Example 4: Registry ===");

    match resolve("Int", 10) {
        Ok(built_in) => println!("  `Int` resolved to {:?}", built_in.kind()),
        Err(error) => println!("  unexpected: {}", error),
    }

    match resolve("NotAType", 10) {
        Ok(_) => println!("  unexpected success"),
        Err(error) => println!("  as expected: {}", error),
    }
}

fn main() {
    example_1_edge_cases_first();
    example_2_combinators();
    example_3_reproducibility();
    example_4_registry();
}
