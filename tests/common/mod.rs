//! Shared test utilities and fixtures.

#![allow(dead_code)]

use labkit::{DynamicArray, Rational};

// Re-export canonical test utilities from labkit::testing
pub use labkit::testing::{assert_matches_oracle, CountingAllocator};

// ============================================================================
// FIXTURES
// ============================================================================

/// The eleven-element list the walkthrough builds `v4` from.
pub const V4: [i32; 11] = [11, 20, 40, 100, 135, 341, 900, 1000, 9000, -1, -432];

pub fn v4() -> DynamicArray<i32> {
    DynamicArray::from_list(V4).expect("fixture allocation")
}

/// `n / d` over `i32`, panicking on a zero denominator.
pub fn r(n: i32, d: i32) -> Rational {
    Rational::new(n, d).expect("fixture rational")
}

/// `n / d` over `i8`, where overflow is easy to reach.
pub fn r8(n: i8, d: i8) -> Rational<i8> {
    Rational::new(n, d).expect("fixture rational")
}
