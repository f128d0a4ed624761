// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the container and rational invariants.
//!
//! Debug-mode assertions that the data structures call on themselves after every
//! mutating step. They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** while tests run
//! 3. A written-down list of what "valid" means for each type
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function      | Invariant                                         |
//! |------------------------|---------------------------------------------------|
//! | `check_capacity_bound` | `len <= capacity`                                 |
//! | `check_sanitized`      | `capacity <= len * 4` after any removal           |
//! | `check_reduced_form`   | `denominator > 0` and `gcd(|num|, den) == 1`      |

use num_traits::{PrimInt, Signed};

use crate::utils::gcd;
use crate::vector::{GROWTH_FACTOR, INITIAL_CAPACITY, SANITIZE_FACTOR};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // The default empty state must be able to hold something.
    assert!(INITIAL_CAPACITY > 0);

    // Growth has to actually grow.
    assert!(GROWTH_FACTOR >= 2);

    // INVARIANT: hysteresis gap. Shrinking lands at len * GROWTH_FACTOR, which must
    // sit strictly below the shrink trigger, or a single push after a shrink
    // could immediately qualify for another shrink.
    assert!(SANITIZE_FACTOR == GROWTH_FACTOR * 2);
    assert!(SANITIZE_FACTOR > GROWTH_FACTOR);
};

// ============================================================================
// CONTAINER CONTRACTS
// ============================================================================

/// Check that the logical length fits in the allocated storage.
///
/// # Panics (debug builds only)
/// Panics if `len > capacity`.
#[inline]
pub fn check_capacity_bound(len: usize, capacity: usize) {
    debug_assert!(
        len <= capacity,
        "Contract violation: capacity bound - len {} > capacity {}",
        len,
        capacity
    );
}

/// Check that a removal left no more than `SANITIZE_FACTOR` times the needed space.
///
/// The one exception is the default empty state: an empty container always keeps
/// `INITIAL_CAPACITY` slots, which is more than `0 * SANITIZE_FACTOR`.
///
/// # Panics (debug builds only)
/// Panics if the shrink heuristic was skipped.
#[inline]
pub fn check_sanitized(len: usize, capacity: usize) {
    check_capacity_bound(len, capacity);
    debug_assert!(
        capacity <= len.saturating_mul(SANITIZE_FACTOR) || (len == 0 && capacity == INITIAL_CAPACITY),
        "Contract violation: sanitize - capacity {} > len {} * {}",
        capacity,
        len,
        SANITIZE_FACTOR
    );
}

// ============================================================================
// RATIONAL CONTRACTS
// ============================================================================

/// Check that a numerator/denominator pair is in reduced form.
///
/// # Panics (debug builds only)
/// Panics if the denominator is not positive or the pair shares a factor.
#[inline]
pub fn check_reduced_form<I: PrimInt + Signed>(numerator: I, denominator: I) {
    debug_assert!(
        denominator > I::zero(),
        "Contract violation: reduced form - denominator is not positive"
    );
    debug_assert!(
        gcd(numerator, denominator).is_one(),
        "Contract violation: reduced form - numerator and denominator share a factor"
    );
}
