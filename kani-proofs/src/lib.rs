// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for labkit's arithmetic core.
//!
//! This standalone crate extracts rational normalization (specialized to `i8`,
//! small enough to check exhaustively) and the container's capacity arithmetic,
//! and proves them with Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: gcd and normalization never panic, including at `i8::MIN`
//! 2. **Canonical form**: a normalized pair has a positive denominator and is coprime
//! 3. **Value preserved**: normalization never changes the rational's value
//! 4. **Sanitize bound**: a shrink always lands within the 4x threshold
//! 5. **Hysteresis**: one push after a shrink never needs to grow

/// Slots allocated for an empty array.
pub const INITIAL_CAPACITY: usize = 10;

/// Capacity multiplier on growth.
pub const GROWTH_FACTOR: usize = 2;

/// Shrink once capacity exceeds `len * SANITIZE_FACTOR`.
pub const SANITIZE_FACTOR: usize = GROWTH_FACTOR * 2;

// ============================================================================
// RATIONAL NORMALIZATION (copied from src/utils.rs and src/rational/mod.rs)
// ============================================================================

/// Euclid on signed values, made non-negative at the end.
pub fn gcd(mut a: i8, mut b: i8) -> i8 {
    while b != 0 {
        let r = if b == -1 { 0 } else { a % b };
        a = b;
        b = r;
    }
    a.wrapping_abs()
}

/// Sign onto the numerator, then divide out the gcd. `None` on overflow.
pub fn normalize(mut numerator: i8, mut denominator: i8) -> Option<(i8, i8)> {
    if denominator == 0 {
        return None;
    }
    if denominator < 0 {
        numerator = 0i8.checked_sub(numerator)?;
        denominator = 0i8.checked_sub(denominator)?;
    }
    let divisor = gcd(numerator, denominator);
    Some((numerator / divisor, denominator / divisor))
}

// ============================================================================
// CAPACITY ARITHMETIC (copied from src/vector/mod.rs)
// ============================================================================

/// `len * GROWTH_FACTOR`, or `None` if that doesn't fit.
pub fn grown(len: usize) -> Option<usize> {
    len.checked_mul(GROWTH_FACTOR)
}

/// New capacity after dropping to `new_len`, if the sanitize step fires.
pub fn shrink_target(capacity: usize, new_len: usize) -> Option<usize> {
    if capacity <= new_len.saturating_mul(SANITIZE_FACTOR) {
        return None;
    }
    let target = new_len * GROWTH_FACTOR;
    Some(if target == 0 { INITIAL_CAPACITY } else { target })
}

/// The state `check_sanitized` accepts.
pub fn is_sanitized(len: usize, capacity: usize) -> bool {
    if len == 0 {
        capacity <= INITIAL_CAPACITY
    } else {
        capacity <= len.saturating_mul(SANITIZE_FACTOR)
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// gcd never panics, never returns a negative value, and divides both inputs.
    #[kani::proof]
    #[kani::unwind(14)] // Euclid on i8 takes at most 12 steps
    fn verify_gcd_divides() {
        let a: i8 = kani::any();
        let b: i8 = kani::any_where(|&b: &i8| b > 0);
        let g = gcd(a, b);
        kani::assert(g > 0, "gcd with a positive operand must be positive");
        kani::assert(a % g == 0 && b % g == 0, "gcd must divide both operands");
    }

    /// Every successful normalization is canonical.
    #[kani::proof]
    #[kani::unwind(14)]
    fn verify_normalize_canonical() {
        let n: i8 = kani::any();
        let d: i8 = kani::any();
        if let Some((rn, rd)) = normalize(n, d) {
            kani::assert(rd > 0, "denominator must be positive");
            kani::assert(gcd(rn, rd) == 1, "pair must be coprime");
        }
    }

    /// Normalization keeps the value: n/d == rn/rd.
    #[kani::proof]
    #[kani::unwind(14)]
    fn verify_normalize_preserves_value() {
        let n: i8 = kani::any();
        let d: i8 = kani::any();
        if let Some((rn, rd)) = normalize(n, d) {
            kani::assert(
                n as i32 * rd as i32 == rn as i32 * d as i32,
                "cross products must match",
            );
        }
    }

    /// Only a zero denominator or a sign move at i8::MIN fails.
    #[kani::proof]
    #[kani::unwind(14)]
    fn verify_normalize_failure_cases() {
        let n: i8 = kani::any();
        let d: i8 = kani::any();
        let expected_failure = d == 0 || (d < 0 && (n == i8::MIN || d == i8::MIN));
        kani::assert(
            normalize(n, d).is_none() == expected_failure,
            "failure cases must be exactly the documented ones",
        );
    }

    /// After a shrink the state is sanitized.
    #[kani::proof]
    fn verify_shrink_lands_sanitized() {
        let capacity: usize = kani::any();
        let new_len: usize = kani::any_where(|&l: &usize| l <= capacity);
        let after = shrink_target(capacity, new_len).unwrap_or(capacity);
        kani::assert(is_sanitized(new_len, after), "shrink must satisfy the bound");
        kani::assert(new_len <= after, "shrink must keep len <= capacity");
    }

    /// A shrink leaves room for at least one push without growing.
    #[kani::proof]
    fn verify_push_after_shrink_fits() {
        let capacity: usize = kani::any();
        let new_len: usize = kani::any_where(|&l: &usize| l <= capacity);
        if let Some(target) = shrink_target(capacity, new_len) {
            kani::assert(new_len + 1 <= target, "push after shrink must fit");
        }
    }

    /// Growth is exact or reports overflow, never wraps.
    #[kani::proof]
    fn verify_grown_checked() {
        let len: usize = kani::any();
        match grown(len) {
            Some(cap) => kani::assert(cap / GROWTH_FACTOR == len, "growth must be exact"),
            None => kani::assert(len > usize::MAX / GROWTH_FACTOR, "overflow only past the limit"),
        }
    }
}
