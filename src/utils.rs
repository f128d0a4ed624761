//! Integer helpers shared by the rational type and the contracts.

use num_traits::{PrimInt, Signed};

/// Greatest common divisor of `|a|` and `|b|`.
///
/// Sign-agnostic: `gcd(-4, 6) == gcd(4, 6) == 2`. Euclid runs on the signed values
/// (the remainder's magnitude shrinks regardless of sign) and only the final result
/// is made non-negative, so no intermediate `abs` can overflow on `I::MIN`.
///
/// `gcd(0, 0) == 0`. The result overflows only for `gcd(I::MIN, 0)` and
/// `gcd(I::MIN, I::MIN)`, which normalization never asks for because the
/// denominator is positive by then.
pub fn gcd<I: PrimInt + Signed>(a: I, b: I) -> I {
    euclid(a, b).abs()
}

/// [`gcd`], or `None` when the result is `|I::MIN|`.
pub(crate) fn checked_gcd<I: PrimInt + Signed>(a: I, b: I) -> Option<I> {
    checked_neg(euclid(a, b)).map(|n| n.abs())
}

/// Signed Euclid. The magnitude of the result is the gcd.
fn euclid<I: PrimInt + Signed>(mut a: I, mut b: I) -> I {
    while !b.is_zero() {
        // I::MIN % -1 overflows; anything % -1 is 0
        let r = if b == -I::one() { I::zero() } else { a % b };
        a = b;
        b = r;
    }
    a
}

/// `-n`, or `None` for `I::MIN`.
pub(crate) fn checked_neg<I: PrimInt + Signed>(n: I) -> Option<I> {
    I::zero().checked_sub(&n)
}

/// Floored division of `n` by a positive `d`: `(q, r)` with `n == q*d + r`, `0 <= r < d`.
pub(crate) fn div_rem_floor<I: PrimInt + Signed>(n: I, d: I) -> (I, I) {
    let q = n / d;
    let r = n % d;
    if r < I::zero() {
        (q - I::one(), r + d)
    } else {
        (q, r)
    }
}
