// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked rational arithmetic over the full `i8` and `i64` ranges.
//!
//! The checked API must never panic. Whatever it returns is either a canonical
//! value (positive denominator, coprime pair) or an error, and comparisons must
//! agree with exact cross-multiplication in `i128`.

#![no_main]

use std::cmp::Ordering;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use labkit::{gcd, Rational};
use num_traits::{PrimInt, Signed};

#[derive(Debug, Arbitrary)]
struct Input {
    a: (i64, i64),
    b: (i64, i64),
    narrow: bool,
}

fn check_canonical<I: PrimInt + Signed>(r: Rational<I>) {
    assert!(r.denom() > I::zero());
    assert!(gcd(r.numer(), r.denom()).is_one());
}

fn exact_cmp<I: PrimInt + Signed + Into<i128>>(a: Rational<I>, b: Rational<I>) -> Ordering {
    let wide = |x: I| -> i128 { x.into() };
    let lhs = wide(a.numer()) * wide(b.denom());
    let rhs = wide(b.numer()) * wide(a.denom());
    lhs.cmp(&rhs)
}

fn exercise<I: PrimInt + Signed + Into<i128>>(a: (I, I), b: (I, I)) {
    let (Ok(a), Ok(b)) = (Rational::new(a.0, a.1), Rational::new(b.0, b.1)) else {
        return;
    };
    check_canonical(a);
    check_canonical(b);

    for result in [
        a.try_add(b),
        a.try_sub(b),
        a.try_mul(b),
        a.try_div(b),
        a.try_neg(),
        a.abs(),
        a.recip(),
    ] {
        if let Ok(r) = result {
            check_canonical(r);
        }
    }

    assert_eq!(a.cmp(&b), exact_cmp(a, b));
    assert_eq!(a == b, exact_cmp(a, b) == Ordering::Equal);
}

fuzz_target!(|input: Input| {
    if input.narrow {
        let t = |(n, d): (i64, i64)| (n as i8, d as i8);
        exercise(t(input.a), t(input.b));
    } else {
        exercise(input.a, input.b);
    }
});
