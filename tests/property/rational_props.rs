//! Rational properties: canonical form, arithmetic closure, total ordering.

use crate::oracles::{oracle_cmp, oracle_reduce};
use labkit::{gcd, Rational, Rational32, Rational64};
use proptest::prelude::*;

fn small() -> impl Strategy<Value = Rational64> {
    (-10_000i64..10_000, 1i64..10_000).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn nonzero_small() -> impl Strategy<Value = Rational64> {
    small().prop_filter("non-zero", |r| !r.is_zero())
}

/// Anything representable, so the full-width operands are covered.
fn any_i32() -> impl Strategy<Value = Rational32> {
    (any::<i32>(), 1i32..=i32::MAX).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn any_i8() -> impl Strategy<Value = Rational<i8>> {
    (any::<i8>(), any::<i8>())
        .prop_filter_map("valid pair", |(n, d)| Rational::new(n, d).ok())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every successfully constructed value is in canonical form.
    #[test]
    fn construction_is_canonical(n in any::<i64>(), d in any::<i64>()) {
        prop_assume!(d != 0);
        match Rational::new(n, d) {
            Ok(r) => {
                prop_assert!(r.denom() > 0);
                prop_assert_eq!(gcd(r.numer(), r.denom()), 1);
                prop_assert_eq!((r.numer() as i128, r.denom() as i128), oracle_reduce(n, d));
            }
            // only the sign move on a minimum value can fail
            Err(err) => {
                prop_assert_eq!(err.kind(), "overflow");
                prop_assert!(d < 0 && (n == i64::MIN || d == i64::MIN));
            }
        }
    }

    #[test]
    fn add_then_subtract_is_identity(a in small(), b in small()) {
        prop_assert_eq!(a + b - b, a);
    }

    #[test]
    fn multiply_then_divide_is_identity(a in small(), b in nonzero_small()) {
        prop_assert_eq!((a * b) / b, a);
    }

    /// A product that fits divides back exactly; cancellation keeps every
    /// intermediate no larger than the reduced result.
    #[test]
    fn representable_products_divide_back(
        a in any_i32(),
        b in any_i32().prop_filter("non-zero", |r| !r.is_zero()),
    ) {
        if let Ok(p) = a.try_mul(b) {
            prop_assert_eq!(p.try_div(b), Ok(a));
        }
    }

    /// Exactly one of `<`, `==`, `>` holds, even where subtraction overflows.
    #[test]
    fn ordering_is_trichotomous(a in any_i8(), b in any_i8()) {
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|&&x| x).count(), 1);
    }

    /// Ordering agrees with exact cross-multiplication.
    #[test]
    fn ordering_matches_cross_multiplication(a in any_i8(), b in any_i8()) {
        let expected = oracle_cmp(
            a.numer().into(), a.denom().into(),
            b.numer().into(), b.denom().into(),
        );
        prop_assert_eq!(a.cmp(&b), expected);
    }

    /// Checked arithmetic never panics: every result is a value or an error.
    #[test]
    fn checked_arithmetic_is_total(a in any_i8(), b in any_i8()) {
        for result in [a.try_add(b), a.try_sub(b), a.try_mul(b), a.try_div(b)] {
            if let Ok(r) = result {
                prop_assert!(r.denom() > 0);
            }
        }
    }

    #[test]
    fn display_parses_back(a in small()) {
        prop_assert_eq!(a.to_string().parse::<Rational64>().unwrap(), a);
    }
}
