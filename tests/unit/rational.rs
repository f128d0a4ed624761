//! Rational construction, arithmetic, ordering and formatting.

use crate::common::{r, r8};
use labkit::{gcd, LabError, Rational, Rational64};

#[test]
fn sign_moves_to_the_numerator_and_the_pair_reduces() {
    let n = r(94, -64);
    assert_eq!((n.numer(), n.denom()), (-47, 32));
    assert_eq!(n.to_string(), "-47 / 32");

    let both_negative = r(-6, -9);
    assert_eq!((both_negative.numer(), both_negative.denom()), (2, 3));
}

#[test]
fn zero_denominator_is_invalid() {
    let err = Rational::new(1, 0).unwrap_err();
    assert_eq!(
        err,
        LabError::InvalidArgument {
            reason: "denominator can't be 0".into()
        }
    );
}

#[test]
fn zero_numerator_reduces_to_zero_over_one() {
    assert_eq!(r(0, -17), Rational::zero());
    assert_eq!(Rational::<i64>::default(), Rational64::zero());
}

#[test]
fn equality_is_value_equality() {
    assert_eq!(r(1, 2), r(2, 4));
    assert_ne!(r(1, 2), r(6, 1));
}

#[test]
fn walkthrough_arithmetic() {
    let mut n = r8(94, -64);
    assert_eq!(n.decrement().unwrap(), r8(-79, 32));
    assert_eq!(-n, r8(79, 32));
    assert_eq!(r8(3, 1) + r8(1, 1), r8(4, 1));
    assert_eq!(r8(3, 2) - r8(8, 4), r8(-1, 2));
    assert_eq!(r8(1, 2) * r8(6, 1), r8(3, 1));
    assert_eq!(r8(1, 2) / r8(6, 1), r8(1, 12));
}

#[test]
fn walkthrough_comparisons() {
    assert!(r8(1, 2) > r8(1, 4));
    assert!(!(r8(-1, -2) < r8(1, 98)));
    assert!(r8(1, 3) >= r8(1, 98));
    assert!(r8(1, 3) <= r8(1, 3));
}

#[test]
fn ordering_survives_overflowing_subtraction() {
    let big = Rational::from_integer(i8::MAX);
    let small = Rational::from_integer(i8::MIN);
    assert!(big.try_sub(small).is_err());
    assert!(big > small);
    assert!(small < big);

    let mut sorted = vec![r8(1, 98), r8(-1, 97), r8(1, 3), r8(-127, 1), r8(127, 2)];
    sorted.sort();
    assert_eq!(
        sorted,
        vec![r8(-127, 1), r8(-1, 97), r8(1, 98), r8(1, 3), r8(127, 2)]
    );
}

#[test]
fn division_by_a_zero_valued_rational_is_invalid() {
    let err = r(3, 4).try_div(r(0, 5)).unwrap_err();
    assert_eq!(err.kind(), "invalid_argument");
}

#[test]
fn minimum_values_report_overflow() {
    assert_eq!(Rational::new(1, i32::MIN).unwrap_err().kind(), "overflow");
    assert_eq!(
        Rational::new(i32::MIN, -1).unwrap_err(),
        LabError::Overflow {
            operation: "sign normalization"
        }
    );
    // the sign moves before the pair is reduced
    assert!(Rational::new(i32::MIN, i32::MIN).is_err());
    assert_eq!(Rational::new(i32::MIN, 2).unwrap(), Rational::from_integer(i32::MIN / 2));
}

#[test]
fn products_at_the_edge_of_the_range_cancel_first() {
    let a = r(i32::MAX, 2);
    let b = r(2, i32::MAX);
    assert_eq!(a * b, Rational::one());
    assert_eq!(a.try_div(b.recip().unwrap()), Ok(Rational::one()));

    let c = r(1 << 30, 3);
    let d = r(6, 1 << 30);
    assert_eq!(c.try_mul(d), Ok(Rational::from_integer(2)));
    assert_eq!(c.try_div(d.recip().unwrap()), Ok(Rational::from_integer(2)));

    // a result that really is out of range still reports it
    assert_eq!(
        a.try_mul(a).unwrap_err(),
        LabError::Overflow {
            operation: "multiplication"
        }
    );
}

#[test]
fn gcd_ignores_signs() {
    assert_eq!(gcd(-12, 18), 6);
    assert_eq!(gcd(12, -18), 6);
    assert_eq!(gcd(0, -5), 5);
}

#[test]
fn float_conversion() {
    assert_eq!(r(-47, 32).to_f64(), -1.46875);
    assert_eq!(f64::from(r(1, 4)), 0.25);
}

#[test]
fn parse_and_display_agree() {
    for text in ["-47 / 32", "0 / 1", "5 / 3"] {
        let parsed: Rational = text.parse().unwrap();
        assert_eq!(parsed.to_string(), text);
    }
    assert_eq!("12/-8".parse::<Rational>().unwrap(), r(-3, 2));
}
