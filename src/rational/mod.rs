// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rational numbers kept in reduced form.
//!
//! A `Rational<I>` is a numerator/denominator pair of the signed integer type `I`.
//! Every constructor and every arithmetic result goes through [`Rational::new`],
//! which enforces:
//!
//! - `denominator > 0` (the sign lives in the numerator)
//! - `gcd(|numerator|, denominator) == 1`
//!
//! Because the representation is canonical, structural equality (`==`, `Hash`) is
//! value equality: `1/2` and `2/4` are the same value and the same pair.
//!
//! All arithmetic is checked. The `try_*` methods return a [`LabError`]; the
//! operator traits panic with that error's message, the same way `i32 / 0` does.

mod ops;
mod parse;

use std::cmp::Ordering;
use std::fmt;

use num_traits::{PrimInt, Signed};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::contracts;
use crate::error::{LabError, Result};
use crate::utils::{checked_neg, div_rem_floor, gcd};

/// A fraction in reduced form with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rational<I = i32> {
    numerator: I,
    denominator: I,
}

/// `Rational<i32>`.
pub type Rational32 = Rational<i32>;

/// `Rational<i64>`.
pub type Rational64 = Rational<i64>;

impl<I: PrimInt + Signed> Rational<I> {
    /// Build `numerator / denominator` in reduced form.
    ///
    /// A zero denominator is an invalid argument. Moving the sign off an `I::MIN`
    /// denominator overflows.
    pub fn new(numerator: I, denominator: I) -> Result<Self> {
        if denominator.is_zero() {
            debug!("rejected rational with zero denominator");
            return Err(LabError::invalid("denominator can't be 0"));
        }
        Self::normalized(numerator, denominator)
    }

    /// `0 / 1`.
    pub fn zero() -> Self {
        Self {
            numerator: I::zero(),
            denominator: I::one(),
        }
    }

    /// `1 / 1`.
    pub fn one() -> Self {
        Self::from_integer(I::one())
    }

    /// `n / 1`. Always reduced, so no checks are needed.
    pub fn from_integer(n: I) -> Self {
        Self {
            numerator: n,
            denominator: I::one(),
        }
    }

    #[inline]
    pub fn numer(&self) -> I {
        self.numerator
    }

    #[inline]
    pub fn denom(&self) -> I {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < I::zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Unary plus.
    pub fn pos(self) -> Self {
        self
    }

    /// Floating-point approximation `numerator / denominator`.
    pub fn to_f64(&self) -> f64 {
        let n = self.numerator.to_f64().unwrap_or(f64::NAN);
        let d = self.denominator.to_f64().unwrap_or(f64::NAN);
        n / d
    }

    /// Put a pair with a non-zero denominator into canonical form.
    fn normalized(mut numerator: I, mut denominator: I) -> Result<Self> {
        if denominator < I::zero() {
            numerator = checked_neg(numerator).ok_or(LabError::overflow("sign normalization"))?;
            denominator =
                checked_neg(denominator).ok_or(LabError::overflow("sign normalization"))?;
        }
        // denominator > 0 here, so gcd is positive and never I::MIN
        let divisor = gcd(numerator, denominator);
        let value = Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        };
        contracts::check_reduced_form(value.numerator, value.denominator);
        Ok(value)
    }

    /// Exact comparison that never overflows, by comparing continued-fraction
    /// terms. Only used when `self - other` doesn't fit in `I`.
    fn cmp_by_quotients(&self, other: &Self) -> Ordering {
        let (mut an, mut ad) = (self.numerator, self.denominator);
        let (mut bn, mut bd) = (other.numerator, other.denominator);
        let mut flipped = false;
        loop {
            let (aq, ar) = div_rem_floor(an, ad);
            let (bq, br) = div_rem_floor(bn, bd);
            let ordering = match aq.cmp(&bq) {
                Ordering::Equal => match (ar.is_zero(), br.is_zero()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    (false, false) => {
                        // ar/ad < br/bd  <=>  ad/ar > bd/br
                        (an, ad, bn, bd) = (ad, ar, bd, br);
                        flipped = !flipped;
                        continue;
                    }
                },
                unequal => unequal,
            };
            return if flipped { ordering.reverse() } else { ordering };
        }
    }
}

impl<I: PrimInt + Signed> Default for Rational<I> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<I: PrimInt + Signed> From<I> for Rational<I> {
    fn from(n: I) -> Self {
        Self::from_integer(n)
    }
}

impl<I: PrimInt + Signed> From<Rational<I>> for f64 {
    fn from(value: Rational<I>) -> f64 {
        value.to_f64()
    }
}

/// `a < b` iff `a - b` has a negative numerator.
impl<I: PrimInt + Signed> Ord for Rational<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.try_sub(*other) {
            Ok(diff) => diff.numerator.cmp(&I::zero()),
            Err(_) => self.cmp_by_quotients(other),
        }
    }
}

impl<I: PrimInt + Signed> PartialOrd for Rational<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `"<numerator> / <denominator>"`.
impl<I: fmt::Display> fmt::Display for Rational<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}

#[derive(Deserialize)]
struct RawRational<I> {
    numerator: I,
    denominator: I,
}

impl<'de, I> Deserialize<'de> for Rational<I>
where
    I: PrimInt + Signed + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawRational::<I>::deserialize(deserializer)?;
        Self::new(raw.numerator, raw.denominator).map_err(D::Error::custom)
    }
}
