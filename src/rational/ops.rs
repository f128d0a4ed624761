// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arithmetic on rationals.
//!
//! The checked `try_*` methods are the real implementations. Operator traits are
//! thin wrappers that panic with the error message on failure.

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{PrimInt, Signed};

use super::Rational;
use crate::error::{LabError, Result};
use crate::utils::{checked_gcd, checked_neg, gcd};

impl<I: PrimInt + Signed> Rational<I> {
    /// `-self`. Only overflows for an `I::MIN` numerator.
    pub fn try_neg(self) -> Result<Self> {
        let numerator = checked_neg(self.numerator).ok_or(LabError::overflow("negation"))?;
        // negating the numerator can't introduce a common factor
        Ok(Self {
            numerator,
            denominator: self.denominator,
        })
    }

    /// Sum over the least common denominator `d1 * d2 / gcd(d1, d2)`.
    pub fn try_add(self, rhs: Self) -> Result<Self> {
        let overflow = || LabError::overflow("addition");

        let divisor = gcd(self.denominator, rhs.denominator);
        let lcm = (self.denominator / divisor)
            .checked_mul(&rhs.denominator)
            .ok_or_else(overflow)?;
        let lhs_part = (lcm / self.denominator)
            .checked_mul(&self.numerator)
            .ok_or_else(overflow)?;
        let rhs_part = (lcm / rhs.denominator)
            .checked_mul(&rhs.numerator)
            .ok_or_else(overflow)?;
        let numerator = lhs_part.checked_add(&rhs_part).ok_or_else(overflow)?;

        Self::new(numerator, lcm)
    }

    /// `self + (-rhs)`.
    pub fn try_sub(self, rhs: Self) -> Result<Self> {
        self.try_add(rhs.try_neg()?)
    }

    /// Cancels across the pair before multiplying, so the products are already
    /// the reduced result and only overflow when that result doesn't fit.
    pub fn try_mul(self, rhs: Self) -> Result<Self> {
        let overflow = || LabError::overflow("multiplication");
        // denominators are positive, so neither gcd can be I::MIN
        let g1 = gcd(self.numerator, rhs.denominator);
        let g2 = gcd(rhs.numerator, self.denominator);
        let numerator = (self.numerator / g1)
            .checked_mul(&(rhs.numerator / g2))
            .ok_or_else(overflow)?;
        let denominator = (self.denominator / g2)
            .checked_mul(&(rhs.denominator / g1))
            .ok_or_else(overflow)?;
        Self::new(numerator, denominator)
    }

    /// `self * (d / n)` with the same cross-cancellation as [`try_mul`](Self::try_mul).
    /// Dividing by zero is the same invalid argument as constructing `x / 0`.
    pub fn try_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(LabError::invalid("denominator can't be 0"));
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let overflow = || LabError::overflow("division");

        let (mut lhs_num, mut rhs_num) = match checked_gcd(self.numerator, rhs.numerator) {
            Some(g) => (self.numerator / g, rhs.numerator / g),
            // both numerators are I::MIN
            None => (I::one(), I::one()),
        };
        // the divisor's sign moves onto the numerator
        if rhs_num < I::zero() {
            lhs_num = checked_neg(lhs_num).ok_or_else(overflow)?;
            rhs_num = checked_neg(rhs_num).ok_or_else(overflow)?;
        }
        let g2 = gcd(self.denominator, rhs.denominator);
        let numerator = lhs_num
            .checked_mul(&(rhs.denominator / g2))
            .ok_or_else(overflow)?;
        let denominator = (self.denominator / g2)
            .checked_mul(&rhs_num)
            .ok_or_else(overflow)?;
        Self::new(numerator, denominator)
    }

    /// `1 / self`.
    pub fn recip(self) -> Result<Self> {
        Self::one().try_div(self)
    }

    pub fn abs(self) -> Result<Self> {
        if self.is_negative() {
            self.try_neg()
        } else {
            Ok(self)
        }
    }

    /// Prefix `++`: add one, return the new value.
    pub fn increment(&mut self) -> Result<Self> {
        *self = self.try_add(Self::one())?;
        Ok(*self)
    }

    /// Postfix `++`: add one, return the value from before.
    pub fn post_increment(&mut self) -> Result<Self> {
        let before = *self;
        *self = self.try_add(Self::one())?;
        Ok(before)
    }

    /// Prefix `--`.
    pub fn decrement(&mut self) -> Result<Self> {
        *self = self.try_sub(Self::one())?;
        Ok(*self)
    }

    /// Postfix `--`.
    pub fn post_decrement(&mut self) -> Result<Self> {
        let before = *self;
        *self = self.try_sub(Self::one())?;
        Ok(before)
    }
}

fn or_panic<I>(result: Result<Rational<I>>) -> Rational<I> {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

// ============================================================================
// OPERATOR TRAITS
// ============================================================================

macro_rules! binary_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $checked:ident) => {
        impl<I: PrimInt + Signed> $op for Rational<I> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                or_panic(self.$checked(rhs))
            }
        }

        impl<I: PrimInt + Signed> $assign for Rational<I> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = or_panic(self.$checked(rhs));
            }
        }
    };
}

binary_op!(Add, add, AddAssign, add_assign, try_add);
binary_op!(Sub, sub, SubAssign, sub_assign, try_sub);
binary_op!(Mul, mul, MulAssign, mul_assign, try_mul);
binary_op!(Div, div, DivAssign, div_assign, try_div);

impl<I: PrimInt + Signed> Neg for Rational<I> {
    type Output = Self;

    fn neg(self) -> Self {
        or_panic(self.try_neg())
    }
}

impl<I: PrimInt + Signed> Sum for Rational<I> {
    fn sum<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<I: PrimInt + Signed> Product for Rational<I> {
    fn product<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}
