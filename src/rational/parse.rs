//! Parsing rationals from text: `"3"`, `"3/4"`, `"-3 / 4"`.

use std::str::FromStr;

use num_traits::{PrimInt, Signed};

use super::Rational;
use crate::error::LabError;

impl<I> FromStr for Rational<I>
where
    I: PrimInt + Signed + FromStr,
{
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_part = |part: &str| {
            let part = part.trim();
            part.parse::<I>()
                .map_err(|_| LabError::invalid(format!("'{}' is not an integer", part)))
        };

        match s.split_once('/') {
            Some((numerator, denominator)) => {
                Rational::new(parse_part(numerator)?, parse_part(denominator)?)
            }
            None => Ok(Rational::from_integer(parse_part(s)?)),
        }
    }
}
