// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scripted walkthroughs of both types.
//!
//! Each walkthrough returns a list of [`Step`]s rather than printing, so the
//! same transcript renders as a boxed report or as JSON. Errors that the script
//! provokes on purpose become steps; anything else propagates.

use labkit::{Bounded, DynamicArray, Rational, Result};
use serde::Serialize;

/// Slot budget for the oversized-allocation step. Large enough for the rest of
/// the script, far below the ten GiB it asks for.
const DEMO_SLOT_LIMIT: usize = 1 << 24;

#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub label: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    /// The step failed, and was meant to.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

impl Step {
    fn text(label: impl Into<String>, output: impl ToString) -> Self {
        Self {
            label: label.into(),
            output: output.to_string(),
            len: None,
            capacity: None,
            error: false,
        }
    }

    fn array<A>(label: impl Into<String>, array: &DynamicArray<i32, A>) -> Self {
        Self {
            label: label.into(),
            output: array.to_string().trim_end().to_string(),
            len: Some(array.len()),
            capacity: Some(array.capacity()),
            error: false,
        }
    }

    fn failure<T>(label: impl Into<String>, outcome: Result<T>) -> Self {
        let output = match outcome {
            Ok(_) => "no error".to_string(),
            Err(err) => err.to_string(),
        };
        Self {
            label: label.into(),
            output,
            len: None,
            capacity: None,
            error: true,
        }
    }
}

// ============================================================================
// CONTAINER
// ============================================================================

pub fn vector_demo() -> Result<Vec<Step>> {
    let mut steps = Vec::new();

    let a = [9, 8, 7, 6, 5, 4, 3, 2, 1];
    let v0 = DynamicArray::from_slice(&a)?;
    steps.push(Step::array("v0 copied from a raw buffer", &v0));

    let v1 = DynamicArray::from_elem(10, 10)?;
    steps.push(Step::array("v1: ten elements equal to 10", &v1));

    let mut v2 = v1.try_clone()?;
    steps.push(Step::array("v2 copied from v1", &v2));

    let v3 = v2.take()?;
    steps.push(Step::array("v3 moved out of v2; v2 is now", &v2));
    steps.push(Step::array("v3", &v3));

    let mut v4 = DynamicArray::from_list([11, 20, 40, 100, 135, 341, 900, 1000, 9000, -1, -432])?;
    steps.push(Step::array("v4 from a list", &v4));

    let mut v5 = v4.try_clone()?;
    steps.push(Step::array("v5 copied from v4", &v5));

    v4.erase(3, 3)?;
    steps.push(Step::array("v4.erase(3, 3)", &v4));

    v4.reserve(5)?;
    steps.push(Step::array("v4.reserve(5)", &v4));

    v4.assign(&v1)?;
    steps.push(Step::array("v4.assign(v1)", &v4));

    v5.push_back(1337)?;
    steps.push(Step::array("v5.push_back(1337)", &v5));

    v4.insert_slice(3, v5.as_slice())?;
    steps.push(Step::array("v4.insert_slice(3, v5)", &v4));

    v4.insert(0, 0)?;
    steps.push(Step::array("v4.insert(0, 0)", &v4));

    *v4.at_mut(1)? = 432;
    steps.push(Step::array("v4[1] = 432", &v4));

    for i in 0..1000 {
        v5.push_back(i)?;
    }
    steps.push(Step::array("v5.push_back(i) for i in 0..1000", &v5));

    steps.push(Step::failure(
        "construct from an empty buffer",
        DynamicArray::<i32>::from_slice(&[]),
    ));
    steps.push(Step::failure("v4.at(100)", v4.at(100).map(|_| ())));
    // 2684354560 ints is 10 GiB
    steps.push(Step::failure(
        "allocate 10 GiB",
        DynamicArray::<i32, _>::with_len_in(2_684_354_560, Bounded::new(DEMO_SLOT_LIMIT)),
    ));

    Ok(steps)
}

// ============================================================================
// RATIONAL
// ============================================================================

pub fn rational_demo() -> Result<Vec<Step>> {
    type R = Rational<i8>;
    let r = |n: i8, d: i8| R::new(n, d);
    let mut steps = Vec::new();

    let mut n = r(94, -64)?;
    steps.push(Step::text("n = 94 / -64", n));
    steps.push(Step::text("--n", n.decrement()?));
    steps.push(Step::text("-n", n.try_neg()?));
    steps.push(Step::text("3/1 + 1/1", r(3, 1)?.try_add(r(1, 1)?)?));
    steps.push(Step::text("3/2 - 8/4", r(3, 2)?.try_sub(r(8, 4)?)?));
    steps.push(Step::text("1/2 * 6/1", r(1, 2)?.try_mul(r(6, 1)?)?));
    steps.push(Step::text("1/2 / 6/1", r(1, 2)?.try_div(r(6, 1)?)?));

    steps.push(Step::text("1/2 == 6/1", r(1, 2)? == r(6, 1)?));
    steps.push(Step::text("1/2 == 2/4", r(1, 2)? == r(2, 4)?));
    steps.push(Step::text("1/2 > 1/4", r(1, 2)? > r(1, 4)?));
    steps.push(Step::text("-1/-2 < 1/98", r(-1, -2)? < r(1, 98)?));
    // 3 * 98 overflows i8, so this one compares without a common denominator
    steps.push(Step::text("1/3 >= 1/98", r(1, 3)? >= r(1, 98)?));
    steps.push(Step::text("1/3 <= 1/3", r(1, 3)? <= r(1, 3)?));

    steps.push(Step::failure("1 / 0", r(1, 0)));
    steps.push(Step::failure("127/1 + 1/1", r(127, 1)?.try_add(R::one())));

    Ok(steps)
}
