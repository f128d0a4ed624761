//! One-shot rational arithmetic: `labkit eval 3/4 + -1/6`.

use labkit::{LabError, Rational64, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl Operator {
    fn parse(symbol: &str) -> Result<Self> {
        Ok(match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" | "x" => Self::Mul,
            "/" => Self::Div,
            "<" => Self::Lt,
            ">" => Self::Gt,
            "<=" => Self::Le,
            ">=" => Self::Ge,
            "==" => Self::Eq,
            "!=" => Self::Ne,
            other => {
                return Err(LabError::InvalidArgument {
                    reason: format!("unknown operator '{}'", other),
                })
            }
        })
    }
}

/// Arithmetic yields a rational, comparisons yield a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Value(Rational64),
    Truth(bool),
}

#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub lhs: Rational64,
    pub op: String,
    pub rhs: Rational64,
    pub result: Outcome,
}

pub fn evaluate(lhs: &str, op: &str, rhs: &str) -> Result<Evaluation> {
    let operator = Operator::parse(op.trim())?;
    let a: Rational64 = lhs.parse()?;
    let b: Rational64 = rhs.parse()?;

    let result = match operator {
        Operator::Add => Outcome::Value(a.try_add(b)?),
        Operator::Sub => Outcome::Value(a.try_sub(b)?),
        Operator::Mul => Outcome::Value(a.try_mul(b)?),
        Operator::Div => Outcome::Value(a.try_div(b)?),
        Operator::Lt => Outcome::Truth(a < b),
        Operator::Gt => Outcome::Truth(a > b),
        Operator::Le => Outcome::Truth(a <= b),
        Operator::Ge => Outcome::Truth(a >= b),
        Operator::Eq => Outcome::Truth(a == b),
        Operator::Ne => Outcome::Truth(a != b),
    };
    tracing::debug!(%a, %b, op, "evaluated");

    Ok(Evaluation {
        lhs: a,
        op: op.trim().to_string(),
        rhs: b,
        result,
    })
}
