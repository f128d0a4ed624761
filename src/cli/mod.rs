// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the labkit command-line interface.
//!
//! Two subcommands: `demo` replays the scripted walkthroughs of both types, and
//! `eval` applies one arithmetic or comparison operator to two rationals. Both
//! print either a boxed text report or, with `--json`, a machine-readable document.

pub mod demo;
pub mod display;
pub mod eval;
pub mod logger;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "labkit",
    about = "Capacity-managed dynamic array and reduced rational numbers",
    version
)]
pub struct Cli {
    /// Log allocation and validation events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON instead of the text report
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the container and rational operations step by step
    Demo {
        /// Which walkthrough to run
        #[arg(value_enum, default_value_t = DemoTarget::All)]
        target: DemoTarget,
    },

    /// Evaluate `<lhs> <op> <rhs>` over 64-bit rationals
    ///
    /// Operands are `n` or `n/d`. Operators: + - * / < > <= >= == !=
    Eval {
        /// Left operand, e.g. `3/4`
        #[arg(allow_hyphen_values = true)]
        lhs: String,

        /// Operator
        #[arg(allow_hyphen_values = true)]
        op: String,

        /// Right operand, e.g. `-1/6`
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoTarget {
    Vector,
    Rational,
    All,
}
