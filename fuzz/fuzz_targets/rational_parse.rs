// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rational parsing under arbitrary text.
//!
//! Parsing must return an error, never panic, and anything that parses must
//! print back to a string that parses to the same value.

#![no_main]

use libfuzzer_sys::fuzz_target;
use labkit::Rational64;

fuzz_target!(|text: &str| {
    if let Ok(r) = text.parse::<Rational64>() {
        let printed = r.to_string();
        assert_eq!(printed.parse::<Rational64>().ok(), Some(r));
    }
});
