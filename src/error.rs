// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one error type every fallible operation in the crate returns.
//!
//! Three kinds come straight from the container and rational contracts
//! (invalid argument, out of range, out of memory). The fourth, `Overflow`, exists
//! because Rust integers don't silently wrap in checked code: a rational whose
//! intermediate product doesn't fit `I` has to say so instead of producing garbage.
//!
//! A failed operation never leaves its receiver half-modified. Allocation happens
//! first, destructive steps after.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T, E = LabError> = std::result::Result<T, E>;

/// Error type for container and rational operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabError {
    /// An argument violates the operation's precondition.
    InvalidArgument { reason: String },
    /// Indexed access past the logical length.
    OutOfRange { index: usize, len: usize },
    /// The allocator refused the request, or the capacity math overflowed `usize`.
    OutOfMemory { requested: usize },
    /// Checked integer arithmetic overflowed.
    Overflow { operation: &'static str },
}

impl LabError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LabError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        LabError::Overflow { operation }
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            LabError::InvalidArgument { .. } => "invalid_argument",
            LabError::OutOfRange { .. } => "out_of_range",
            LabError::OutOfMemory { .. } => "out_of_memory",
            LabError::Overflow { .. } => "overflow",
        }
    }
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabError::InvalidArgument { reason } => write!(f, "invalid argument: {}", reason),
            LabError::OutOfRange { index, len } => {
                write!(f, "no such element: index {} >= len {}", index, len)
            }
            LabError::OutOfMemory { requested } => {
                write!(f, "out of memory: cannot allocate {} slots", requested)
            }
            LabError::Overflow { operation } => {
                write!(f, "integer overflow during {}", operation)
            }
        }
    }
}

impl std::error::Error for LabError {}
