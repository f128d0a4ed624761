// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Allocation as a capability the container is handed, not a type it hardcodes.
//!
//! A `DynamicArray` never touches the global heap directly. It asks its allocator for
//! a block of default-initialized slots and either gets exactly that many back or an
//! `OutOfMemory` error. Swapping the allocator changes where memory comes from and
//! how much of it there is, without touching the container's growth logic.

use crate::error::{LabError, Result};

/// Supplies slot buffers to a container.
pub trait Allocator<T> {
    /// Allocate exactly `slots` slots, each holding `T::default()`.
    fn allocate(&self, slots: usize) -> Result<Box<[T]>>;
}

/// The process heap, with allocation failure reported instead of aborting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Global;

impl<T: Default> Allocator<T> for Global {
    fn allocate(&self, slots: usize) -> Result<Box<[T]>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(slots)
            .map_err(|_| LabError::OutOfMemory { requested: slots })?;
        buf.resize_with(slots, T::default);
        Ok(buf.into_boxed_slice())
    }
}

/// Heap allocation with a hard cap on the size of any single request.
///
/// Useful for exercising out-of-memory paths deterministically, and for callers
/// that want a container which can never grow past a known footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounded {
    max_slots: usize,
}

impl Bounded {
    pub fn new(max_slots: usize) -> Self {
        Self { max_slots }
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }
}

impl<T: Default> Allocator<T> for Bounded {
    fn allocate(&self, slots: usize) -> Result<Box<[T]>> {
        if slots > self.max_slots {
            return Err(LabError::OutOfMemory { requested: slots });
        }
        Global.allocate(slots)
    }
}
