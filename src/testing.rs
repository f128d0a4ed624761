//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::cell::Cell;
use std::rc::Rc;

use crate::allocator::{Allocator, Global};
use crate::error::{LabError, Result};
use crate::vector::DynamicArray;

/// Allocator that counts requests and can be told to start refusing them.
///
/// Clones share the same counter, so a test can keep a handle while the
/// container owns another.
#[derive(Debug, Clone, Default)]
pub struct CountingAllocator {
    allocations: Rc<Cell<usize>>,
    fail_after: Option<usize>,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed for the first `n` requests, then report out-of-memory.
    pub fn failing_after(n: usize) -> Self {
        Self {
            allocations: Rc::default(),
            fail_after: Some(n),
        }
    }

    /// Successful allocations so far.
    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }
}

impl<T: Default> Allocator<T> for CountingAllocator {
    fn allocate(&self, slots: usize) -> Result<Box<[T]>> {
        if self.fail_after.is_some_and(|limit| self.allocations.get() >= limit) {
            return Err(LabError::OutOfMemory { requested: slots });
        }
        let buf = Global.allocate(slots)?;
        self.allocations.set(self.allocations.get() + 1);
        Ok(buf)
    }
}

/// Assert the container invariant and compare contents against an oracle.
pub fn assert_matches_oracle<T, A>(array: &DynamicArray<T, A>, oracle: &[T])
where
    T: PartialEq + std::fmt::Debug,
{
    assert!(
        array.len() <= array.capacity(),
        "len {} > capacity {}",
        array.len(),
        array.capacity()
    );
    assert_eq!(array.as_slice(), oracle);
}
