// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mutating operations: append, remove, insert, erase, assign.
//!
//! Element shifting is done with slice rotations over the fully-initialized buffer,
//! so an insert is "write the new elements past the end, rotate them into place" and
//! an erase is "rotate the gap to the end, reset it to defaults".

use std::mem;

use tracing::trace;

use super::{grown, DynamicArray};
use crate::allocator::Allocator;
use crate::contracts;
use crate::error::{LabError, Result};

impl<T: Default, A: Allocator<T>> DynamicArray<T, A> {
    /// Append `value`, growing to `(len + 1) * GROWTH_FACTOR` slots if full.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        let new_len = self.len + 1;
        if self.capacity() < new_len {
            self.reserve(grown(new_len)?)?;
        }
        self.buf[self.len] = value;
        self.len = new_len;
        contracts::check_capacity_bound(self.len, self.capacity());
        Ok(())
    }

    /// Remove and return the last element, then shrink if the buffer became
    /// oversized. Empty arrays return `Ok(None)`.
    pub fn pop_back(&mut self) -> Result<Option<T>> {
        if self.len == 0 {
            return Ok(None);
        }
        let new_len = self.len - 1;
        let plan = self.shrink_plan(new_len)?;

        let value = mem::take(&mut self.buf[new_len]);
        self.len = new_len;
        if let Some(fresh) = plan {
            self.install(fresh, new_len);
        }
        contracts::check_sanitized(self.len, self.capacity());
        Ok(Some(value))
    }

    /// Erase up to `count` elements starting at `pos`, shifting the tail left.
    ///
    /// - `pos > len` is silently ignored.
    /// - `count == 0` erases through the end.
    /// - `count` running past the end erases as many as exist.
    ///
    /// The sanitize step runs afterwards, even if nothing was erased.
    pub fn erase(&mut self, pos: usize, count: usize) -> Result<()> {
        if pos > self.len {
            trace!(pos, len = self.len, "erase past end ignored");
            return Ok(());
        }
        let count = if count == 0 { self.len } else { count };
        let new_len = if pos.saturating_add(count) < self.len {
            self.len - count
        } else {
            pos
        };
        let plan = self.shrink_plan(new_len)?;

        let removed = self.len - new_len;
        self.buf[pos..self.len].rotate_left(removed);
        for slot in &mut self.buf[new_len..self.len] {
            *slot = T::default();
        }
        self.len = new_len;
        if let Some(fresh) = plan {
            self.install(fresh, new_len);
        }
        contracts::check_sanitized(self.len, self.capacity());
        Ok(())
    }

    /// Insert `value` before `pos`. Positions at or past the end append.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<()> {
        let pos = pos.min(self.len);
        let new_len = self.len + 1;
        if self.capacity() < new_len {
            self.reserve(grown(new_len)?)?;
        }
        self.buf[self.len] = value;
        self.buf[pos..new_len].rotate_right(1);
        self.len = new_len;
        contracts::check_capacity_bound(self.len, self.capacity());
        Ok(())
    }
}

impl<T: Default + Clone, A: Allocator<T>> DynamicArray<T, A> {
    /// Insert copies of `items` before `pos`. Positions at or past the end append.
    ///
    /// Grows to `(len + items.len()) * GROWTH_FACTOR` slots when the result won't fit.
    pub fn insert_slice(&mut self, pos: usize, items: &[T]) -> Result<()> {
        let pos = pos.min(self.len);
        let new_len = self
            .len
            .checked_add(items.len())
            .ok_or(LabError::OutOfMemory { requested: usize::MAX })?;
        if self.capacity() < new_len {
            self.reserve(grown(new_len)?)?;
        }
        self.buf[self.len..new_len].clone_from_slice(items);
        self.buf[pos..new_len].rotate_right(items.len());
        self.len = new_len;
        contracts::check_capacity_bound(self.len, self.capacity());
        Ok(())
    }

    /// Insert the first `count` elements of `other` before `pos`.
    /// `count == 0` means all of `other`; more than `other.len()` is out of range.
    pub fn insert_from<B>(
        &mut self,
        pos: usize,
        other: &DynamicArray<T, B>,
        count: usize,
    ) -> Result<()> {
        let count = if count == 0 { other.len() } else { count };
        if count > other.len() {
            return Err(LabError::OutOfRange {
                index: count - 1,
                len: other.len(),
            });
        }
        self.insert_slice(pos, &other.as_slice()[..count])
    }

    /// Replace the contents with a copy of `other`'s logical elements.
    ///
    /// Capacity is only touched when `other` doesn't fit, in which case the array
    /// grows to `other.len() * GROWTH_FACTOR`.
    pub fn assign<B>(&mut self, other: &DynamicArray<T, B>) -> Result<()> {
        let n = other.len();
        if self.capacity() < n {
            let mut fresh = self.alloc.allocate(grown(n)?)?;
            fresh[..n].clone_from_slice(other.as_slice());
            self.install(fresh, 0);
        } else {
            self.buf[..n].clone_from_slice(other.as_slice());
            if n < self.len {
                for slot in &mut self.buf[n..self.len] {
                    *slot = T::default();
                }
            }
        }
        self.len = n;
        contracts::check_capacity_bound(self.len, self.capacity());
        Ok(())
    }
}
