// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A contiguous, owning, resizable array with explicit capacity management.
//!
//! `DynamicArray` keeps its elements in a single boxed slot buffer handed out by an
//! [`Allocator`]. The buffer is always fully initialized (spare slots hold
//! `T::default()`), so every slot is a real `T` and the whole type stays free of
//! `unsafe`. Only the first `len` slots are logical contents.
//!
//! # Capacity policy
//!
//! | Event                         | New capacity                                 |
//! |-------------------------------|----------------------------------------------|
//! | default construction, `clear` | `INITIAL_CAPACITY` (10)                      |
//! | construction with `n > 0`     | `n * GROWTH_FACTOR`                          |
//! | append/insert past capacity   | `(len + added) * GROWTH_FACTOR`              |
//! | removal leaves `cap > len*4`  | `len * GROWTH_FACTOR` (or 10 when emptied)   |
//! | `reserve(n)`                  | exactly `n` (`reserve(0)` is `clear`)        |
//!
//! Growth lands at 2x and shrinking only triggers past 4x, so a push right after a
//! shrink never reallocates and a pop right after a grow never shrinks.
//!
//! # Failure model
//!
//! Every operation that needs a new buffer allocates it before it touches the old
//! one. An `Err` therefore always leaves the array exactly as it was.

mod edit;

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::allocator::{Allocator, Global};
use crate::contracts;
use crate::error::{LabError, Result};

/// Slots allocated for an empty array.
pub const INITIAL_CAPACITY: usize = 10;

/// How far ahead of the requested length capacity is allocated.
pub const GROWTH_FACTOR: usize = 2;

/// Removals shrink the buffer once capacity exceeds `len * SANITIZE_FACTOR`.
pub const SANITIZE_FACTOR: usize = GROWTH_FACTOR * 2;

/// `len * GROWTH_FACTOR`, or `OutOfMemory` if that doesn't fit in `usize`.
pub(crate) fn grown(len: usize) -> Result<usize> {
    len.checked_mul(GROWTH_FACTOR)
        .ok_or(LabError::OutOfMemory { requested: usize::MAX })
}

/// Capacity for a freshly constructed array holding `len` elements.
fn storage_for(len: usize) -> Result<usize> {
    if len == 0 {
        Ok(INITIAL_CAPACITY)
    } else {
        grown(len)
    }
}

/// Owning, resizable, contiguous sequence with a pluggable allocator.
///
/// # Invariants
/// - `len <= capacity` at all times
/// - slots `[0, len)` are the logical contents, in order
/// - the buffer is owned exclusively; `take` leaves the source in the default state
pub struct DynamicArray<T, A = Global> {
    buf: Box<[T]>,
    len: usize,
    alloc: A,
}

// ============================================================================
// CONSTRUCTION (global heap)
// ============================================================================

impl<T: Default> DynamicArray<T> {
    /// Empty array with `INITIAL_CAPACITY` slots.
    pub fn new() -> Result<Self> {
        Self::new_in(Global)
    }

    /// `len` default-constructed elements.
    pub fn with_len(len: usize) -> Result<Self> {
        Self::with_len_in(len, Global)
    }

    /// Build from a list of values, like an initializer list. See [`dyn_array!`].
    ///
    /// [`dyn_array!`]: crate::dyn_array
    pub fn from_list<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Self::from_list_in(items, Global)
    }
}

impl<T: Default + Clone> DynamicArray<T> {
    /// `len` copies of `value`.
    pub fn from_elem(len: usize, value: T) -> Result<Self> {
        Self::from_elem_in(len, value, Global)
    }

    /// Copy of a raw element buffer. An empty buffer is an invalid argument.
    pub fn from_slice(items: &[T]) -> Result<Self> {
        Self::from_slice_in(items, Global)
    }
}

// ============================================================================
// CONSTRUCTION (explicit allocator)
// ============================================================================

impl<T: Default, A: Allocator<T>> DynamicArray<T, A> {
    pub fn new_in(alloc: A) -> Result<Self> {
        let buf = alloc.allocate(INITIAL_CAPACITY)?;
        Ok(Self { buf, len: 0, alloc })
    }

    /// `len` default values. The allocator hands back defaulted slots already.
    pub fn with_len_in(len: usize, alloc: A) -> Result<Self> {
        let buf = alloc.allocate(storage_for(len)?)?;
        Ok(Self { buf, len, alloc })
    }

    pub fn from_list_in<I>(items: I, alloc: A) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let expected = items.len();
        let mut buf = alloc.allocate(storage_for(expected)?)?;
        let mut len = 0;
        for (slot, item) in buf.iter_mut().zip(items) {
            *slot = item;
            len += 1;
        }
        debug_assert_eq!(
            len, expected,
            "iterator reported {} items but yielded {}",
            expected, len
        );
        Ok(Self { buf, len, alloc })
    }

    /// Move the contents out, leaving `self` as a freshly constructed empty array.
    ///
    /// The replacement buffer is allocated first; on failure nothing moves.
    pub fn take(&mut self) -> Result<Self>
    where
        A: Clone,
    {
        let fresh = Self::new_in(self.alloc.clone())?;
        Ok(mem::replace(self, fresh))
    }

    /// Reallocate to exactly `new_capacity` slots, keeping `min(new_capacity, len)`
    /// elements. `reserve(0)` is [`clear`](Self::clear); reserving the current
    /// capacity does nothing.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return self.clear();
        }
        if new_capacity == self.capacity() {
            return Ok(());
        }

        let fresh = self.alloc.allocate(new_capacity)?;
        let keep = new_capacity.min(self.len);
        self.install(fresh, keep);
        Ok(())
    }

    /// `reserve(len)`.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        self.reserve(self.len)
    }

    /// Drop every element and return to the default-constructed state.
    pub fn clear(&mut self) -> Result<()> {
        let fresh = self.alloc.allocate(INITIAL_CAPACITY)?;
        self.install(fresh, 0);
        Ok(())
    }

    /// Swap in a new buffer, moving the first `keep` elements across.
    fn install(&mut self, mut fresh: Box<[T]>, keep: usize) {
        fresh[..keep].swap_with_slice(&mut self.buf[..keep]);
        let old_capacity = self.buf.len();
        self.buf = fresh;
        self.len = keep;
        trace!(
            from = old_capacity,
            to = self.buf.len(),
            len = keep,
            "reallocated storage"
        );
        contracts::check_capacity_bound(self.len, self.capacity());
    }

    /// Buffer to shrink into if dropping to `new_len` would trip the sanitize
    /// threshold. Allocated up front so the caller can mutate infallibly afterwards.
    fn shrink_plan(&self, new_len: usize) -> Result<Option<Box<[T]>>> {
        if self.capacity() <= new_len.saturating_mul(SANITIZE_FACTOR) {
            return Ok(None);
        }
        // new_len * SANITIZE_FACTOR < capacity, so this cannot overflow
        let target = new_len * GROWTH_FACTOR;
        let slots = if target == 0 { INITIAL_CAPACITY } else { target };
        self.alloc.allocate(slots).map(Some)
    }
}

impl<T: Default + Clone, A: Allocator<T>> DynamicArray<T, A> {
    pub fn from_elem_in(len: usize, value: T, alloc: A) -> Result<Self> {
        let mut buf = alloc.allocate(storage_for(len)?)?;
        buf[..len].fill(value);
        Ok(Self { buf, len, alloc })
    }

    pub fn from_slice_in(items: &[T], alloc: A) -> Result<Self> {
        if items.is_empty() {
            debug!("rejected construction from an empty buffer");
            return Err(LabError::invalid("cannot construct from an empty buffer"));
        }
        let mut buf = alloc.allocate(grown(items.len())?)?;
        buf[..items.len()].clone_from_slice(items);
        Ok(Self {
            buf,
            len: items.len(),
            alloc,
        })
    }

    /// Copy of the logical elements. Spare capacity is not copied: the clone gets
    /// `len * GROWTH_FACTOR` slots (or `INITIAL_CAPACITY` when empty).
    pub fn try_clone(&self) -> Result<Self>
    where
        A: Clone,
    {
        let mut buf = self.alloc.allocate(storage_for(self.len)?)?;
        buf[..self.len].clone_from_slice(self.as_slice());
        Ok(Self {
            buf,
            len: self.len,
            alloc: self.alloc.clone(),
        })
    }
}

// ============================================================================
// ACCESS
// ============================================================================

impl<T, A> DynamicArray<T, A> {
    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Checked element access.
    pub fn at(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(LabError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&self.buf[index])
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(LabError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&mut self.buf[index])
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The logical elements, `[data, data + len)`.
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, A> Index<usize> for DynamicArray<T, A> {
    type Output = T;

    /// # Panics
    /// Panics with the out-of-range message if `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, A> IndexMut<usize> for DynamicArray<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a, T, A> IntoIterator for &'a DynamicArray<T, A> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A> IntoIterator for &'a mut DynamicArray<T, A> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ============================================================================
// COMPARISON & RENDERING
// ============================================================================

impl<T: PartialEq, A, B> PartialEq<DynamicArray<T, B>> for DynamicArray<T, A> {
    fn eq(&self, other: &DynamicArray<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A> Eq for DynamicArray<T, A> {}

impl<T: PartialEq, A> PartialEq<[T]> for DynamicArray<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, A, const N: usize> PartialEq<[T; N]> for DynamicArray<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, A> PartialEq<Vec<T>> for DynamicArray<T, A> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Each element followed by `"; "`, then a newline.
impl<T: fmt::Display, A> fmt::Display for DynamicArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            write!(f, "{}; ", item)?;
        }
        writeln!(f)
    }
}

impl<T: fmt::Debug, A> fmt::Debug for DynamicArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

// ============================================================================
// SERDE
// ============================================================================

impl<T: Serialize, A> Serialize for DynamicArray<T, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, A> Deserialize<'de> for DynamicArray<T, A>
where
    T: Deserialize<'de> + Default,
    A: Allocator<T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::from_list_in(items, A::default()).map_err(D::Error::custom)
    }
}

/// Build a [`DynamicArray`] from a list of values, like an initializer list.
///
/// Evaluates to `Result<DynamicArray<T>, LabError>`.
///
/// ```
/// let v = labkit::dyn_array![11, 20, 40].unwrap();
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 6);
/// ```
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynamicArray::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::DynamicArray::from_list([$($item),+])
    };
}
