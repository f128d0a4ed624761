//! DynamicArray through the public API: construction, capacity policy,
//! mutation and failure atomicity.

use crate::common::{assert_matches_oracle, v4, CountingAllocator, V4};
use labkit::{dyn_array, Bounded, DynamicArray, LabError, INITIAL_CAPACITY};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn raw_buffer_copy_reads_back_in_order() {
    let a = [9, 8, 7, 6, 5, 4, 3, 2, 1];
    let v = DynamicArray::from_slice(&a).unwrap();
    assert_eq!(v.len(), 9);
    for (i, expected) in a.iter().enumerate() {
        assert_eq!(v.at(i).unwrap(), expected);
        assert_eq!(&v[i], expected);
    }
}

#[test]
fn empty_raw_buffer_is_invalid() {
    let err = DynamicArray::<i32>::from_slice(&[]).unwrap_err();
    assert!(matches!(err, LabError::InvalidArgument { .. }));
}

#[test]
fn fill_constructors() {
    let tens = DynamicArray::from_elem(10, 10).unwrap();
    assert_eq!(tens, [10; 10]);
    assert_eq!(tens.capacity(), 20);

    let zeros: DynamicArray<u64> = DynamicArray::with_len(3).unwrap();
    assert_eq!(zeros, [0, 0, 0]);
    assert_eq!(zeros.capacity(), 6);
}

#[test]
fn zero_length_fill_matches_default_construction() {
    let filled = DynamicArray::from_elem(0, 7).unwrap();
    let empty = DynamicArray::<i32>::new().unwrap();
    assert_eq!(filled.capacity(), empty.capacity());
    assert_eq!(filled.capacity(), INITIAL_CAPACITY);
    assert!(filled.is_empty());
}

#[test]
fn copy_duplicates_size_not_capacity() {
    let mut source = v4();
    source.reserve(100).unwrap();
    let copy = source.try_clone().unwrap();
    assert_eq!(copy, source);
    assert_eq!(copy.capacity(), 22);
}

#[test]
fn move_leaves_source_default_constructed() {
    let mut source = v4();
    let moved = source.take().unwrap();
    assert_eq!(moved, V4);
    assert!(source.is_empty());
    assert_eq!(source.capacity(), INITIAL_CAPACITY);
}

#[test]
fn macro_builds_from_a_list() {
    let v: DynamicArray<i32> = dyn_array![].unwrap();
    assert!(v.is_empty());
    let v = dyn_array![1, 2, 3].unwrap();
    assert_eq!(v.to_string(), "1; 2; 3; \n");
}

// ============================================================================
// ACCESS
// ============================================================================

#[test]
fn access_past_len_is_out_of_range_even_within_capacity() {
    let mut v = v4();
    assert!(v.capacity() > 11);
    assert_eq!(
        v.at(11).unwrap_err(),
        LabError::OutOfRange { index: 11, len: 11 }
    );
    assert!(v.at_mut(100).is_err());
    assert_eq!(v.get(11), None);
}

#[test]
#[should_panic(expected = "no such element")]
fn index_operator_panics_past_len() {
    let v = v4();
    let _value = v[11];
}

// ============================================================================
// MUTATION
// ============================================================================

#[test]
fn erase_removes_the_middle_and_shifts_left() {
    let mut v = v4();
    v.erase(3, 3).unwrap();
    assert_matches_oracle(&v, &[11, 20, 40, 900, 1000, 9000, -1, -432]);
}

#[test]
fn erase_edge_cases() {
    let mut v = v4();
    v.erase(12, 1).unwrap();
    assert_eq!(v.len(), 11);

    v.erase(9, 100).unwrap();
    assert_eq!(v.len(), 9);

    v.erase(4, 0).unwrap();
    assert_matches_oracle(&v, &[11, 20, 40, 100]);
}

#[test]
fn insert_prepends_and_appends() {
    let mut v = v4();
    v.insert(0, 0).unwrap();
    assert_eq!(v.len(), 12);
    assert_eq!(v.first(), Some(&0));
    assert_eq!(&v.as_slice()[1..], &V4);

    v.insert(500, 7).unwrap();
    assert_eq!(v.last(), Some(&7));
}

#[test]
fn insert_from_defaults_to_the_whole_source() {
    let mut v = dyn_array![1, 5].unwrap();
    let other = dyn_array![2, 3, 4].unwrap();
    v.insert_from(1, &other, 0).unwrap();
    assert_eq!(v, [1, 2, 3, 4, 5]);

    v.insert_from(0, &other, 2).unwrap();
    assert_eq!(v, [2, 3, 1, 2, 3, 4, 5]);

    let err = v.insert_from(0, &other, 4).unwrap_err();
    assert_eq!(err, LabError::OutOfRange { index: 3, len: 3 });
}

#[test]
fn assign_copies_contents_not_capacity() {
    let mut v = v4();
    let small = dyn_array![1, 2].unwrap();
    v.assign(&small).unwrap();
    assert_eq!(v, [1, 2]);
    assert_eq!(v.capacity(), 22);

    let mut tiny = dyn_array![0].unwrap();
    tiny.assign(&v4()).unwrap();
    assert_eq!(tiny, V4);
    assert_eq!(tiny.capacity(), 22);
}

#[test]
fn clear_restores_the_default_state() {
    let mut v = v4();
    v.clear().unwrap();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), INITIAL_CAPACITY);
}

#[test]
fn pop_on_empty_is_a_no_op() {
    let mut v = DynamicArray::<i32>::new().unwrap();
    assert_eq!(v.pop_back().unwrap(), None);
    assert_eq!(v.capacity(), INITIAL_CAPACITY);
}

// ============================================================================
// CAPACITY POLICY
// ============================================================================

#[test]
fn reserve_semantics() {
    let mut v = v4();
    v.reserve(5).unwrap();
    assert_eq!((v.len(), v.capacity()), (5, 5));
    assert_eq!(v, [11, 20, 40, 100, 135]);

    v.reserve(0).unwrap();
    assert_eq!((v.len(), v.capacity()), (0, INITIAL_CAPACITY));
}

#[test]
fn shrink_to_fit_is_idempotent() {
    let mut v = v4();
    v.shrink_to_fit().unwrap();
    let first = (v.len(), v.capacity());
    v.shrink_to_fit().unwrap();
    assert_eq!((v.len(), v.capacity()), first);
    assert_eq!(first, (11, 11));
}

#[test]
fn erase_shrinks_past_the_sanitize_threshold() {
    let mut v = DynamicArray::from_list(0..20).unwrap();
    assert_eq!(v.capacity(), 40);
    v.erase(5, 0).unwrap();
    // 40 > 5 * 4
    assert_eq!((v.len(), v.capacity()), (5, 10));
}

#[test]
fn pop_push_cycle_never_reallocates() {
    let alloc = CountingAllocator::new();
    let mut v = DynamicArray::from_list_in(0..8, alloc.clone()).unwrap();
    let before = alloc.allocations();
    for _ in 0..50 {
        v.pop_back().unwrap();
        v.push_back(1).unwrap();
    }
    assert_eq!(alloc.allocations(), before);
}

// ============================================================================
// FAILURE ATOMICITY
// ============================================================================

#[test]
fn refused_growth_leaves_the_array_untouched() {
    let mut v = DynamicArray::from_list_in([1, 2, 3], Bounded::new(6)).unwrap();
    for x in 4..=6 {
        v.push_back(x).unwrap();
    }
    let err = v.push_back(7).unwrap_err();
    assert_eq!(err, LabError::OutOfMemory { requested: 14 });
    assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    assert_eq!(v.capacity(), 6);
}

#[test]
fn refused_shrink_leaves_contents_intact() {
    let alloc = CountingAllocator::failing_after(1);
    let mut v = DynamicArray::from_list_in(0..20, alloc).unwrap();
    v.reserve(20).unwrap_err();
    v.erase(2, 0).unwrap_err();
    assert_eq!(v.len(), 20);
    assert_eq!(v.pop_back().unwrap(), Some(19));
}

#[test]
fn oversized_request_is_out_of_memory() {
    let err =
        DynamicArray::<i32, _>::with_len_in(usize::MAX / 4, Bounded::new(1 << 20)).unwrap_err();
    assert_eq!(err.kind(), "out_of_memory");
}
