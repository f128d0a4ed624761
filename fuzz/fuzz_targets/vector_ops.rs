// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arbitrary operation sequences against a `Vec` oracle.
//!
//! Every operation is replayed on a `DynamicArray` and a `Vec`. The two must
//! agree after each step, and `len <= capacity` must hold throughout. A small
//! allocation budget makes some steps fail partway through the sequence; a
//! failed step must leave the array exactly as it was.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use labkit::testing::CountingAllocator;
use labkit::DynamicArray;

// Same `Vec` oracles the property tests use.
#[path = "../../tests/property/oracles.rs"]
#[allow(dead_code)]
mod oracles;
use oracles::{oracle_erase, oracle_insert};

#[derive(Debug, Arbitrary)]
enum Op {
    Push(i16),
    Pop,
    Insert(u8, i16),
    InsertSlice(u8, Vec<i16>),
    Erase(u8, u8),
    Reserve(u8),
    ShrinkToFit,
    Clear,
    Assign(Vec<i16>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    /// Allocations allowed before the allocator starts refusing; 0 means unlimited
    budget: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let alloc = match input.budget {
        0 => CountingAllocator::new(),
        n => CountingAllocator::failing_after(n as usize),
    };
    let Ok(mut array) = DynamicArray::new_in(alloc) else {
        return;
    };
    let mut oracle: Vec<i16> = Vec::new();

    for op in input.ops {
        let before = (array.len(), array.capacity());
        let result = match &op {
            Op::Push(v) => array.push_back(*v),
            Op::Pop => array.pop_back().map(|_| ()),
            Op::Insert(p, v) => array.insert(*p as usize, *v),
            Op::InsertSlice(p, vs) => array.insert_slice(*p as usize, vs),
            Op::Erase(p, n) => array.erase(*p as usize, *n as usize),
            Op::Reserve(n) => array.reserve(*n as usize),
            Op::ShrinkToFit => array.shrink_to_fit(),
            Op::Clear => array.clear(),
            Op::Assign(vs) => match DynamicArray::from_list(vs.iter().copied()) {
                Ok(other) => array.assign(&other),
                Err(_) => continue,
            },
        };

        match result {
            Ok(()) => match op {
                Op::Push(v) => oracle.push(v),
                Op::Pop => {
                    oracle.pop();
                }
                Op::Insert(p, v) => oracle.insert((p as usize).min(oracle.len()), v),
                Op::InsertSlice(p, vs) => oracle_insert(&mut oracle, p as usize, &vs),
                Op::Erase(p, n) => oracle_erase(&mut oracle, p as usize, n as usize),
                Op::Reserve(0) | Op::Clear => oracle.clear(),
                Op::Reserve(n) => oracle.truncate(n as usize),
                Op::ShrinkToFit => {}
                Op::Assign(vs) => oracle = vs,
            },
            Err(err) => {
                assert_eq!(err.kind(), "out_of_memory", "unexpected error {:?}", err);
                assert_eq!((array.len(), array.capacity()), before);
            }
        }

        assert!(array.len() <= array.capacity());
        assert_eq!(array.as_slice(), oracle.as_slice());
    }
});
