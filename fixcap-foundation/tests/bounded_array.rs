// FIXCAP - fixcap-foundation
// Module: BoundedArray Integration Tests
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Container-law coverage for `BoundedArray` across element types and
//! capacities, including the property-style checks.

#![allow(clippy::unwrap_used)]

use fixcap_foundation::{swap, BoundedArray};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Reading {
    id: u16,
    value: i32,
}

impl Reading {
    fn new(id: u16, value: i32) -> Self {
        Self { id, value }
    }
}

#[test]
fn default_construction_for_struct_elements() {
    let readings: BoundedArray<Reading, 3> = BoundedArray::new();
    assert!(readings.iter().all(|r| *r == Reading::default()));
}

#[test]
fn partial_construction_for_struct_elements() {
    let readings = BoundedArray::<Reading, 4>::from_partial([Reading::new(1, -5)]);
    assert_eq!(*readings.front(), Reading::new(1, -5));
    assert_eq!(*readings.back(), Reading::default());
}

#[test]
fn assignment_replaces_all_elements() {
    let mut current = BoundedArray::<i32, 3>::from([1, 2, 3]);
    let next = BoundedArray::<i32, 3>::from([4, 5, 6]);
    current = next;
    assert_eq!(current.as_slice(), &[4, 5, 6]);
}

#[test]
fn swap_then_fill_scenario() {
    let mut first = BoundedArray::<i32, 4>::from([1, 2, 3, 4]);
    let mut second = BoundedArray::<i32, 4>::from([5, 6, 7, 8]);

    swap(&mut first, &mut second);
    assert_eq!(first.as_slice(), &[5, 6, 7, 8]);

    first.fill(100);
    assert_eq!(first.as_slice(), &[100, 100, 100, 100]);
}

#[test]
fn ordering_agrees_with_equality() {
    let a = BoundedArray::<i32, 3>::from([1, 2, 3]);
    let b = BoundedArray::<i32, 3>::from([1, 2, 3]);
    assert!(a <= b && a >= b);
    assert_eq!(a, b);
}

#[test]
fn zero_capacity_arrays_compare_equal() {
    let a: BoundedArray<u8, 0> = BoundedArray::new();
    let b: BoundedArray<u8, 0> = BoundedArray::new();
    assert_eq!(a, b);
    assert!(a <= b);
}

#[test]
fn sorting_works_through_ord() {
    let mut rows = [
        BoundedArray::<u8, 2>::from([3, 0]),
        BoundedArray::<u8, 2>::from([1, 9]),
        BoundedArray::<u8, 2>::from([1, 2]),
    ];
    rows.sort();
    assert_eq!(rows[0].as_slice(), &[1, 2]);
    assert_eq!(rows[1].as_slice(), &[1, 9]);
    assert_eq!(rows[2].as_slice(), &[3, 0]);
}

proptest! {
    #[test]
    fn fill_sets_every_element(value in any::<i32>()) {
        let mut values = BoundedArray::<i32, 8>::new();
        values.fill(value);
        prop_assert!(values.iter().all(|&element| element == value));
    }

    #[test]
    fn swap_is_an_exact_exchange(a in any::<[i32; 4]>(), b in any::<[i32; 4]>()) {
        let mut first = BoundedArray::from(a);
        let mut second = BoundedArray::from(b);
        swap(&mut first, &mut second);
        prop_assert_eq!(first.as_slice(), &b);
        prop_assert_eq!(second.as_slice(), &a);
    }

    #[test]
    fn equality_is_element_wise(a in any::<[u8; 5]>(), b in any::<[u8; 5]>()) {
        let first = BoundedArray::from(a);
        let second = BoundedArray::from(b);
        prop_assert_eq!(first == second, a == b);
    }

    #[test]
    fn ordering_matches_slice_ordering(a in any::<[u8; 3]>(), b in any::<[u8; 3]>()) {
        let first = BoundedArray::from(a);
        let second = BoundedArray::from(b);
        prop_assert_eq!(first.cmp(&second), a.as_slice().cmp(b.as_slice()));
    }

    #[test]
    fn partial_construction_prefix_and_padding(values in any::<[i16; 3]>()) {
        let constructed = BoundedArray::<i16, 6>::from_partial(values);
        prop_assert_eq!(&constructed.as_slice()[..3], &values);
        prop_assert!(constructed.as_slice()[3..].iter().all(|&v| v == 0));
    }
}
