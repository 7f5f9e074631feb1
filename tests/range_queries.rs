//! Range cursor behavior: bounded/unbounded ends, inclusive boundaries,
//! and offset/limit pagination across several leaves.

mod test_util;
use test_util::*;

#[test]
fn unbounded_range_equals_sorted_keys() {
    let keys: Vec<i32> = (1..=30).collect();
    let tree = tree_of(4, &keys);
    let got: Vec<i32> = tree.range(None, None, 0, None).into_iter().map(|(k, _)| *k).collect();
    assert_eq!(got, keys);
}

#[test]
fn range_is_inclusive_of_both_present_bounds() {
    let tree = tree_of(4, &(1..=30).collect::<Vec<_>>());
    let (lo, hi) = (10, 20);
    let got: Vec<i32> = tree.range(Some(&lo), Some(&hi), 0, None).into_iter().map(|(k, _)| *k).collect();
    assert_eq!(got, (10..=20).collect::<Vec<i32>>());
}

#[test]
fn range_bounds_absent_from_the_tree_still_clip_correctly() {
    // Only even keys exist; bounding by odd values must still include the
    // nearest in-range evens on both sides (inclusive, LE-style
    // resolution of the end bound).
    let evens: Vec<i32> = (0..40).step_by(2).collect();
    let tree = tree_of(4, &evens);
    let (lo, hi) = (11, 27);
    let got: Vec<i32> = tree.range(Some(&lo), Some(&hi), 0, None).into_iter().map(|(k, _)| *k).collect();
    assert_eq!(got, vec![12, 14, 16, 18, 20, 22, 24, 26]);
}

#[test]
fn range_offset_and_limit_paginate() {
    let keys: Vec<i32> = (1..=20).collect();
    let tree = tree_of(4, &keys);
    let page1: Vec<i32> = tree.range(None, None, 0, Some(5)).into_iter().map(|(k, _)| *k).collect();
    let page2: Vec<i32> = tree.range(None, None, 5, Some(5)).into_iter().map(|(k, _)| *k).collect();
    let page3: Vec<i32> = tree.range(None, None, 10, Some(5)).into_iter().map(|(k, _)| *k).collect();
    assert_eq!(page1, vec![1, 2, 3, 4, 5]);
    assert_eq!(page2, vec![6, 7, 8, 9, 10]);
    assert_eq!(page3, vec![11, 12, 13, 14, 15]);
}

#[test]
fn range_offset_beyond_available_yields_empty() {
    let tree = tree_of(4, &(1..=5).collect::<Vec<_>>());
    assert!(tree.range(None, None, 100, None).is_empty());
}

#[test]
fn range_on_empty_tree_is_empty() {
    let tree: ordered_index::BPlusTreeMap<i32, i32> = ordered_index::BPlusTreeMap::new(4).unwrap();
    assert!(tree.range(None, None, 0, None).is_empty());
}

#[test]
fn range_expands_duplicates() {
    let mut tree: ordered_index::BPlusTreeMap<i32, i32> = ordered_index::BPlusTreeMap::new(4).unwrap();
    for v in [1, 2, 2, 2, 3] {
        tree.put(v, Some(v)).unwrap();
    }
    let got: Vec<i32> = tree.range(None, None, 0, None).into_iter().map(|(k, _)| *k).collect();
    assert_eq!(got, vec![1, 2, 2, 2, 3]);
    assert_eq!(tree.size(), 5);
}

#[test]
fn range_single_point_bound() {
    let tree = tree_of(4, &(1..=30).collect::<Vec<_>>());
    let fifteen = 15;
    let got: Vec<i32> = tree.range(Some(&fifteen), Some(&fifteen), 0, None).into_iter().map(|(k, _)| *k).collect();
    assert_eq!(got, vec![15]);
}
