//! Shared helpers for the integration suite: a tiny builder plus an
//! invariant-checking assertion wired to `check_invariants_detailed`.

#![allow(dead_code)]

use ordered_index::BPlusTreeMap;

pub fn tree_of(max_node_size: usize, keys: &[i32]) -> BPlusTreeMap<i32, i32> {
    let mut tree = BPlusTreeMap::new(max_node_size).expect("valid max_node_size");
    for &k in keys {
        tree.put(k, Some(k)).expect("insert on a well-formed tree does not fail");
        assert_valid(&tree);
    }
    tree
}

pub fn assert_valid<V>(tree: &BPlusTreeMap<i32, V>) {
    if let Err(e) = tree.check_invariants_detailed() {
        panic!("tree invariants violated: {e}");
    }
}

pub fn keys_of<V>(tree: &BPlusTreeMap<i32, V>) -> Vec<i32> {
    tree.keys().copied().collect()
}
