#![no_std]

//! An in-memory ordered key-value index on a B+ tree.
//!
//! [`BPlusTreeMap`] is the public facade: construction, point lookups by
//! exact key or by [`SearchMode`], ranged and predicate scans with
//! pagination, and whole-tree iteration. The tree itself is built from a
//! generic sorted doubly-linked list that backs every node's cell
//! sequence — structurally, just a small number of these lists wired
//! together with sibling and parent pointers.
//!
//! Ordering is a caller-supplied [`KeyComparator`] rather than a `K: Ord`
//! bound, so the same tree can be keyed however a caller needs; `K: Ord`
//! types get [`NaturalOrder`] for free via [`BPlusTreeMap::new`].

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

mod comparator;
mod cursor;
mod error;
mod node;
mod sorted_list;
mod tree;

pub use comparator::{KeyComparator, NaturalOrder, SearchMode};
pub use cursor::{Items, Keys, Values};
pub use error::BPlusTreeError;

use tree::Tree;

/// An ordered key-value index backed by a B+ tree.
///
/// `C` is the key comparator; it defaults to [`NaturalOrder`] (plain
/// `K: Ord`) so `BPlusTreeMap<K, V>` works out of the box. Use
/// [`BPlusTreeMap::with_comparator`] for a custom order.
pub struct BPlusTreeMap<K, V, C = NaturalOrder> {
    tree: Tree<K, V>,
    cmp: C,
}

impl<K: Clone + Ord, V> BPlusTreeMap<K, V, NaturalOrder> {
    /// `max_node_size` bounds every node's cell count (must be even and
    /// at least 4, so `half_capacity` is exact and a split always yields
    /// two valid halves).
    pub fn new(max_node_size: usize) -> Result<Self, BPlusTreeError> {
        Ok(BPlusTreeMap {
            tree: Tree::new(max_node_size)?,
            cmp: NaturalOrder,
        })
    }
}

impl<K: Clone, V, C: KeyComparator<K>> BPlusTreeMap<K, V, C> {
    pub fn with_comparator(max_node_size: usize, cmp: C) -> Result<Self, BPlusTreeError> {
        Ok(BPlusTreeMap {
            tree: Tree::new(max_node_size)?,
            cmp,
        })
    }

    /// Inserts `key`, overwriting and returning the previous value on an
    /// exact key match (latest write wins). `value` may be `None` for a
    /// key-only entry.
    pub fn put(&mut self, key: K, value: Option<V>) -> Result<Option<V>, BPlusTreeError> {
        self.tree.insert(&self.cmp, key, value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(&self.cmp, key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(&self.cmp, key)
    }

    /// Looks up `key` by `mode` rather than plain equality: the matched
    /// key plus its value, or nothing if no key satisfies `mode` relative
    /// to `key`.
    pub fn get_kv(&self, key: &K, mode: SearchMode) -> Option<(&K, Option<&V>)> {
        self.tree.get_kv(&self.cmp, key, mode)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`'s entire collapsed entry (all duplicate writes to
    /// it), returning the most recent value.
    pub fn delete(&mut self, key: &K) -> Result<Option<V>, BPlusTreeError> {
        self.tree.delete(&self.cmp, key)
    }

    /// Entries in `[start, end]` (each bound inclusive when present,
    /// unbounded when `None`), skipping `offset` matches and stopping
    /// after `limit` (`None` for unbounded).
    pub fn range(
        &self,
        start: Option<&K>,
        end: Option<&K>,
        offset: usize,
        limit: Option<usize>,
    ) -> Vec<(&K, Option<&V>)> {
        self.tree.range(&self.cmp, start, end, offset, limit)
    }

    /// Every entry satisfying `pred`, resuming just after `bookmark` when
    /// given, stopping after `limit` matches.
    pub fn find(
        &self,
        pred: impl Fn(&K) -> bool,
        bookmark: Option<&K>,
        limit: Option<usize>,
    ) -> Vec<(&K, Option<&V>)> {
        self.tree.find(&self.cmp, pred, bookmark, limit)
    }

    pub fn size(&self) -> u64 {
        self.tree.len()
    }

    pub fn len(&self) -> u64 {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The key at position `size / 2` in ascending order (duplicates
    /// expanded). `None` on an empty index.
    pub fn middle_key(&self) -> Option<&K> {
        self.tree.middle_key()
    }

    pub fn first(&self) -> Option<(&K, Option<&V>)> {
        let id = self.tree.leftmost_leaf()?;
        let node = self.tree.node(id);
        let cid = node.cells.min_id()?;
        let cell = node.cells.get(cid);
        Some((&cell.key, cell.value.as_ref()))
    }

    pub fn last(&self) -> Option<(&K, Option<&V>)> {
        let id = self.tree.rightmost_leaf()?;
        let node = self.tree.node(id);
        let cid = node.cells.max_id()?;
        let cell = node.cells.get(cid);
        Some((&cell.key, cell.value.as_ref()))
    }

    /// Tree height: 1 for a single leaf root, growing by one per split
    /// of the root.
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    pub fn iter(&self) -> Items<'_, K, V> {
        Items::new(&self.tree)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(Items::new(&self.tree))
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(Items::new(&self.tree))
    }

    /// Cheap well-formedness check: `true` iff every structural invariant
    /// (leaf depth uniformity, node occupancy bounds, separator
    /// ordering, leaf chain consistency, parent back-references, size
    /// accounting) holds. See [`Self::check_invariants_detailed`] for a
    /// diagnosis when it doesn't.
    pub fn check_invariants(&self) -> bool {
        self.tree.check_invariants_detailed(&self.cmp).is_ok()
    }

    pub fn check_invariants_detailed(&self) -> Result<(), alloc::string::String> {
        self.tree.check_invariants_detailed(&self.cmp)
    }
}

impl<K: Clone, V, C> fmt::Debug for BPlusTreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BPlusTreeMap")
            .field("len", &self.tree.len())
            .field("depth", &self.tree.depth())
            .finish()
    }
}
