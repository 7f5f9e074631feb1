//! Node container: a `SortedList` of cells plus the sibling/parent
//! back-references that stitch nodes into a tree, all expressed as
//! [`NodeId`] handles into the tree's node arena rather than pointers.

use crate::sorted_list::{CellId, SortedList};

/// A stable handle to one node in a [`crate::tree::Tree`]'s arena. Valid
/// until that node is freed on merge or root collapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// One slot inside a node: a key, an optional value (leaves only), and —
/// for interior nodes — the right subtree boundary.
pub struct Cell<K, V> {
    pub key: K,
    pub value: Option<V>,
    /// Present only in interior-node cells: the subtree containing keys
    /// strictly greater than `key` and strictly less than the next cell's
    /// key (or +infinity if this is the last cell).
    pub right_child: Option<NodeId>,
}

impl<K, V> Cell<K, V> {
    pub fn leaf(key: K, value: Option<V>) -> Self {
        Cell {
            key,
            value,
            right_child: None,
        }
    }

    pub fn interior(key: K, right_child: NodeId) -> Self {
        Cell {
            key,
            value: None,
            right_child: Some(right_child),
        }
    }
}

/// A node of the tree.
pub struct Node<K, V> {
    pub is_leaf: bool,
    pub cells: SortedList<Cell<K, V>>,
    pub left_sibling: Option<NodeId>,
    pub right_sibling: Option<NodeId>,
    pub parent: Option<NodeId>,
    /// The cell in `parent` whose `right_child` is this node; absent iff
    /// this node is `parent`'s left-most child.
    pub parent_cell: Option<CellId>,
    /// Interior nodes only: the subtree for keys strictly less than
    /// `cells.min.key`.
    pub left_most_child: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    pub fn new_leaf() -> Self {
        Node {
            is_leaf: true,
            cells: SortedList::new(),
            left_sibling: None,
            right_sibling: None,
            parent: None,
            parent_cell: None,
            left_most_child: None,
        }
    }

    pub fn new_interior() -> Self {
        Node {
            is_leaf: false,
            cells: SortedList::new(),
            left_sibling: None,
            right_sibling: None,
            parent: None,
            parent_cell: None,
            left_most_child: None,
        }
    }
}
