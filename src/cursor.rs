//! Whole-tree iteration (`iter`/`keys`/`values`), walking the leaf chain
//! node by node rather than collecting into a `Vec` up front — the same
//! chain [`crate::tree::Tree::range`] and `find` traverse, just unbounded
//! and lazy.

use crate::node::NodeId;
use crate::sorted_list::CellId;
use crate::tree::Tree;

pub struct Items<'a, K, V> {
    tree: &'a Tree<K, V>,
    cur: Option<NodeId>,
    cell: Option<CellId>,
}

impl<'a, K: Clone, V> Items<'a, K, V> {
    pub(crate) fn new(tree: &'a Tree<K, V>) -> Self {
        Items {
            tree,
            cur: tree.leftmost_leaf(),
            cell: None,
        }
    }
}

impl<'a, K: Clone, V> Iterator for Items<'a, K, V> {
    type Item = (&'a K, Option<&'a V>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node_id = self.cur?;
            let node = self.tree.node(node_id);
            match self.cell {
                Some(cid) => {
                    let cell = node.cells.get(cid);
                    self.cell = node.cells.next(cid);
                    return Some((&cell.key, cell.value.as_ref()));
                }
                None => match node.cells.min_id() {
                    Some(cid) => self.cell = Some(cid),
                    None => {
                        self.cur = node.right_sibling;
                    }
                },
            }
        }
    }
}

pub struct Keys<'a, K, V>(pub(crate) Items<'a, K, V>);

impl<'a, K: Clone, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }
}

pub struct Values<'a, K, V>(pub(crate) Items<'a, K, V>);

impl<'a, K: Clone, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.0.next()? {
                (_, Some(v)) => return Some(v),
                (_, None) => continue,
            }
        }
    }
}
