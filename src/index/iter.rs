//! Ascending iteration over the index.
//!
//! The iterator walks the tree in order without recursion: it keeps the
//! left spine of the unvisited part on a stack and, after yielding a
//! node, pushes the left spine of that node's right subtree.

use slab::Slab;

use crate::index::IndexNode;
use crate::types::Record;

/// In-order (ascending id) iterator over an [`AvlIndex`](crate::index::AvlIndex).
///
/// Holds an explicit stack of slab keys, never deeper than the tree height.
pub struct Iter<'a> {
    nodes: &'a Slab<IndexNode>,
    stack: Vec<usize>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(nodes: &'a Slab<IndexNode>, root: Option<usize>) -> Self {
        let mut iter = Iter {
            nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<usize>) {
        while let Some(key) = link {
            self.stack.push(key);
            link = self.nodes[key].left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        let node = &self.nodes[key];
        self.push_left_spine(node.right);
        Some(&node.record)
    }
}
