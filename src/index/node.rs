//! Index node for slab-based storage.
//!
//! ## Design
//!
//! `IndexNode` wraps a [`Record`] with the two child links of a binary
//! search tree and the cached subtree height the AVL rebalancing needs.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//!
//! Child links are slab keys, not references, so a rotation only rewrites
//! `Option<usize>` fields and never moves a node.

use crate::types::Record;

/// Node stored in the index slab.
///
/// ## Memory Layout
///
/// ```text
/// IndexNode {
///     record: Record
///     left: Option<usize>   (slab key, keys < record.id)
///     right: Option<usize>  (slab key, keys > record.id)
///     height: u32           (1 for a leaf)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct IndexNode {
    /// The product record (key + satellite data)
    pub record: Record,

    /// Left child (slab key)
    pub left: Option<usize>,

    /// Right child (slab key)
    pub right: Option<usize>,

    /// Height of the subtree rooted here
    pub height: u32,
}

impl IndexNode {
    /// Create a new leaf node (height 1, no children)
    ///
    /// # Example
    ///
    /// ```
    /// use product_catalog::index::IndexNode;
    /// use product_catalog::types::Record;
    ///
    /// let node = IndexNode::new(Record::new(1, 100, "widget"));
    ///
    /// assert!(node.is_leaf());
    /// assert_eq!(node.height, 1);
    /// ```
    #[inline]
    pub fn new(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Get the product identifier (the index key)
    #[inline]
    pub fn id(&self) -> i64 {
        self.record.id
    }

    /// Check if this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
