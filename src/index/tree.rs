//! AVL index over product records.
//!
//! ## Architecture
//!
//! - **Slab**: arena storage for [`IndexNode`]s, addressed by stable keys
//! - **Root key**: `Option<usize>`, `None` for an empty index
//! - **Links**: each node holds `left`/`right` slab keys and a cached height
//!
//! Rotations rewrite link fields only. Records never move between slots,
//! except for the successor splice on two-child deletion, which swaps the
//! successor's record into the deleted node's slot.
//!
//! ## Rebalancing
//!
//! Insertion rebalances at the first unbalanced ancestor, choosing the
//! rotation by comparing the inserted key with the heavy child's key.
//! Deletion checks every ancestor on the path back to the root and picks
//! the rotation from the heavy child's balance factor, preferring a single
//! rotation when that child is balanced.
//!
//! ## Example
//!
//! ```
//! use product_catalog::index::AvlIndex;
//! use product_catalog::types::Record;
//!
//! let mut index = AvlIndex::with_capacity(16);
//! for id in 1..=7 {
//!     index.insert(Record::new(id, 100, "item")).unwrap();
//! }
//!
//! assert_eq!(index.height(), 3);
//! let ids: Vec<i64> = index.range_search(2, 4).iter().map(|r| r.id).collect();
//! assert_eq!(ids, vec![2, 3, 4]);
//! ```

use std::cmp::Ordering;

use slab::Slab;
use tracing::{debug, trace, warn};

use crate::error::{CatalogError, Result};
use crate::index::{IndexNode, Iter};
use crate::types::Record;

/// What to do when an insert targets an identifier that is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Replace price and description in place
    #[default]
    Overwrite,
    /// Fail with [`CatalogError::DuplicateKey`], leaving the index unchanged
    Reject,
}

/// Result of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new node was attached
    Inserted,
    /// An existing record was overwritten; holds the previous record
    Replaced(Record),
}

/// Height-balanced binary search tree keyed by product id.
#[derive(Debug, Clone)]
pub struct AvlIndex {
    /// Node arena
    nodes: Slab<IndexNode>,

    /// Root slab key
    root: Option<usize>,

    /// Equal-key insert handling
    policy: DuplicatePolicy,
}

impl Default for AvlIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl AvlIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
            policy: DuplicatePolicy::default(),
        }
    }

    /// Create an index with `capacity` pre-allocated node slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
            policy: DuplicatePolicy::default(),
        }
    }

    /// Set the duplicate-key policy
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Active duplicate-key policy
    #[inline]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Number of records in the index
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the index is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Pre-allocated node slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Height of the tree (0 when empty)
    #[inline]
    pub fn height(&self) -> u32 {
        self.height_of(self.root)
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    // ========================================================================
    // Point Operations
    // ========================================================================

    /// Look up a record by id
    pub fn get(&self, id: i64) -> Option<&Record> {
        let mut link = self.root;
        while let Some(key) = link {
            let node = &self.nodes[key];
            link = match id.cmp(&node.id()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(&node.record),
            };
        }
        None
    }

    /// Check if a record with this id exists
    #[inline]
    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Record with the smallest id
    pub fn min(&self) -> Option<&Record> {
        self.root.map(|key| &self.nodes[self.leftmost(key)].record)
    }

    /// Record with the largest id
    pub fn max(&self) -> Option<&Record> {
        let mut key = self.root?;
        while let Some(right) = self.nodes[key].right {
            key = right;
        }
        Some(&self.nodes[key].record)
    }

    /// Insert a record.
    ///
    /// An equal id is handled by the [`DuplicatePolicy`]; it never creates a
    /// second node.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateKey`] under [`DuplicatePolicy::Reject`].
    pub fn insert(&mut self, record: Record) -> Result<InsertOutcome> {
        let id = record.id;
        let (root, outcome) = self.insert_at(self.root, record)?;
        self.root = Some(root);

        match outcome {
            InsertOutcome::Inserted => {
                debug!(id, len = self.len(), height = self.height(), "inserted product");
            }
            InsertOutcome::Replaced(_) => debug!(id, "overwrote product in place"),
        }
        Ok(outcome)
    }

    /// Remove a record by id.
    ///
    /// Returns the removed record, or `None` (index unchanged) if absent.
    pub fn remove(&mut self, id: i64) -> Option<Record> {
        let (root, removed) = self.remove_at(self.root, id);
        self.root = root;

        if removed.is_some() {
            debug!(id, len = self.len(), height = self.height(), "removed product");
        }
        removed
    }

    // ========================================================================
    // Range Operations
    // ========================================================================

    /// Records with id in `[id1, id2]`, ascending.
    ///
    /// Subtrees entirely outside the range are never visited. Empty when
    /// `id1 > id2`.
    pub fn range_search(&self, id1: i64, id2: i64) -> Vec<&Record> {
        let mut records = Vec::new();
        self.for_each_in_range(id1, id2, |record| records.push(record));
        records
    }

    /// Visit records with id in `[id1, id2]` in ascending order
    pub fn for_each_in_range<'a, F>(&'a self, id1: i64, id2: i64, mut f: F)
    where
        F: FnMut(&'a Record),
    {
        self.visit_range(self.root, id1, id2, &mut f);
    }

    fn visit_range<'a, F>(&'a self, link: Option<usize>, id1: i64, id2: i64, f: &mut F)
    where
        F: FnMut(&'a Record),
    {
        let Some(key) = link else {
            return;
        };
        let node = &self.nodes[key];
        let id = node.id();

        if id < id1 {
            self.visit_range(node.right, id1, id2, f);
        } else if id > id2 {
            self.visit_range(node.left, id1, id2, f);
        } else {
            self.visit_range(node.left, id1, id2, f);
            f(&node.record);
            self.visit_range(node.right, id1, id2, f);
        }
    }

    /// In-order iterator over all records
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.nodes, self.root)
    }

    // ========================================================================
    // Invariant Checking
    // ========================================================================

    /// Check BST order, cached heights, balance factors, and node count.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvariantViolation`] describing the first defect found.
    pub fn validate(&self) -> Result<()> {
        let mut reachable = 0usize;
        self.validate_at(self.root, None, None, &mut reachable)?;

        if reachable != self.nodes.len() {
            return Err(CatalogError::invariant(format!(
                "{reachable} nodes reachable from root but {} stored",
                self.nodes.len()
            )));
        }
        Ok(())
    }

    fn validate_at(
        &self,
        link: Option<usize>,
        lower: Option<i64>,
        upper: Option<i64>,
        reachable: &mut usize,
    ) -> Result<u32> {
        let Some(key) = link else {
            return Ok(0);
        };
        let node = self
            .nodes
            .get(key)
            .ok_or_else(|| CatalogError::invariant(format!("dangling link to slot {key}")))?;

        *reachable += 1;
        if *reachable > self.nodes.len() {
            return Err(CatalogError::invariant("cycle in child links"));
        }

        let id = node.id();
        if lower.is_some_and(|lo| id <= lo) || upper.is_some_and(|hi| id >= hi) {
            return Err(CatalogError::invariant(format!(
                "id {id} outside its subtree bounds ({lower:?}, {upper:?})"
            )));
        }

        let left = self.validate_at(node.left, lower, Some(id), reachable)?;
        let right = self.validate_at(node.right, Some(id), upper, reachable)?;

        let expected = 1 + left.max(right);
        if node.height != expected {
            return Err(CatalogError::invariant(format!(
                "id {id} caches height {} but subtree height is {expected}",
                node.height
            )));
        }

        let balance = i64::from(left) - i64::from(right);
        if balance.abs() > 1 {
            return Err(CatalogError::invariant(format!(
                "id {id} has balance factor {balance}"
            )));
        }

        Ok(expected)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    fn insert_at(&mut self, link: Option<usize>, record: Record) -> Result<(usize, InsertOutcome)> {
        let Some(key) = link else {
            let key = self.nodes.insert(IndexNode::new(record));
            return Ok((key, InsertOutcome::Inserted));
        };

        let id = record.id;
        let outcome = match id.cmp(&self.nodes[key].id()) {
            Ordering::Less => {
                let (child, outcome) = self.insert_at(self.nodes[key].left, record)?;
                self.nodes[key].left = Some(child);
                outcome
            }
            Ordering::Greater => {
                let (child, outcome) = self.insert_at(self.nodes[key].right, record)?;
                self.nodes[key].right = Some(child);
                outcome
            }
            Ordering::Equal => {
                let outcome = self.insert_duplicate(key, record)?;
                return Ok((key, outcome));
            }
        };

        // Shape is unchanged below an overwrite.
        if let InsertOutcome::Replaced(_) = outcome {
            return Ok((key, outcome));
        }

        self.update_height(key);
        Ok((self.rebalance_after_insert(key, id), outcome))
    }

    fn insert_duplicate(&mut self, key: usize, record: Record) -> Result<InsertOutcome> {
        match self.policy {
            DuplicatePolicy::Reject => {
                warn!(id = record.id, "rejected duplicate product id");
                Err(CatalogError::DuplicateKey { id: record.id })
            }
            DuplicatePolicy::Overwrite => {
                let previous = std::mem::replace(&mut self.nodes[key].record, record);
                Ok(InsertOutcome::Replaced(previous))
            }
        }
    }

    /// Restore balance at `key` after inserting `id` below it.
    fn rebalance_after_insert(&mut self, key: usize, id: i64) -> usize {
        let balance = self.balance_factor(key);

        let subtree = if balance > 1 {
            let left = self.nodes[key].left;
            match left {
                Some(left) if id < self.nodes[left].id() => self.rotate_right(key),
                Some(_) => self.rotate_left_right(key),
                None => key,
            }
        } else if balance < -1 {
            let right = self.nodes[key].right;
            match right {
                Some(right) if id > self.nodes[right].id() => self.rotate_left(key),
                Some(_) => self.rotate_right_left(key),
                None => key,
            }
        } else {
            return key;
        };

        debug_assert!(
            self.balance_factor(subtree).abs() <= 1,
            "insert rebalance left subtree at id {} unbalanced",
            self.nodes[subtree].id()
        );
        subtree
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    fn remove_at(&mut self, link: Option<usize>, id: i64) -> (Option<usize>, Option<Record>) {
        let Some(key) = link else {
            return (None, None);
        };

        let removed = match id.cmp(&self.nodes[key].id()) {
            Ordering::Less => {
                let (child, removed) = self.remove_at(self.nodes[key].left, id);
                self.nodes[key].left = child;
                removed
            }
            Ordering::Greater => {
                let (child, removed) = self.remove_at(self.nodes[key].right, id);
                self.nodes[key].right = child;
                removed
            }
            Ordering::Equal => match (self.nodes[key].left, self.nodes[key].right) {
                (Some(_), Some(right)) => {
                    // Splice the in-order successor's record into this slot.
                    let successor_id = self.nodes[self.leftmost(right)].id();
                    let (child, successor) = self.remove_at(Some(right), successor_id);
                    self.nodes[key].right = child;
                    successor.map(|record| std::mem::replace(&mut self.nodes[key].record, record))
                }
                (left, right) => {
                    let node = self.nodes.remove(key);
                    return (left.or(right), Some(node.record));
                }
            },
        };

        if removed.is_none() {
            return (Some(key), None);
        }

        self.update_height(key);
        (Some(self.rebalance_after_remove(key)), removed)
    }

    /// Restore balance at `key` after a removal below it.
    fn rebalance_after_remove(&mut self, key: usize) -> usize {
        let balance = self.balance_factor(key);

        let subtree = if balance > 1 {
            if self.balance_of(self.nodes[key].left) >= 0 {
                self.rotate_right(key)
            } else {
                self.rotate_left_right(key)
            }
        } else if balance < -1 {
            if self.balance_of(self.nodes[key].right) <= 0 {
                self.rotate_left(key)
            } else {
                self.rotate_right_left(key)
            }
        } else {
            return key;
        };

        debug_assert!(
            self.balance_factor(subtree).abs() <= 1,
            "remove rebalance left subtree at id {} unbalanced",
            self.nodes[subtree].id()
        );
        subtree
    }

    // ========================================================================
    // Rotations and Heights
    // ========================================================================

    /// Rotate `z` right; its left child becomes the subtree root.
    fn rotate_right(&mut self, z: usize) -> usize {
        let Some(y) = self.nodes[z].left else {
            return z;
        };
        let inner = self.nodes[y].right;

        self.nodes[y].right = Some(z);
        self.nodes[z].left = inner;

        self.update_height(z);
        self.update_height(y);

        trace!(pivot = self.nodes[y].id(), demoted = self.nodes[z].id(), "rotated right");
        y
    }

    /// Rotate `z` left; its right child becomes the subtree root.
    fn rotate_left(&mut self, z: usize) -> usize {
        let Some(y) = self.nodes[z].right else {
            return z;
        };
        let inner = self.nodes[y].left;

        self.nodes[y].left = Some(z);
        self.nodes[z].right = inner;

        self.update_height(z);
        self.update_height(y);

        trace!(pivot = self.nodes[y].id(), demoted = self.nodes[z].id(), "rotated left");
        y
    }

    /// Left rotation on the left child, then right rotation on `key`.
    fn rotate_left_right(&mut self, key: usize) -> usize {
        if let Some(left) = self.nodes[key].left {
            let pivot = self.rotate_left(left);
            self.nodes[key].left = Some(pivot);
        }
        self.rotate_right(key)
    }

    /// Right rotation on the right child, then left rotation on `key`.
    fn rotate_right_left(&mut self, key: usize) -> usize {
        if let Some(right) = self.nodes[key].right {
            let pivot = self.rotate_right(right);
            self.nodes[key].right = Some(pivot);
        }
        self.rotate_left(key)
    }

    #[inline]
    fn height_of(&self, link: Option<usize>) -> u32 {
        link.map_or(0, |key| self.nodes[key].height)
    }

    #[inline]
    fn update_height(&mut self, key: usize) {
        let (left, right) = (self.nodes[key].left, self.nodes[key].right);
        self.nodes[key].height = 1 + self.height_of(left).max(self.height_of(right));
    }

    #[inline]
    fn balance_factor(&self, key: usize) -> i64 {
        let node = &self.nodes[key];
        i64::from(self.height_of(node.left)) - i64::from(self.height_of(node.right))
    }

    #[inline]
    fn balance_of(&self, link: Option<usize>) -> i64 {
        link.map_or(0, |key| self.balance_factor(key))
    }

    fn leftmost(&self, mut key: usize) -> usize {
        while let Some(left) = self.nodes[key].left {
            key = left;
        }
        key
    }
}

/// Upper bound on the height of an AVL tree holding `len` records:
/// `⌈1.44 · log2(len + 2)⌉`.
pub fn max_avl_height(len: usize) -> u32 {
    (1.44 * ((len + 2) as f64).log2()).ceil() as u32
}

// ============================================================================
// Unit Tests
// ============================================================================
