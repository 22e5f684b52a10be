//! Ordered index for the product catalog.
//!
//! ## Architecture
//!
//! The index is an AVL tree stored in a slab arena:
//!
//! - **Slab-based storage**: nodes addressed by stable `usize` keys
//! - **Height-balanced**: every node's balance factor stays in {-1, 0, 1}
//! - **Pruned range scans**: subtrees outside `[id1, id2]` are skipped
//!
//! ## Components
//!
//! - [`IndexNode`]: A record plus child links and cached height
//! - [`AvlIndex`]: The tree, with insert/remove/get/range operations
//! - [`Iter`]: Ascending in-order iterator
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(log n) |
//! | Remove | O(log n) |
//! | Get | O(log n) |
//! | Range search | O(k + log n) |
//!
//! ## Example
//!
//! ```
//! use product_catalog::index::AvlIndex;
//! use product_catalog::types::Record;
//!
//! let mut index = AvlIndex::with_capacity(10_000);
//! index.insert(Record::new(1, 999_000_000, "red shoe")).unwrap();
//!
//! assert_eq!(index.get(1).map(|r| r.price), Some(999_000_000));
//! ```

pub mod node;
pub mod iter;
pub mod tree;

pub use iter::Iter;
pub use node::IndexNode;
pub use tree::{max_avl_height, AvlIndex, DuplicatePolicy, InsertOutcome};
