//! # Product Catalog
//!
//! In-memory product catalog keyed by a unique signed identifier.
//!
//! ## Architecture
//!
//! The catalog consists of:
//! - **Types**: Core data structures (Record, Command, CatalogDigest)
//! - **Index**: AVL tree with slab-based node storage
//! - **Matcher**: Substring search (naive, KMP, Boyer–Moore)
//! - **Service**: Query façade and batch driver
//!
//! ## Design Principles
//!
//! 1. **Logarithmic height**: Every mutation restores AVL balance
//! 2. **No Floating Point**: Prices use fixed-point arithmetic (10^8 scaling)
//! 3. **Arena Storage**: Nodes live in a slab, links are stable keys
//! 4. **Algorithm-independent results**: All matchers share one contract
//!
//! ## Example
//!
//! ```
//! use product_catalog::{QueryService, Response};
//! use product_catalog::types::Command;
//!
//! let mut service = QueryService::new();
//! service.execute(Command::parse(r#"INSERT 1 9.99 "red shoe""#).unwrap()).unwrap();
//!
//! let response = service.execute(Command::parse("LOOKUP 1").unwrap()).unwrap();
//! assert_eq!(response, Some(Response::Price(999_000_000)));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error type shared by every layer
pub mod error;

/// Construction-time settings
pub mod config;

/// Core data types: Record, Command, CatalogDigest
pub mod types;

/// Ordered index: AVL tree over a slab arena
pub mod index;

/// Substring matching algorithms
pub mod matcher;

/// Query façade and batch driver
pub mod service;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use index::{AvlIndex, DuplicatePolicy, InsertOutcome};
pub use matcher::{MatchAlgorithm, PatternMatcher};
pub use service::{QueryService, Response};
pub use types::{CatalogDigest, Command, Record};
