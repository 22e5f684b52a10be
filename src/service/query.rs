//! Query service: the façade the command layer calls.
//!
//! ## Design
//!
//! The service exclusively owns the [`AvlIndex`] and a [`PatternMatcher`].
//! Every operation runs to completion synchronously; a concurrent host
//! must wrap the whole service in a single exclusive lock.
//!
//! ## Example
//!
//! ```
//! use product_catalog::service::QueryService;
//! use product_catalog::types::price::to_fixed;
//!
//! let mut service = QueryService::new();
//! service.insert(1, to_fixed("9.99").unwrap(), "red shoe").unwrap();
//! service.insert(2, to_fixed("5.00").unwrap(), "blue hat").unwrap();
//! service.insert(3, to_fixed("9.99").unwrap(), "red hat").unwrap();
//!
//! assert_eq!(service.range_by_price(1, 3, to_fixed("5.00").unwrap()), vec![2]);
//! assert_eq!(service.range_by_pattern(1, 3, "red"), vec![1, 3]);
//! ```

use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::index::{AvlIndex, InsertOutcome};
use crate::matcher::{MatchAlgorithm, PatternMatcher};
use crate::service::Response;
use crate::types::{CatalogDigest, Command, Record};

/// Catalog façade composing the ordered index and the pattern matcher.
#[derive(Debug, Default)]
pub struct QueryService {
    index: AvlIndex,
    matcher: PatternMatcher,
}

impl QueryService {
    /// Create a service with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service from a validated configuration
    pub fn with_config(config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            index: AvlIndex::with_capacity(config.capacity).with_policy(config.duplicate_policy),
            matcher: PatternMatcher::new(config.algorithm),
        })
    }

    /// Create a service using `algorithm` for pattern queries
    pub fn with_algorithm(algorithm: MatchAlgorithm) -> Self {
        Self {
            index: AvlIndex::new(),
            matcher: PatternMatcher::new(algorithm),
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Price of a product, or `None` if absent
    pub fn lookup(&self, id: i64) -> Option<u64> {
        self.index.get(id).map(|record| record.price)
    }

    /// Insert or overwrite a product (per the index's duplicate policy)
    pub fn insert(
        &mut self,
        id: i64,
        price: u64,
        description: impl Into<String>,
    ) -> Result<InsertOutcome> {
        self.index.insert(Record::new(id, price, description))
    }

    /// Remove a product; absent ids are a no-op
    pub fn delete(&mut self, id: i64) -> Option<Record> {
        self.index.remove(id)
    }

    /// Ascending ids in `[id1, id2]` with price <= `tau`
    pub fn range_by_price(&self, id1: i64, id2: i64, tau: u64) -> Vec<i64> {
        let mut ids = Vec::new();
        self.index.for_each_in_range(id1, id2, |record| {
            if record.price <= tau {
                ids.push(record.id);
            }
        });

        debug!(id1, id2, tau, matches = ids.len(), "price range query");
        ids
    }

    /// Ascending ids in `[id1, id2]` whose description contains `pattern`
    pub fn range_by_pattern(&self, id1: i64, id2: i64, pattern: &str) -> Vec<i64> {
        let compiled = self.matcher.compile(pattern);
        let mut ids = Vec::new();
        self.index.for_each_in_range(id1, id2, |record| {
            if compiled.is_match(&record.description) {
                ids.push(record.id);
            }
        });

        debug!(
            id1,
            id2,
            pattern,
            algorithm = %self.matcher.algorithm(),
            matches = ids.len(),
            "pattern range query"
        );
        ids
    }

    /// Apply one typed command; only queries produce a response.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError::DuplicateKey`](crate::error::CatalogError::DuplicateKey)
    /// from inserts under the reject policy.
    pub fn execute(&mut self, command: Command) -> Result<Option<Response>> {
        let response = match command {
            Command::Lookup { id } => Some(Response::from_lookup(self.lookup(id))),
            Command::Insert {
                id,
                price,
                description,
            } => {
                self.insert(id, price, description)?;
                None
            }
            Command::Delete { id } => {
                self.delete(id);
                None
            }
            Command::RangeByPrice { id1, id2, tau } => {
                Some(Response::from_price_range(self.range_by_price(id1, id2, tau)))
            }
            Command::RangeByPattern { id1, id2, pattern } => Some(Response::from_pattern_range(
                self.range_by_pattern(id1, id2, &pattern),
            )),
        };
        Ok(response)
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Number of products
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the catalog is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Read access to the underlying index
    #[inline]
    pub fn index(&self) -> &AvlIndex {
        &self.index
    }

    /// The pattern matcher in use
    #[inline]
    pub fn matcher(&self) -> PatternMatcher {
        self.matcher
    }

    /// Deterministic digest of the catalog contents
    pub fn digest(&self) -> Result<CatalogDigest> {
        CatalogDigest::from_records(self.index.iter())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
