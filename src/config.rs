//! Construction-time settings for the catalog.
//!
//! ## Example
//!
//! ```
//! use product_catalog::{CatalogConfig, DuplicatePolicy, MatchAlgorithm, QueryService};
//!
//! let config = CatalogConfig::new()
//!     .capacity(10_000)
//!     .algorithm(MatchAlgorithm::Kmp)
//!     .duplicate_policy(DuplicatePolicy::Reject);
//!
//! let service = QueryService::with_config(config).unwrap();
//! assert!(service.is_empty());
//! ```

use crate::error::{CatalogError, Result};
use crate::index::DuplicatePolicy;
use crate::matcher::MatchAlgorithm;

/// Construction-time settings for a [`QueryService`](crate::service::QueryService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Node slots to pre-allocate in the index slab
    pub capacity: usize,
    /// Substring algorithm for pattern-range queries
    pub algorithm: MatchAlgorithm,
    /// Handling of inserts against an existing id
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            capacity: 1024,
            algorithm: MatchAlgorithm::default(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Default settings: 1024 slots, Boyer-Moore, overwrite on duplicates
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of node slots to pre-allocate
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the substring algorithm for pattern-range queries
    pub fn algorithm(mut self, algorithm: MatchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set how inserts against an existing id are handled
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Check the settings before building a service.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidConfig`] when `capacity` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CatalogError::InvalidConfig(
                "capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.algorithm, MatchAlgorithm::BoyerMoore);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Overwrite);
    }

    #[test]
    fn test_builder() {
        let config = CatalogConfig::new()
            .capacity(10)
            .algorithm(MatchAlgorithm::Kmp)
            .duplicate_policy(DuplicatePolicy::Reject);

        assert_eq!(config.capacity, 10);
        assert_eq!(config.algorithm, MatchAlgorithm::Kmp);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_invalid_capacity() {
        let config = CatalogConfig::new().capacity(0);
        assert!(matches!(config.validate(), Err(CatalogError::InvalidConfig(_))));
    }
}
