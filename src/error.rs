//! Error types for the product catalog.
//!
//! ## Taxonomy
//!
//! - **Not found** is never an error: lookups and deletes against an absent
//!   identifier return `None` and the query layer renders a sentinel response.
//! - [`CatalogError::DuplicateKey`] is returned only when the index runs with
//!   [`DuplicatePolicy::Reject`](crate::index::DuplicatePolicy::Reject).
//! - [`CatalogError::InvariantViolation`] is a programming defect, reported
//!   by [`AvlIndex::validate`](crate::index::AvlIndex::validate).
//! - The remaining variants belong to the command boundary (parsing, I/O).

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors surfaced by the catalog and its command boundary.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Insert against an identifier that is already present (reject policy).
    #[error("duplicate product id {id}")]
    DuplicateKey { id: i64 },

    /// AVL or BST-order invariant broken after a mutation.
    #[error("index invariant violated: {detail}")]
    InvariantViolation { detail: String },

    /// A command or record line could not be parsed.
    #[error("malformed line {line:?}: {reason}")]
    Parse { line: String, reason: String },

    /// A price that is negative, malformed, or out of fixed-point range.
    #[error("invalid price {value:?}")]
    InvalidPrice { value: String },

    /// The batch input ended before the announced number of lines.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    /// SSZ encoding failure while computing a digest.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Configuration rejected by `CatalogConfig::validate`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O failure while reading a batch script.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Shorthand for a parse failure on `line`.
    pub(crate) fn parse(line: &str, reason: impl Into<String>) -> Self {
        CatalogError::Parse {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    /// True for failures confined to a single input line.
    ///
    /// The batch driver skips such lines and keeps going; every other
    /// variant ends the run.
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            CatalogError::DuplicateKey { .. }
                | CatalogError::Parse { .. }
                | CatalogError::InvalidPrice { .. }
        )
    }

    /// Shorthand for an invariant violation.
    pub(crate) fn invariant(detail: impl Into<String>) -> Self {
        CatalogError::InvariantViolation {
            detail: detail.into(),
        }
    }
}
