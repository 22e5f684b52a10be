//! Product record stored as satellite data in the index.

use std::fmt;

use crate::types::price::format_price;

/// A product record.
///
/// The identifier is the index key and never changes once the record has
/// been inserted. Price and description may be overwritten by a later
/// insert against the same identifier (overwrite policy).
///
/// ## Example
///
/// ```
/// use product_catalog::types::Record;
///
/// let record = Record::new(7, 999_000_000, "red shoe");
/// assert_eq!(record.id, 7);
/// assert_eq!(record.to_string(), "ID: 7, Price: 9.99, Desc: red shoe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// Unique product identifier
    pub id: i64,

    /// Price in fixed-point (scaled by 10^8)
    pub price: u64,

    /// Free-text description, may contain spaces
    pub description: String,
}

impl Record {
    /// Create a new record
    pub fn new(id: i64, price: u64, description: impl Into<String>) -> Self {
        Self {
            id,
            price,
            description: description.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Price: {}, Desc: {}",
            self.id,
            format_price(self.price),
            self.description
        )
    }
}
