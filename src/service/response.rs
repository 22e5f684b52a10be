//! Result records handed to the output sink.

use std::fmt;

use crate::types::price::format_price;

/// Rendered when a lookup misses.
pub const NOT_FOUND_MESSAGE: &str = "Product ID not found.";

/// Rendered when a price-range query matches nothing.
pub const NO_PRICE_MATCH_MESSAGE: &str =
    "No products found in the given range with the specified price.";

/// Rendered when a pattern-range query matches nothing.
pub const NO_PATTERN_MATCH_MESSAGE: &str =
    "No products found in the given range with the specified pattern.";

/// Output of one query command.
///
/// `Display` produces the exact line written by the batch driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Lookup hit: fixed-point price
    Price(u64),
    /// Lookup miss
    NotFound,
    /// Non-empty ascending id list from a range query
    Ids(Vec<i64>),
    /// Price-range query with no matches
    NoPriceMatches,
    /// Pattern-range query with no matches
    NoPatternMatches,
}

impl Response {
    /// Response for a lookup result
    pub fn from_lookup(price: Option<u64>) -> Self {
        price.map_or(Response::NotFound, Response::Price)
    }

    /// Response for a price-range result
    pub fn from_price_range(ids: Vec<i64>) -> Self {
        if ids.is_empty() {
            Response::NoPriceMatches
        } else {
            Response::Ids(ids)
        }
    }

    /// Response for a pattern-range result
    pub fn from_pattern_range(ids: Vec<i64>) -> Self {
        if ids.is_empty() {
            Response::NoPatternMatches
        } else {
            Response::Ids(ids)
        }
    }

    /// True for the not-found and no-match variants
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            Response::NotFound | Response::NoPriceMatches | Response::NoPatternMatches
        )
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Price(price) => f.write_str(&format_price(*price)),
            Response::NotFound => f.write_str(NOT_FOUND_MESSAGE),
            Response::Ids(ids) => {
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{id}")?;
                }
                Ok(())
            }
            Response::NoPriceMatches => f.write_str(NO_PRICE_MATCH_MESSAGE),
            Response::NoPatternMatches => f.write_str(NO_PATTERN_MATCH_MESSAGE),
        }
    }
}
