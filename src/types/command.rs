//! Typed operation records and the line protocol that produces them.
//!
//! ## Line Format
//!
//! ```text
//! LOOKUP <id>
//! INSERT <id> <price> "<description>"
//! DELETE <id>
//! RANGE_PRICE <id1> <id2> <tau>
//! RANGE_PATTERN <id1> <id2> "<pattern>"
//! ```
//!
//! Initial records in a batch script omit the keyword:
//! `<id> <price> "<description>"`.
//!
//! Free text may contain spaces. Surrounding double quotes are stripped;
//! text without quotes is taken verbatim after the last numeric field.

use crate::error::{CatalogError, Result};
use crate::types::price::parse_price;
use crate::types::Record;

/// A single operation request, mapped 1:1 onto a query service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Point lookup of a product's price
    Lookup { id: i64 },

    /// Insert (or overwrite, by policy) a product
    Insert {
        id: i64,
        price: u64,
        description: String,
    },

    /// Remove a product; absent ids are a no-op
    Delete { id: i64 },

    /// Ids in `[id1, id2]` with price <= tau
    RangeByPrice { id1: i64, id2: i64, tau: u64 },

    /// Ids in `[id1, id2]` whose description contains pattern
    RangeByPattern {
        id1: i64,
        id2: i64,
        pattern: String,
    },
}

impl Command {
    /// Parse one command line.
    ///
    /// # Example
    ///
    /// ```
    /// use product_catalog::types::Command;
    ///
    /// let cmd = Command::parse(r#"INSERT 4 12.50 "green scarf""#).unwrap();
    /// assert_eq!(
    ///     cmd,
    ///     Command::Insert { id: 4, price: 1_250_000_000, description: "green scarf".into() }
    /// );
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let (keyword, rest) = split_field(trimmed);

        match keyword {
            "LOOKUP" => {
                let id = parse_id(line, rest.trim())?;
                Ok(Command::Lookup { id })
            }
            "DELETE" => {
                let id = parse_id(line, rest.trim())?;
                Ok(Command::Delete { id })
            }
            "INSERT" => {
                let record = parse_record_fields(line, rest)?;
                Ok(Command::Insert {
                    id: record.id,
                    price: record.price,
                    description: record.description,
                })
            }
            "RANGE_PRICE" => {
                let (id1, rest) = split_field(rest);
                let (id2, rest) = split_field(rest);
                let tau = rest.trim();
                if tau.is_empty() {
                    return Err(CatalogError::parse(line, "missing price threshold"));
                }
                Ok(Command::RangeByPrice {
                    id1: parse_id(line, id1)?,
                    id2: parse_id(line, id2)?,
                    tau: parse_price(tau)?,
                })
            }
            "RANGE_PATTERN" => {
                let (id1, rest) = split_field(rest);
                let (id2, rest) = split_field(rest);
                Ok(Command::RangeByPattern {
                    id1: parse_id(line, id1)?,
                    id2: parse_id(line, id2)?,
                    pattern: unquote(rest).to_string(),
                })
            }
            "" => Err(CatalogError::parse(line, "empty command")),
            other => Err(CatalogError::parse(line, format!("unknown command {other}"))),
        }
    }

    /// True for commands that produce a response record
    pub fn is_query(&self) -> bool {
        !matches!(self, Command::Insert { .. } | Command::Delete { .. })
    }
}

/// Parse an initial record line: `<id> <price> "<description>"`.
pub fn parse_record_line(line: &str) -> Result<Record> {
    parse_record_fields(line, line.trim())
}

fn parse_record_fields(line: &str, fields: &str) -> Result<Record> {
    let (id, rest) = split_field(fields);
    let (price, rest) = split_field(rest);
    if price.is_empty() {
        return Err(CatalogError::parse(line, "missing price"));
    }

    Ok(Record::new(
        parse_id(line, id)?,
        parse_price(price)?,
        unquote(rest),
    ))
}

/// Split off the first whitespace-delimited field, returning the remainder
/// with leading whitespace removed.
fn split_field(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

fn parse_id(line: &str, field: &str) -> Result<i64> {
    if field.is_empty() {
        return Err(CatalogError::parse(line, "missing product id"));
    }
    field
        .parse::<i64>()
        .map_err(|e| CatalogError::parse(line, format!("bad product id {field:?}: {e}")))
}

/// Strip surrounding whitespace and double quotes from free text.
fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"')
}
