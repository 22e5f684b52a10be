//! Core data types for the product catalog
//!
//! ## Types
//!
//! - [`Record`]: A product record (id, price, description)
//! - [`Command`]: A typed operation request from the command layer
//! - [`CatalogDigest`]: Deterministic summary of the catalog contents
//!
//! ## Fixed-Point Prices
//!
//! All prices are stored as `u64` scaled by 10^8.
//! Example: 9.99 is stored as 999_000_000u64

mod record;
pub mod command;
pub mod digest;
pub mod price;

pub use command::{parse_record_line, Command};
pub use digest::{CatalogDigest, DigestEntry};
pub use record::Record;
