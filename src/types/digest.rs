//! Catalog state root.
//!
//! A [`CatalogDigest`] summarizes the full contents of the catalog in 40
//! bytes: the record count plus a SHA-256 state root computed over the
//! records in ascending identifier order. Two sessions that applied the
//! same operations hold the same digest, whatever matcher or tree shape
//! they ended up with.
//!
//! ## Encoding
//!
//! Each record is reduced to a fixed-size SSZ container ([`DigestEntry`]):
//! the identifier's two's-complement bits, the fixed-point price, and the
//! SHA-256 of the description bytes. Entries are serialized and fed to a
//! running SHA-256 in order.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::error::CatalogError;
use crate::types::Record;

/// Per-record SSZ container hashed into the state root.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct DigestEntry {
    /// Identifier as raw two's-complement bits
    pub id_bits: u64,

    /// Price in fixed-point (scaled by 10^8)
    pub price: u64,

    /// SHA-256 of the UTF-8 description
    pub description_hash: [u8; 32],
}

impl DigestEntry {
    /// Build the entry for a record
    pub fn from_record(record: &Record) -> Self {
        Self {
            id_bits: record.id as u64,
            price: record.price,
            description_hash: compute_hash(record.description.as_bytes()),
        }
    }
}

/// Summary of the catalog contents.
///
/// ## Example
///
/// ```
/// use product_catalog::types::{CatalogDigest, Record};
///
/// let records = vec![Record::new(1, 100, "a"), Record::new(2, 200, "b")];
/// let digest = CatalogDigest::from_records(records.iter()).unwrap();
/// assert_eq!(digest.record_count, 2);
/// assert_eq!(digest.state_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct CatalogDigest {
    /// Number of records hashed
    pub record_count: u64,

    /// SHA-256 over the serialized entries (32 bytes)
    pub state_root: [u8; 32],
}

impl CatalogDigest {
    /// Compute the digest over records supplied in ascending id order.
    pub fn from_records<'a, I>(records: I) -> crate::error::Result<Self>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut hasher = Sha256::new();
        let mut record_count = 0u64;

        for record in records {
            let entry = DigestEntry::from_record(record);
            let bytes = ssz_rs::serialize(&entry)
                .map_err(|e| CatalogError::Encoding(format!("{e:?}")))?;
            hasher.update(&bytes);
            record_count += 1;
        }

        let mut state_root = [0u8; 32];
        state_root.copy_from_slice(&hasher.finalize());

        Ok(Self {
            record_count,
            state_root,
        })
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }
}

/// Compute SHA-256 of the given data.
pub fn compute_hash(data: &[u8]) -> [u8; 32] {
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&Sha256::digest(data));
    hash
}

// ============================================================================
// Unit Tests
// ============================================================================
