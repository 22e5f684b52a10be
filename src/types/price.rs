//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! Product prices are stored as `u64` scaled by 10^8 so that threshold
//! filters (`price <= tau`) are exact integer comparisons. Conversions go
//! through `rust_decimal`, never through `f64`.
//!
//! ## Examples
//!
//! ```
//! use product_catalog::types::price::{to_fixed, format_price};
//!
//! let price = to_fixed("9.99").unwrap();
//! assert_eq!(price, 999_000_000);
//! assert_eq!(format_price(price), "9.99");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::{CatalogError, Result};

/// Scaling factor for fixed-point prices: 10^8
pub const SCALE: u64 = 100_000_000;

/// Number of fractional digits shown to the output sink.
pub const DISPLAY_DIGITS: u32 = 2;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to a fixed-point price.
///
/// Returns `None` for malformed, negative, or out-of-range input.
///
/// ```
/// use product_catalog::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1.0"), Some(100_000_000));
/// assert_eq!(to_fixed("0.00000001"), Some(1));
/// assert_eq!(to_fixed("-5"), None);
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s.trim()).ok()?;
    decimal_to_fixed(decimal)
}

/// Like [`to_fixed`] but reports the offending text as an error.
pub fn parse_price(s: &str) -> Result<u64> {
    to_fixed(s).ok_or_else(|| CatalogError::InvalidPrice {
        value: s.to_string(),
    })
}

/// Convert a Decimal to a fixed-point price.
///
/// Values with more than 8 fractional digits are rounded to the nearest
/// representable step.
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_zero() {
        return Some(0);
    }
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    scaled.round_dp(0).to_u64()
}

/// Convert a fixed-point price to a Decimal.
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Render a price with exactly two fractional digits.
///
/// Rounds half away from zero, so `1.005` renders as `1.01`.
///
/// ```
/// use product_catalog::types::price::format_price;
///
/// assert_eq!(format_price(500_000_000), "5.00");
/// assert_eq!(format_price(100_500_000), "1.01");
/// ```
pub fn format_price(value: u64) -> String {
    let rounded = fixed_to_decimal(value)
        .round_dp_with_strategy(DISPLAY_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

// ============================================================================
// Unit Tests
// ============================================================================
