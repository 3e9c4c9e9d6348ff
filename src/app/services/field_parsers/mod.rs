//! Free-text field parsers for distributor catalog exports
//!
//! Catalog fields mix magnitudes, unit letters and package notations with no
//! fixed delimiter. This module splits them into pieces the record builder can
//! convert into SI quantities.
//!
//! ## Architecture
//!
//! - [`numeric_token`] - Leading numeric literal and trailing suffix extraction
//! - [`dimensions`] - Parenthesized `x`-separated millimeter dimensions
//! - [`units`] - Capacitance unit prefix recognition and farad conversion
//!
//! Every parser treats a field whose trimmed text is `"-"` as missing data and
//! fails with [`crate::Error::MissingValue`].
//!
//! ## Usage
//!
//! ```rust
//! use supercap_analyzer::app::services::field_parsers::{
//!     CapacitanceUnit, NumericToken, parse_dimensions,
//! };
//!
//! # fn example() -> supercap_analyzer::Result<()> {
//! let token = NumericToken::extract("100 mF", "capacitance")?;
//! assert_eq!(token.magnitude, "100");
//!
//! let unit = CapacitanceUnit::from_suffix(token.suffix)?;
//! assert_eq!(unit.to_farads(100.0), 0.1);
//!
//! assert_eq!(parse_dimensions("0.512\" L (13.00mm x 6.00mm)", "size")?, ["13.00", "6.00"]);
//! # Ok(())
//! # }
//! ```

pub mod dimensions;
pub mod numeric_token;
pub mod units;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use dimensions::{DimensionSet, parse_dimensions};
pub use numeric_token::{NumericToken, parse_number};
pub use units::CapacitanceUnit;

use crate::constants::MISSING_VALUE_SENTINEL;
use crate::{Error, Result};

/// Fail with `MissingValue` if the field holds the "no data" placeholder
pub fn reject_sentinel(raw: &str, field: &str) -> Result<()> {
    if raw.trim() == MISSING_VALUE_SENTINEL {
        Err(Error::missing_value(field))
    } else {
        Ok(())
    }
}
