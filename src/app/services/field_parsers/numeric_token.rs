//! Numeric literal extraction for magnitude/unit fields
//!
//! Splits fields such as `"100 mF"`, `"2.5F"` or `"2.7V"` into the leading
//! numeric literal and whatever follows it.

use super::reject_sentinel;
use crate::constants::NUMERIC_CHARS;
use crate::{Error, Result};

/// A trimmed field split at the end of its leading numeric run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericToken<'a> {
    /// Leading run of digits and decimal points; empty when the field
    /// does not start with a number
    pub magnitude: &'a str,

    /// Remaining text, starting at the first non-numeric character
    pub suffix: &'a str,
}

impl<'a> NumericToken<'a> {
    /// Extract the numeric token from a raw field
    pub fn extract(raw: &'a str, field: &str) -> Result<Self> {
        reject_sentinel(raw, field)?;

        let trimmed = raw.trim();
        let split = trimmed
            .find(|c: char| !NUMERIC_CHARS.contains(c))
            .unwrap_or(trimmed.len());
        let (magnitude, suffix) = trimmed.split_at(split);

        Ok(Self { magnitude, suffix })
    }

    /// Convert the magnitude to a number
    ///
    /// An empty magnitude is a format error, never zero.
    pub fn value(&self, field: &str) -> Result<f64> {
        parse_number(self.magnitude, field)
    }
}

/// Convert an extracted numeric string into an `f64`
pub fn parse_number(token: &str, field: &str) -> Result<f64> {
    if token.is_empty() {
        return Err(Error::numeric_format(field, token));
    }

    token
        .parse::<f64>()
        .map_err(|_| Error::numeric_format(field, token))
}
