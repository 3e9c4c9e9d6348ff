//! Package dimension parsing for size and height fields
//!
//! Distributor exports describe packages as imperial text followed by a
//! metric group, e.g. `0.394" Dia (10.00mm)` or
//! `0.512" L x 0.236" W (13.00mm x 6.00mm)`. Only the first parenthesized
//! group is read.

use super::reject_sentinel;
use crate::constants::{DIMENSION_SEPARATOR, NUMERIC_CHARS};
use crate::Result;

/// Ordered numeric strings read from a dimension group (millimeters)
pub type DimensionSet = Vec<String>;

/// Read the `x`-separated numbers inside the first parenthesized group
///
/// Characters inside the group other than digits, `.` and `x` are dropped, so
/// `(13.00mm x 6.00mm)` yields `["13.00", "6.00"]`. Scanning stops at the first
/// `)`. A field without `(` yields `[""]`, which fails numeric conversion.
pub fn parse_dimensions(raw: &str, field: &str) -> Result<DimensionSet> {
    reject_sentinel(raw, field)?;

    let mut dimensions = vec![String::new()];

    let Some(open) = raw.find('(') else {
        return Ok(dimensions);
    };

    for c in raw[open + 1..].chars() {
        if c == ')' {
            break;
        }

        if c == DIMENSION_SEPARATOR {
            dimensions.push(String::new());
        } else if NUMERIC_CHARS.contains(c) {
            if let Some(current) = dimensions.last_mut() {
                current.push(c);
            }
        }
    }

    Ok(dimensions)
}
