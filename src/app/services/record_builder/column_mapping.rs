//! Named-field view of a positional export row
//!
//! This is the single place where column offsets are applied; everything
//! downstream works with field names.

use crate::config::ColumnLayout;
use crate::{Error, Result};
use csv::StringRecord;

/// The raw text of every field the record builder consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentFields<'a> {
    pub part_number: &'a str,
    pub capacitance: &'a str,
    pub voltage: &'a str,
    pub size: &'a str,
    pub height: &'a str,
}

impl<'a> ComponentFields<'a> {
    /// Borrow the configured columns out of a row
    pub fn from_record(record: &'a StringRecord, layout: &ColumnLayout) -> Result<Self> {
        let field = |name: &str, index: usize| {
            record
                .get(index)
                .ok_or_else(|| Error::missing_column(name, index, record.len()))
        };

        Ok(Self {
            part_number: field("part_number", layout.part_number)?,
            capacitance: field("capacitance", layout.capacitance)?,
            voltage: field("voltage", layout.voltage)?,
            size: field("size", layout.size)?,
            height: field("height", layout.height)?,
        })
    }
}
