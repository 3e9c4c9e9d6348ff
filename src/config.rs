//! Configuration management and validation.
//!
//! The only configurable aspect of parsing is where each field lives in an
//! export row. [`ColumnLayout`] isolates that fixed-offset schema so the record
//! builder never depends on a specific spreadsheet layout.

use crate::constants::columns;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Zero-based column offsets of the fields consumed from each row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    /// Manufacturer part number column
    pub part_number: usize,

    /// Capacitance column
    pub capacitance: usize,

    /// Rated voltage column
    pub voltage: usize,

    /// Package size (diameter or length x width) column
    pub size: usize,

    /// Package height column
    pub height: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            part_number: columns::PART_NUMBER,
            capacitance: columns::CAPACITANCE,
            voltage: columns::VOLTAGE,
            size: columns::SIZE,
            height: columns::HEIGHT,
        }
    }
}

impl ColumnLayout {
    /// Load a layout from a JSON file; omitted keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read layout file {}", path.display()),
                e,
            )
        })?;

        let layout: ColumnLayout = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid layout file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded column layout from {}: {:?}", path.display(), layout);
        layout.validate()?;
        Ok(layout)
    }

    /// Named offsets in a fixed order
    pub fn fields(&self) -> [(&'static str, usize); 5] {
        [
            ("part_number", self.part_number),
            ("capacitance", self.capacitance),
            ("voltage", self.voltage),
            ("size", self.size),
            ("height", self.height),
        ]
    }

    /// Minimum number of fields a row must have for this layout
    pub fn min_fields(&self) -> usize {
        self.fields()
            .iter()
            .map(|(_, index)| index + 1)
            .max()
            .unwrap_or(0)
    }

    /// Ensure no two fields share a column
    pub fn validate(&self) -> Result<()> {
        let fields = self.fields();
        for (i, (name, index)) in fields.iter().enumerate() {
            if let Some((other, _)) = fields[i + 1..].iter().find(|(_, o)| o == index) {
                return Err(Error::configuration(format!(
                    "Columns '{}' and '{}' both map to offset {}",
                    name, other, index
                )));
            }
        }
        Ok(())
    }
}
