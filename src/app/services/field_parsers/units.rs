//! Capacitance unit normalization

use crate::constants::MILLIFARADS_PER_FARAD;
use crate::{Error, Result};

/// Capacitance units recognized in catalog suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacitanceUnit {
    /// Suffix starting with `m`, e.g. "mF"
    Millifarad,
    /// Suffix starting with `F`
    Farad,
}

impl CapacitanceUnit {
    /// Identify the unit from the text following the magnitude
    ///
    /// Leading whitespace is skipped so that both `"100mF"` and `"100 mF"`
    /// resolve. The prefix match is case-sensitive.
    pub fn from_suffix(suffix: &str) -> Result<Self> {
        match suffix.trim_start().chars().next() {
            Some('m') => Ok(CapacitanceUnit::Millifarad),
            Some('F') => Ok(CapacitanceUnit::Farad),
            _ => Err(Error::unrecognized_unit(suffix.trim())),
        }
    }

    /// Convert a magnitude in this unit to farads
    pub fn to_farads(&self, magnitude: f64) -> f64 {
        match self {
            CapacitanceUnit::Millifarad => magnitude / MILLIFARADS_PER_FARAD,
            CapacitanceUnit::Farad => magnitude,
        }
    }
}
