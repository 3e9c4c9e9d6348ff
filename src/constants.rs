//! Application constants for the supercapacitor analyzer
//!
//! This module contains the catalog conventions, default column offsets and
//! unit conversion factors used throughout the analyzer.

// =============================================================================
// Catalog Conventions
// =============================================================================

/// Placeholder the distributor export uses for "no data"
pub const MISSING_VALUE_SENTINEL: &str = "-";

/// Characters that make up a numeric literal in catalog fields
pub const NUMERIC_CHARS: &str = "0123456789.";

/// Separator between dimensions inside a parenthesized size notation
pub const DIMENSION_SEPARATOR: char = 'x';

/// File extension of catalog exports discovered inside directories
pub const CATALOG_FILE_EXTENSION: &str = "csv";

// =============================================================================
// Default Column Layout
// =============================================================================

/// Default zero-based column offsets of the distributor export
pub mod columns {
    /// Manufacturer part number
    pub const PART_NUMBER: usize = 2;

    /// Capacitance, e.g. "100 mF" or "2.5F"
    pub const CAPACITANCE: usize = 14;

    /// Rated voltage, e.g. "2.7V"
    pub const VOLTAGE: usize = 16;

    /// Package size containing "(D)" or "(LxW)" in millimeters
    pub const SIZE: usize = 23;

    /// Package height containing "(H)" in millimeters
    pub const HEIGHT: usize = 24;
}

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millifarads per farad
pub const MILLIFARADS_PER_FARAD: f64 = 1000.0;

/// Millimeters per meter
pub const MILLIMETERS_PER_METER: f64 = 1000.0;

// =============================================================================
// Logging and Reporting
// =============================================================================

/// Default log filter target
pub const LOG_TARGET: &str = "supercap_analyzer";

/// Default number of parts listed in the energy density ranking
pub const DEFAULT_TOP_PARTS: usize = 10;

/// Maximum number of rejection messages kept for diagnostics
pub const MAX_RETAINED_REJECTIONS: usize = 1000;
