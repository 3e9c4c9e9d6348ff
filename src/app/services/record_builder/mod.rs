//! Component record construction from catalog rows
//!
//! This module turns one raw export row into one [`PhysicalRecord`], or fails
//! without exposing a partially built record.
//!
//! ## Architecture
//!
//! - [`column_mapping`] - Explicit mapping of a raw row onto named fields
//! - [`builder`] - Quantity extraction, geometry selection and derivation
//!
//! ## Usage
//!
//! ```rust
//! use csv::StringRecord;
//! use supercap_analyzer::ColumnLayout;
//! use supercap_analyzer::app::services::record_builder::RecordBuilder;
//!
//! # fn example() -> supercap_analyzer::Result<()> {
//! let layout = ColumnLayout {
//!     part_number: 0,
//!     capacitance: 1,
//!     voltage: 2,
//!     size: 3,
//!     height: 4,
//! };
//! let builder = RecordBuilder::new(layout);
//!
//! let row = StringRecord::from(vec!["SC-1", "100 mF", "2.7V", "(10)", "(20)"]);
//! let record = builder.build(&row)?;
//! assert_eq!(record.part_number(), "SC-1");
//! assert!((record.capacitance() - 0.1).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```
//!
//! [`PhysicalRecord`]: crate::app::models::PhysicalRecord

pub mod builder;
pub mod column_mapping;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{RecordBuilder, parse_capacitance, parse_geometry, parse_voltage};
pub use column_mapping::ComponentFields;
