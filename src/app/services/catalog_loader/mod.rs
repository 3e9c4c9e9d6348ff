//! Catalog loading for distributor CSV exports
//!
//! This module is the batch driver: it reads one or more export files, skips
//! each file's header row, runs every data row through the record builder and
//! tallies per-row outcomes. A malformed row is counted and discarded; it never
//! aborts the batch.
//!
//! ## Architecture
//!
//! - [`discovery`] - Expansion of file and directory inputs into export files
//! - [`loader`] - Row iteration and per-row outcome aggregation
//! - [`stats`] - Load statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use supercap_analyzer::ColumnLayout;
//! use supercap_analyzer::app::services::catalog_loader::CatalogLoader;
//!
//! let layout = ColumnLayout { part_number: 0, capacitance: 1, voltage: 2, size: 3, height: 4 };
//! let loader = CatalogLoader::new(layout);
//!
//! let csv = "part,cap,volt,size,height\n\
//!            SC-1,100 mF,2.7V,(10),(20)\n\
//!            SC-2,-,2.7V,(10),(20)\n";
//! let result = loader.load_reader(csv.as_bytes(), "inline").unwrap();
//!
//! assert_eq!(result.stats.records_parsed, 1);
//! assert_eq!(result.stats.rows_rejected, 1);
//! ```

pub mod discovery;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use discovery::discover_catalog_files;
pub use loader::{CatalogLoader, RowOutcome};
pub use stats::{LoadResult, LoadStats, Rejection};
