//! Core catalog loader implementation
//!
//! This module handles file reading and coordinates the record builder over
//! every data row, converting each row into an explicit [`RowOutcome`].

use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::stats::{LoadResult, Rejection};
use crate::app::models::PhysicalRecord;
use crate::app::services::record_builder::RecordBuilder;
use crate::config::ColumnLayout;
use crate::{Error, Result};

/// Result of processing a single data row
#[derive(Debug)]
pub enum RowOutcome {
    /// The row produced a valid record
    Parsed(PhysicalRecord),

    /// The row was discarded; an `Io` error means the source itself failed
    Rejected(Error),
}

/// Batch loader for distributor catalog exports
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    builder: RecordBuilder,
}

impl CatalogLoader {
    /// Create a loader for the given column layout
    pub fn new(layout: ColumnLayout) -> Self {
        Self {
            builder: RecordBuilder::new(layout),
        }
    }

    /// Load every file in order and combine the results
    ///
    /// Unreadable files are fatal; malformed rows are not.
    pub fn load_files(&self, paths: &[PathBuf]) -> Result<LoadResult> {
        let mut result = LoadResult::new();

        for path in paths {
            result.merge(self.load_file(path)?);
        }

        info!("{}", result.stats.summary());
        Ok(result)
    }

    /// Load a single export file
    pub fn load_file(&self, path: &Path) -> Result<LoadResult> {
        info!("Loading catalog export: {}", path.display());

        let file = std::fs::File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

        let result = self.load_reader(file, &path.display().to_string())?;

        if result.stats.total_rows == 0 {
            warn!("No data rows found in {}", path.display());
        } else {
            info!(
                "Parsed {} records from {} rows in {}",
                result.stats.records_parsed,
                result.stats.total_rows,
                path.display()
            );
        }

        Ok(result)
    }

    /// Load rows from any reader; the first row is treated as a header
    ///
    /// Blank lines are skipped by the CSV reader and are not counted as rows.
    /// A failing read aborts the source with an `Io` error.
    pub fn load_reader<R: Read>(&self, reader: R, source: &str) -> Result<LoadResult> {
        let mut result = LoadResult::new();
        result.stats.sources_read = 1;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        for row in csv_reader.records() {
            let line = match &row {
                Ok(record) => record.position().map(|p| p.line()),
                Err(e) => e.position().map(|p| p.line()),
            };

            match self.classify_row(row, source) {
                RowOutcome::Parsed(record) => {
                    result.records.push(record);
                    result.stats.record_parsed();
                }
                RowOutcome::Rejected(error) if !error.is_row_error() => return Err(error),
                RowOutcome::Rejected(error) => {
                    debug!(
                        "Rejected row at {}:{}: {}",
                        source,
                        line.map_or_else(|| "?".to_string(), |l| l.to_string()),
                        error
                    );
                    result.stats.record_rejected(Rejection {
                        source: source.to_string(),
                        line,
                        kind: error.kind().to_string(),
                        message: error.to_string(),
                    });
                }
            }
        }

        Ok(result)
    }

    /// Turn one CSV read result into a row outcome
    pub fn classify_row(
        &self,
        row: std::result::Result<csv::StringRecord, csv::Error>,
        source: &str,
    ) -> RowOutcome {
        let record = match row {
            Ok(record) => record,
            Err(e) => return RowOutcome::Rejected(read_error(e, source)),
        };

        match self.builder.build(&record) {
            Ok(physical) => RowOutcome::Parsed(physical),
            Err(e) => RowOutcome::Rejected(e),
        }
    }
}

/// Map a CSV read failure onto the crate error, keeping I/O failures distinct
fn read_error(error: csv::Error, source: &str) -> Error {
    if !error.is_io_error() {
        return Error::csv_parsing(source, "Unreadable row", Some(error));
    }

    match error.into_kind() {
        csv::ErrorKind::Io(io_error) => Error::io(format!("Failed to read {}", source), io_error),
        other => Error::csv_parsing(source, format!("Unreadable row: {:?}", other), None),
    }
}
