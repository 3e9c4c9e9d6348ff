//! Load statistics and result structures for catalog ingestion
//!
//! This module provides types for tracking how many rows were read, parsed
//! and rejected, and for keeping enough detail about rejections to explain
//! them afterwards.

use crate::app::models::PhysicalRecord;
use crate::constants::MAX_RETAINED_REJECTIONS;
use serde::Serialize;
use std::collections::BTreeMap;

/// Records loaded from one or more exports, with statistics
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    /// Successfully built records
    pub records: Vec<PhysicalRecord>,

    /// Load statistics
    pub stats: LoadStats,
}

impl LoadResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: LoadResult) {
        self.records.extend(other.records);
        self.stats.merge(other.stats);
    }
}

/// A row that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Export file (or other source name) the row came from
    pub source: String,

    /// One-based line number within the source, when known
    pub line: Option<u64>,

    /// Error kind, e.g. "MissingValue"
    pub kind: String,

    /// Full error message
    pub message: String,
}

/// Row statistics for catalog loading
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadStats {
    /// Number of sources read
    pub sources_read: usize,

    /// Data rows encountered, headers excluded
    pub total_rows: usize,

    /// Rows turned into records
    pub records_parsed: usize,

    /// Rows discarded because of an error
    pub rows_rejected: usize,

    /// Rejected row count per error kind
    pub rejections_by_kind: BTreeMap<String, usize>,

    /// Details of the first rejected rows
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejections: Vec<Rejection>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a successfully parsed row
    pub fn record_parsed(&mut self) {
        self.total_rows += 1;
        self.records_parsed += 1;
    }

    /// Count a rejected row and keep its details
    pub fn record_rejected(&mut self, rejection: Rejection) {
        self.total_rows += 1;
        self.rows_rejected += 1;
        *self
            .rejections_by_kind
            .entry(rejection.kind.clone())
            .or_insert(0) += 1;

        if self.rejections.len() < MAX_RETAINED_REJECTIONS {
            self.rejections.push(rejection);
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Merge another set of statistics into this one
    pub fn merge(&mut self, other: LoadStats) {
        self.sources_read += other.sources_read;
        self.total_rows += other.total_rows;
        self.records_parsed += other.records_parsed;
        self.rows_rejected += other.rows_rejected;

        for (kind, count) in other.rejections_by_kind {
            *self.rejections_by_kind.entry(kind).or_insert(0) += count;
        }

        let room = MAX_RETAINED_REJECTIONS.saturating_sub(self.rejections.len());
        self.rejections
            .extend(other.rejections.into_iter().take(room));
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Processed {} rows from {} source(s): {} parsed, {} rejected ({:.1}% success)",
            self.total_rows,
            self.sources_read,
            self.records_parsed,
            self.rows_rejected,
            self.success_rate()
        )
    }
}
