//! Aggregate statistics over physical records
//!
//! ## Architecture
//!
//! - [`summary`] - Minimum, maximum, mean and median of one selected quantity
//! - [`ranking`] - Top parts by a selected quantity
//! - [`report`] - All metric summaries plus load counts in one structure
//!
//! ## Median convention
//!
//! The median is the value at sorted index `count / 2`. For an even number of
//! records that is the upper of the two middle values, not their average:
//! `[1, 2, 3, 4]` has median `3`.

pub mod ranking;
pub mod report;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use ranking::rank_by;
pub use report::{AnalysisReport, MetricSummary};
pub use summary::{Summary, summarize, summarize_by};
