//! Analysis report assembly
//!
//! Combines load counts, the summary of every metric and an optional ranking
//! into one serializable structure consumed by the CLI renderers.

use super::ranking::rank_by;
use super::summary::{Summary, summarize};
use crate::app::models::{Metric, PhysicalRecord};
use crate::app::services::catalog_loader::{LoadResult, Rejection};
use crate::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: Metric,
    pub unit: &'static str,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Complete result of analyzing a set of catalog exports
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Data rows read, headers excluded
    pub total_rows: usize,

    /// Rows turned into records
    pub records_parsed: usize,

    /// Rows discarded
    pub rows_rejected: usize,

    /// Rejected row count per error kind
    pub rejections_by_kind: BTreeMap<String, usize>,

    /// One summary per metric, in [`Metric::ALL`] order
    pub summaries: Vec<MetricSummary>,

    /// Metric used for `top_parts`
    pub ranked_by: Metric,

    /// Best parts by `ranked_by`, largest first
    pub top_parts: Vec<PhysicalRecord>,

    /// Details of rejected rows, when requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejections: Vec<Rejection>,
}

impl AnalysisReport {
    /// Build the report from loaded records
    ///
    /// Fails with `EmptyDataSet` when no row could be parsed.
    pub fn build(load: &LoadResult, ranked_by: Metric, top: usize) -> Result<Self> {
        let summaries = Metric::ALL
            .iter()
            .map(|&metric| {
                summarize(&load.records, metric).map(|summary| MetricSummary {
                    metric,
                    unit: metric.unit(),
                    summary,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let top_parts = rank_by(&load.records, ranked_by, top)
            .into_iter()
            .cloned()
            .collect();

        Ok(Self {
            total_rows: load.stats.total_rows,
            records_parsed: load.stats.records_parsed,
            rows_rejected: load.stats.rows_rejected,
            rejections_by_kind: load.stats.rejections_by_kind.clone(),
            summaries,
            ranked_by,
            top_parts,
            rejections: Vec::new(),
        })
    }

    /// Attach rejected-row details to the report
    pub fn with_rejections(mut self, rejections: Vec<Rejection>) -> Self {
        self.rejections = rejections;
        self
    }

    /// Summary of a single metric
    pub fn summary(&self, metric: Metric) -> Option<&Summary> {
        self.summaries
            .iter()
            .find(|s| s.metric == metric)
            .map(|s| &s.summary)
    }
}
