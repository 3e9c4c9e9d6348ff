//! Report rendering for the CLI
//!
//! Human output goes through `colored` for headings; JSON output is the
//! serialized report.

use crate::app::models::{Metric, PhysicalRecord};
use crate::app::services::statistics::AnalysisReport;
use crate::{Error, Result};
use colored::*;
use std::fmt::Write as _;

/// Render the analysis report as human-readable text
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}",
        format!("Processed {} capacitors", report.total_rows).bold()
    );
    let _ = writeln!(out, "{} were unparseable", report.rows_rejected);

    if !report.rejections_by_kind.is_empty() {
        for (kind, count) in &report.rejections_by_kind {
            let _ = writeln!(out, "    {:<22} {}", kind, count);
        }
    }

    for summary in &report.summaries {
        let metric = summary.metric;
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", format!("{}:", metric.label()).cyan().bold());
        let _ = writeln!(out, "\tMinimum: {}", metric.format_value(summary.summary.minimum));
        let _ = writeln!(out, "\tMaximum: {}", metric.format_value(summary.summary.maximum));
        let _ = writeln!(out, "\tMean:    {}", metric.format_value(summary.summary.mean));
        let _ = writeln!(out, "\tMedian:  {}", metric.format_value(summary.summary.median));
    }

    if !report.top_parts.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            format!("Top {} by {}:", report.top_parts.len(), report.ranked_by.label())
                .cyan()
                .bold()
        );
        for (rank, record) in report.top_parts.iter().enumerate() {
            let _ = writeln!(
                out,
                "\t{:>3}. {:<30} {}",
                rank + 1,
                record.part_number(),
                report.ranked_by.format_value(report.ranked_by.select(record))
            );
        }
    }

    if !report.rejections.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "Rejected rows:".yellow().bold());
        for rejection in &report.rejections {
            let location = match rejection.line {
                Some(line) => format!("{}:{}", rejection.source, line),
                None => rejection.source.clone(),
            };
            let _ = writeln!(out, "\t{} {}", location.dimmed(), rejection.message);
        }
    }

    out
}

/// Render parsed records as human-readable text blocks
pub fn render_records(records: &[PhysicalRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{}", record);
        let _ = writeln!(out);
    }
    out
}

/// Serialize any report structure as pretty JSON
pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization("Failed to serialize output", e))
}

/// Metric summary line used in log messages
pub fn metric_line(report: &AnalysisReport, metric: Metric) -> Option<String> {
    report.summary(metric).map(|s| {
        format!(
            "{}: median {} over {} records",
            metric.label(),
            metric.format_value(s.median),
            s.count
        )
    })
}
