//! Ranking of records by a figure of merit

use crate::app::models::{Metric, PhysicalRecord};

/// The `limit` records with the largest value of `metric`, largest first
///
/// Ties keep input order.
pub fn rank_by(records: &[PhysicalRecord], metric: Metric, limit: usize) -> Vec<&PhysicalRecord> {
    let mut ranked: Vec<&PhysicalRecord> = records.iter().collect();
    ranked.sort_by(|a, b| metric.select(b).total_cmp(&metric.select(a)));
    ranked.truncate(limit);
    ranked
}
