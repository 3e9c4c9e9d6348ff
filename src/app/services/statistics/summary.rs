//! Order statistics for a selected record quantity

use crate::app::models::{Metric, PhysicalRecord};
use crate::{Error, Result};
use serde::Serialize;

/// Descriptive statistics of one quantity across a record set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of records summarized
    pub count: usize,
    pub minimum: f64,
    pub maximum: f64,
    /// Sum of values divided by count
    pub mean: f64,
    /// Value at sorted index `count / 2`
    pub median: f64,
}

/// Summarize one of the standard metrics
pub fn summarize(records: &[PhysicalRecord], metric: Metric) -> Result<Summary> {
    summarize_by(records, metric.label(), |record| metric.select(record))
}

/// Summarize an arbitrary scalar selected from each record
///
/// `name` identifies the quantity in the `EmptyDataSet` error.
pub fn summarize_by<F>(records: &[PhysicalRecord], name: &str, selector: F) -> Result<Summary>
where
    F: Fn(&PhysicalRecord) -> f64,
{
    if records.is_empty() {
        return Err(Error::empty_data_set(name));
    }

    let mut values: Vec<f64> = records.iter().map(selector).collect();
    values.sort_by(f64::total_cmp);

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    Ok(Summary {
        count,
        minimum: values[0],
        maximum: values[count - 1],
        mean,
        median: values[count / 2],
    })
}
