//! Analyze command: summary statistics over every parsed record

use crate::Result;
use crate::app::models::Metric;
use crate::app::services::statistics::AnalysisReport;
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::cli::commands::shared::load_catalog;
use crate::cli::output::{metric_line, render_json, render_report};
use tracing::info;

/// Load the inputs and render the analysis report
pub fn run_analyze(args: &AnalyzeArgs) -> Result<String> {
    info!("Starting catalog analysis");

    let load = load_catalog(&args.input)?;
    let mut report = AnalysisReport::build(&load, args.rank_by, args.top)?;
    if args.show_rejections {
        report = report.with_rejections(load.stats.rejections.clone());
    }

    if let Some(line) = metric_line(&report, Metric::EnergyDensity) {
        info!("{}", line);
    }

    match args.output_format {
        OutputFormat::Human => Ok(render_report(&report)),
        OutputFormat::Json => render_json(&report).map(|json| json + "\n"),
    }
}
