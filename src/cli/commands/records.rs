//! Records command: print every parsed record

use crate::Result;
use crate::cli::args::{OutputFormat, RecordsArgs};
use crate::cli::commands::shared::load_catalog;
use crate::cli::output::{render_json, render_records};
use tracing::info;

/// Load the inputs and render each parsed record
pub fn run_records(args: &RecordsArgs) -> Result<String> {
    let load = load_catalog(&args.input)?;
    info!("{}", load.stats.summary());

    match args.output_format {
        OutputFormat::Human => Ok(render_records(&load.records)),
        OutputFormat::Json => render_json(&load.records).map(|json| json + "\n"),
    }
}
