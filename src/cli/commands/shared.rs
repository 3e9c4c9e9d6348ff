//! Shared components for CLI commands
//!
//! Logging setup, layout resolution and catalog loading used by both the
//! analyze and records commands.

use crate::app::services::catalog_loader::{CatalogLoader, LoadResult, discover_catalog_files};
use crate::cli::args::InputArgs;
use crate::config::ColumnLayout;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Set up structured logging on stderr
pub fn setup_logging(args: &InputArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve the column layout: layout file first, then per-column flags
pub fn resolve_layout(args: &InputArgs) -> Result<ColumnLayout> {
    let mut layout = match &args.layout_file {
        Some(path) => ColumnLayout::from_json_file(path)?,
        None => ColumnLayout::default(),
    };

    args.apply_overrides(&mut layout);
    layout.validate()?;

    debug!("Using column layout: {:?}", layout);
    Ok(layout)
}

/// Validate inputs, discover export files and load every row
pub fn load_catalog(args: &InputArgs) -> Result<LoadResult> {
    args.validate()?;
    let layout = resolve_layout(args)?;

    let files = discover_catalog_files(&args.inputs)?;
    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No CSV files found in {} input path(s)",
            args.inputs.len()
        )));
    }
    info!("Discovered {} catalog file(s)", files.len());

    let start = Instant::now();
    let result = CatalogLoader::new(layout).load_files(&files)?;
    info!("Loaded catalog in {:.2?}", start.elapsed());

    if result.stats.rows_rejected > 0 {
        warn!(
            "{} of {} rows could not be parsed",
            result.stats.rows_rejected, result.stats.total_rows
        );
    }

    Ok(result)
}
