//! Command implementations for the supercapacitor analyzer CLI
//!
//! Each command is implemented in its own module. Command functions return
//! the rendered output so the dispatcher owns all writes to stdout.

pub mod analyze;
pub mod records;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Sets up logging from the shared input options and dispatches to the
/// selected subcommand, printing its output on success.
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(args.input())?;

    let output = match &args.command {
        Commands::Analyze(analyze_args) => analyze::run_analyze(analyze_args)?,
        Commands::Records(records_args) => records::run_records(records_args)?,
    };

    print!("{}", output);
    Ok(())
}
