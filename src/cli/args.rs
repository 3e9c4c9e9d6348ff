//! Command-line argument definitions for the supercapacitor analyzer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::Metric;
use crate::config::ColumnLayout;
use crate::constants::DEFAULT_TOP_PARTS;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the supercapacitor catalog analyzer
///
/// Parses distributor CSV exports of supercapacitor listings into SI
/// quantities and reports capacitance, voltage, volume, energy and energy
/// density statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "supercap-analyzer",
    version,
    about = "Summarize supercapacitor catalog exports by energy density",
    long_about = "Parses distributor CSV exports of supercapacitor listings, normalizes \
                  capacitance, voltage and package dimensions into SI units, derives stored \
                  energy and energy density, and reports minimum, maximum, mean and median \
                  for every quantity. Rows with missing or malformed values are counted and \
                  skipped."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Summarize every metric across the parsed records (main command)
    Analyze(AnalyzeArgs),
    /// Print each parsed record
    Records(RecordsArgs),
}

/// Inputs, column layout and logging options shared by all commands
#[derive(Debug, Clone, ClapArgs)]
pub struct InputArgs {
    /// CSV export files or directories containing them
    ///
    /// Directories are searched recursively for *.csv files. The first row of
    /// every file is treated as a header.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// JSON file with column offsets
    ///
    /// Keys: part_number, capacitance, voltage, size, height. Omitted keys keep
    /// their defaults (2, 14, 16, 23, 24).
    #[arg(long = "layout", value_name = "FILE")]
    pub layout_file: Option<PathBuf>,

    /// Zero-based column of the part number
    #[arg(long = "part-number-column", value_name = "INDEX")]
    pub part_number_column: Option<usize>,

    /// Zero-based column of the capacitance
    #[arg(long = "capacitance-column", value_name = "INDEX")]
    pub capacitance_column: Option<usize>,

    /// Zero-based column of the rated voltage
    #[arg(long = "voltage-column", value_name = "INDEX")]
    pub voltage_column: Option<usize>,

    /// Zero-based column of the package size
    #[arg(long = "size-column", value_name = "INDEX")]
    pub size_column: Option<usize>,

    /// Zero-based column of the package height
    #[arg(long = "height-column", value_name = "INDEX")]
    pub height_column: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the analyze command
#[derive(Debug, Clone, ClapArgs)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of top parts to list (0 disables the ranking)
    #[arg(long = "top", value_name = "COUNT", default_value_t = DEFAULT_TOP_PARTS)]
    pub top: usize,

    /// Metric used to rank parts
    #[arg(long = "rank-by", value_name = "METRIC", default_value = "energy-density")]
    pub rank_by: Metric,

    /// List rejected rows and their reasons
    #[arg(long = "show-rejections")]
    pub show_rejections: bool,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the records command
#[derive(Debug, Clone, ClapArgs)]
pub struct RecordsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format for records
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Input options of whichever command was given
    pub fn input(&self) -> &InputArgs {
        match &self.command {
            Commands::Analyze(args) => &args.input,
            Commands::Records(args) => &args.input,
        }
    }
}

impl InputArgs {
    /// Validate inputs for consistency
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(Error::configuration("At least one input path is required"));
        }

        for input in &self.inputs {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input.display()
                )));
            }
        }

        if let Some(layout_file) = &self.layout_file {
            if !layout_file.is_file() {
                return Err(Error::configuration(format!(
                    "Layout file does not exist: {}",
                    layout_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Apply per-column overrides on top of a layout
    pub fn apply_overrides(&self, layout: &mut ColumnLayout) {
        if let Some(index) = self.part_number_column {
            layout.part_number = index;
        }
        if let Some(index) = self.capacitance_column {
            layout.capacitance = index;
        }
        if let Some(index) = self.voltage_column {
            layout.voltage = index;
        }
        if let Some(index) = self.size_column {
            layout.size = index;
        }
        if let Some(index) = self.height_column {
            layout.height = index;
        }
    }

    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
