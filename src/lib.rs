//! Supercapacitor Catalog Analyzer Library
//!
//! A Rust library for turning distributor exports of supercapacitor part
//! listings into normalized physical quantities and summary statistics.
//!
//! This library provides tools for:
//! - Extracting magnitudes and unit suffixes from free-text catalog fields
//! - Parsing parenthesized millimeter package dimensions (`(D)`, `(LxW)`)
//! - Building validated physical records (capacitance, voltage, volume,
//!   stored energy and energy density)
//! - Loading CSV exports with per-row failure isolation
//! - Computing min/max/mean/median summaries for every derived metric

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_loader;
        pub mod field_parsers;
        pub mod record_builder;
        pub mod statistics;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod output;
}

// Re-export commonly used types
pub use app::models::{Metric, PackageGeometry, PhysicalRecord};
pub use config::ColumnLayout;

/// Result type alias for the supercapacitor analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog parsing and analysis
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The "-" placeholder was found where a value was required
    #[error("Missing value in field '{field}'")]
    MissingValue { field: String },

    /// A capacitance suffix did not start with a known unit prefix
    #[error("Unrecognized capacitance unit '{suffix}'")]
    UnrecognizedUnit { suffix: String },

    /// The size field yielded neither one nor two dimensions
    #[error("Unsupported package geometry: {dimensions} size dimension(s) in '{raw}'")]
    UnsupportedGeometry { raw: String, dimensions: usize },

    /// Computed package volume cannot be used to derive energy density
    #[error("Invalid package volume: {volume} m³")]
    InvalidVolume { volume: f64 },

    /// An extracted numeric token could not be converted to a number
    #[error("Invalid number '{token}' in field '{field}'")]
    NumericFormat { field: String, token: String },

    /// A parsed quantity is zero, negative or not finite
    #[error("Non-positive {field}: {value}")]
    NonPositiveQuantity { field: String, value: f64 },

    /// The row does not have enough columns for the configured layout
    #[error("Row has {found} fields, column {index} ({field}) is missing")]
    MissingColumn {
        field: String,
        index: usize,
        found: usize,
    },

    /// Statistics were requested over zero records
    #[error("No records available to summarize {metric}")]
    EmptyDataSet { metric: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output could not be serialized
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a missing value error for the named field
    pub fn missing_value(field: impl Into<String>) -> Self {
        Self::MissingValue {
            field: field.into(),
        }
    }

    /// Create an unrecognized unit error
    pub fn unrecognized_unit(suffix: impl Into<String>) -> Self {
        Self::UnrecognizedUnit {
            suffix: suffix.into(),
        }
    }

    /// Create an unsupported geometry error
    pub fn unsupported_geometry(raw: impl Into<String>, dimensions: usize) -> Self {
        Self::UnsupportedGeometry {
            raw: raw.into(),
            dimensions,
        }
    }

    /// Create an invalid volume error
    pub fn invalid_volume(volume: f64) -> Self {
        Self::InvalidVolume { volume }
    }

    /// Create a numeric format error
    pub fn numeric_format(field: impl Into<String>, token: impl Into<String>) -> Self {
        Self::NumericFormat {
            field: field.into(),
            token: token.into(),
        }
    }

    /// Create a non-positive quantity error
    pub fn non_positive_quantity(field: impl Into<String>, value: f64) -> Self {
        Self::NonPositiveQuantity {
            field: field.into(),
            value,
        }
    }

    /// Create a missing column error
    pub fn missing_column(field: impl Into<String>, index: usize, found: usize) -> Self {
        Self::MissingColumn {
            field: field.into(),
            index,
            found,
        }
    }

    /// Create an empty data set error
    pub fn empty_data_set(metric: impl Into<String>) -> Self {
        Self::EmptyDataSet {
            metric: metric.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Short, stable name of the error kind, used to tally rejected rows
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingValue { .. } => "MissingValue",
            Self::UnrecognizedUnit { .. } => "UnrecognizedUnit",
            Self::UnsupportedGeometry { .. } => "UnsupportedGeometry",
            Self::InvalidVolume { .. } => "InvalidVolume",
            Self::NumericFormat { .. } => "NumericFormatError",
            Self::NonPositiveQuantity { .. } => "NonPositiveQuantity",
            Self::MissingColumn { .. } => "MissingColumn",
            Self::EmptyDataSet { .. } => "EmptyDataSet",
            Self::Io { .. } => "Io",
            Self::CsvParsing { .. } => "CsvParsing",
            Self::Configuration { .. } => "Configuration",
            Self::Serialization { .. } => "Serialization",
        }
    }

    /// Whether this error only invalidates a single input row
    pub fn is_row_error(&self) -> bool {
        !matches!(
            self,
            Self::EmptyDataSet { .. }
                | Self::Io { .. }
                | Self::Configuration { .. }
                | Self::Serialization { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        let message = format!("Directory traversal failed: {}", error);
        match error.into_io_error() {
            Some(source) => Self::Io { message, source },
            None => Self::Configuration { message },
        }
    }
}
