//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset file not found: {path}. Download it from {url}")]
    NotFound { path: PathBuf, url: &'static str },

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid date '{value}' on line {line}")]
    InvalidDate { line: usize, value: String },

    #[error("Dataset contains no records")]
    Empty,
}

/// Errors raised by aggregation queries
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Figure has no panels")]
    EmptyFigure,

    #[error("Invalid chart dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
