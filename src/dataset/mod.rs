//! Tabular CSV input and output for the fitting step.

use std::path::PathBuf;

use thiserror::Error;

pub mod export;
pub mod loader;

pub use export::write_scaled;
pub use loader::{FeatureTable, load_features};

/// Errors returned while reading or writing feature tables.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to open or read the CSV file.
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        /// Dataset path.
        path: PathBuf,
        /// CSV/IO error.
        source: csv::Error,
    },
    /// One or more required feature columns are absent from the header.
    #[error("Dataset {path} is missing required columns: {}", .missing.join(", "))]
    MissingColumns {
        /// Dataset path.
        path: PathBuf,
        /// Missing column names, in contract order.
        missing: Vec<String>,
    },
    /// A required cell could not be parsed as a number.
    #[error("Dataset {path} row {row}, column {column}: {value:?} is not a number")]
    InvalidValue {
        /// Dataset path.
        path: PathBuf,
        /// 1-based data row (header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Raw cell text.
        value: String,
    },
    /// Parsed cells could not be arranged into a table.
    #[error("Dataset {path} could not be shaped into a table: {source}")]
    Shape {
        /// Dataset path.
        path: PathBuf,
        /// Shape error.
        source: ndarray::ShapeError,
    },
    /// Failed to encode the output table.
    #[error("Failed to encode table for {path}: {source}")]
    Encode {
        /// Output path.
        path: PathBuf,
        /// CSV error.
        source: csv::Error,
    },
    /// Failed to write the output table.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}
