//! Error handling for the cohort pipeline.

use arrow::error::ArrowError;
use thiserror::Error;

/// Specialized error type for pipeline operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A cell value did not match the type declared for its column
    #[error("parse error: {0}")]
    Parse(String),
    /// Error in the Arrow layer that is not a value parse failure
    #[error("Arrow error: {0}")]
    Arrow(ArrowError),
    /// A required column is missing from an input table
    #[error("column '{column}' not found")]
    ColumnNotFound {
        /// Name of the missing column
        column: String,
    },
    /// A column holds a different Arrow type than the register schema declares
    #[error("column '{column}' has unexpected type, expected {expected}")]
    TypeMismatch {
        /// Name of the offending column
        column: String,
        /// The type the register schema declares
        expected: String,
    },
    /// A pipeline stage produced no rows where at least one is required
    #[error("empty dataset: {0}")]
    EmptyDataset(String),
    /// Configuration values are out of range or unreadable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<ArrowError> for Error {
    fn from(error: ArrowError) -> Self {
        match error {
            // Value-level failures from the CSV reader surface as parse
            // errors; the record loader treats these as fatal.
            ArrowError::ParseError(message) | ArrowError::CsvError(message) => {
                Self::Parse(message)
            }
            other => Self::Arrow(other),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
