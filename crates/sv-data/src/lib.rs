//! Sales dataset loading

pub mod loader;
pub mod schema;
pub mod sources;

use arrow::error::ArrowError;
use thiserror::Error;

// Re-exports
pub use loader::load_dataset;
pub use sources::{open_source, CsvSource, SalesSource, XlsxSource};

/// Errors that can occur while loading the sales dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Arrow error: {0}")]
    Arrow(ArrowError),

    #[error("Missing {column} column (accepted headers: {accepted:?}, found: {found:?})")]
    MissingColumn {
        column: &'static str,
        accepted: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid quantity '{value}' on data row {row}")]
    InvalidQuantity { row: usize, value: String },
}

impl From<csv::Error> for DataLoadError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataLoadError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataLoadError::Csv(error.to_string()),
        }
    }
}

impl From<calamine::Error> for DataLoadError {
    fn from(error: calamine::Error) -> Self {
        match error {
            calamine::Error::Io(io_err) => DataLoadError::Io(io_err),
            other => DataLoadError::Spreadsheet(other.to_string()),
        }
    }
}

impl From<ArrowError> for DataLoadError {
    fn from(error: ArrowError) -> Self {
        DataLoadError::Arrow(error)
    }
}
