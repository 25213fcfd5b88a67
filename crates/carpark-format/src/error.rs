//! Output errors.

use carpark_types::CarparkError;
use thiserror::Error;

/// Errors that can occur while writing output.
#[derive(Error, Debug)]
pub enum FormatError {
    /// CSV encoding or write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error, typically on flush.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FormatError> for CarparkError {
    fn from(err: FormatError) -> Self {
        Self::Output(err.to_string())
    }
}
