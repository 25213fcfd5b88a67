//! Error types for the carpark pipeline.

use thiserror::Error;

/// Result type alias for carpark operations.
pub type Result<T> = std::result::Result<T, CarparkError>;

/// Fatal errors raised anywhere between the HTTP request and the CSV flush.
///
/// None of these are recoverable; the binary reports them and exits non-zero.
#[derive(Error, Debug)]
pub enum CarparkError {
    /// The HTTP client or request could not be built.
    #[error("Request construction error: {0}")]
    RequestConstruction(String),

    /// Transport failure or a non-success status code.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not a valid availability payload.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A required first element was absent.
    #[error(transparent)]
    MissingData(#[from] MissingDataError),

    /// A lot count was not a base-10 integer.
    #[error("Numeric parse error: {0}")]
    NumericParse(String),

    /// Fewer records were published than there are carparks.
    #[error("Incomplete normalization: {received} of {expected} records published")]
    Incomplete {
        /// Carparks in the snapshot.
        expected: usize,
        /// Records actually received.
        received: usize,
    },

    /// Writing or flushing the CSV output failed.
    #[error("Output error: {0}")]
    Output(String),
}

/// A payload sequence that must hold at least one element was empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MissingDataError {
    /// The response contained no snapshots.
    #[error("no snapshot data")]
    NoSnapshot,

    /// A carpark entry contained no lot information.
    #[error("no lot info for carpark {carpark_number}")]
    NoLotInfo {
        /// The carpark whose lot info was empty.
        carpark_number: String,
    },
}

impl From<serde_json::Error> for CarparkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
