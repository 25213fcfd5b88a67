//! Library for exporting real-time carpark availability as CSV.
//!
//! This is a facade crate that re-exports functionality from the carpark
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use carpark_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FetchClient::with_defaults()?;
//!     let response = client.fetch().await?;
//!
//!     let report = AvailabilityReport::collect(normalize_response(response)?).await;
//!     report.print_carpark_availability_csv()?;
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/carpark-avail/carpark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use carpark_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use carpark_fetch::{
    ClientConfig, FetchClient, FetchError, NormalizeError, RecordStream, normalize,
    normalize_response, url,
};

// Re-export aggregation
#[cfg(feature = "aggregate")]
pub use carpark_aggregate::AvailabilityReport;

// Re-export formatters
#[cfg(feature = "format")]
pub use carpark_format::{CsvFormatter, FormatError, Reportable};

/// Prelude module for convenient imports.
///
/// ```
/// use carpark_lib::prelude::*;
/// ```
pub mod prelude {
    pub use carpark_types::{
        CarparkAvailability, CarparkError, MissingDataError, RawApiResponse, RawCarpark,
        RawLotInfo, Result, Snapshot,
    };

    #[cfg(feature = "fetch")]
    pub use carpark_fetch::{
        ClientConfig, FetchClient, RecordStream, normalize, normalize_response,
    };

    #[cfg(feature = "aggregate")]
    pub use carpark_aggregate::AvailabilityReport;

    #[cfg(feature = "format")]
    pub use carpark_format::{CsvFormatter, Reportable};
}
