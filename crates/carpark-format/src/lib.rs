//! CSV output for the carpark availability exporter.
//!
//! - [`CsvFormatter`] - Header plus one row per record, standard CSV quoting
//! - [`Reportable`] - Render-as-CSV capability of a collected report

#![doc(issue_tracker_base_url = "https://github.com/carpark-avail/carpark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod error;
mod report;

pub use crate::csv::CsvFormatter;
pub use error::FormatError;
pub use report::Reportable;
