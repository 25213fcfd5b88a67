//! Record aggregation for the carpark availability exporter.
//!
//! - [`AvailabilityReport`] - Every record of one snapshot, drained from a stream

#![doc(issue_tracker_base_url = "https://github.com/carpark-avail/carpark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod report;

pub use report::AvailabilityReport;
