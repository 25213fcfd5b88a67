//! Core types for the carpark availability exporter.
//!
//! This crate provides the data structures shared by the rest of the workspace:
//!
//! - [`RawApiResponse`] - Decoded carpark-availability API payload
//! - [`Snapshot`], [`RawCarpark`], [`RawLotInfo`] - Nested payload entries
//! - [`CarparkAvailability`] - Flat per-carpark record written to CSV
//! - [`CarparkError`] - Umbrella error for the whole pipeline

#![doc(issue_tracker_base_url = "https://github.com/carpark-avail/carpark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod record;
mod schema;

pub use error::{CarparkError, MissingDataError, Result};
pub use record::CarparkAvailability;
pub use schema::{ApiInfo, RawApiResponse, RawCarpark, RawLotInfo, Snapshot};
