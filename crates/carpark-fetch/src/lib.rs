//! HTTP fetching and record normalization for the carpark availability exporter.
//!
//! This crate provides the front half of the pipeline:
//!
//! - [`url::AVAILABILITY_URL`] - The availability endpoint
//! - [`FetchClient`] - Single-shot HTTP client that decodes the payload
//! - [`normalize`] - Concurrent per-carpark flattening into a [`RecordStream`]

#![doc(issue_tracker_base_url = "https://github.com/carpark-avail/carpark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod normalize;
pub mod url;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use client::{ClientConfig, FetchClient, FetchError};
pub use normalize::{NormalizeError, RecordStream, normalize, normalize_response};
