//! Shapes of the carpark-availability API response.
//!
//! The payload nests as `api_info` + `items[]` (snapshots) →
//! `carpark_data[]` (carparks) → `carpark_info[]` (lot types). Every count
//! arrives as a string. Absent fields decode as empty values; counts are
//! only checked when they are parsed.

use serde::{Deserialize, Serialize};

use crate::MissingDataError;

/// Top-level decode target for the availability endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawApiResponse {
    /// API health block.
    #[serde(default)]
    pub api_info: ApiInfo,
    /// Timestamped snapshots. The API returns exactly one.
    #[serde(rename = "items", default)]
    pub snapshots: Vec<Snapshot>,
}

impl RawApiResponse {
    /// Returns the API-reported health indicator (e.g. `"healthy"`).
    #[must_use]
    pub fn status(&self) -> &str {
        &self.api_info.status
    }

    /// Returns the first snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`MissingDataError::NoSnapshot`] if the response holds no snapshots.
    pub fn first_snapshot(&self) -> Result<&Snapshot, MissingDataError> {
        self.snapshots.first().ok_or(MissingDataError::NoSnapshot)
    }

    /// Consumes the response, returning its first snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`MissingDataError::NoSnapshot`] if the response holds no snapshots.
    pub fn into_first_snapshot(self) -> Result<Snapshot, MissingDataError> {
        self.snapshots
            .into_iter()
            .next()
            .ok_or(MissingDataError::NoSnapshot)
    }
}

/// API health block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Health indicator. Decoded but not used downstream.
    #[serde(default)]
    pub status: String,
}

/// Availability of every carpark at one capture time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Capture time of the snapshot.
    #[serde(default)]
    pub timestamp: String,
    /// Per-carpark entries.
    #[serde(rename = "carpark_data", default)]
    pub carparks: Vec<RawCarpark>,
}

/// One carpark as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCarpark {
    /// Carpark identifier, unique within a snapshot.
    #[serde(default)]
    pub carpark_number: String,
    /// Last update time of this carpark.
    #[serde(default)]
    pub update_datetime: String,
    /// Per-lot-type entries. The API returns exactly one.
    #[serde(rename = "carpark_info", default)]
    pub lot_info: Vec<RawLotInfo>,
}

impl RawCarpark {
    /// Returns the first lot info entry.
    ///
    /// # Errors
    ///
    /// Returns [`MissingDataError::NoLotInfo`] if the carpark has no lot info.
    pub fn first_lot_info(&self) -> Result<&RawLotInfo, MissingDataError> {
        self.lot_info
            .first()
            .ok_or_else(|| MissingDataError::NoLotInfo {
                carpark_number: self.carpark_number.clone(),
            })
    }
}

/// Lot counts for a single lot type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLotInfo {
    /// Total capacity, as decimal text.
    #[serde(default)]
    pub total_lots: String,
    /// Currently free lots, as decimal text.
    #[serde(default)]
    pub lots_available: String,
    /// Lot category code (e.g. `C` for cars, `H` for heavy vehicles).
    #[serde(default)]
    pub lot_type: String,
}
