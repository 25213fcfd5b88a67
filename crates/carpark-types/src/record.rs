//! Flat carpark availability record.

use serde::{Deserialize, Serialize};

/// One row of output: a carpark's availability for its first lot type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarparkAvailability {
    /// Carpark update time (not the snapshot timestamp).
    pub timestamp: String,
    /// Carpark identifier.
    pub carpark_number: String,
    /// Total capacity.
    pub lots_total: i64,
    /// Currently free lots.
    pub lots_available: i64,
    /// Lot category code.
    pub lot_type: String,
}

impl CarparkAvailability {
    /// Column names, in output order.
    pub const HEADERS: [&'static str; 5] = [
        "Timestamp",
        "CarparkNumber",
        "LotsTotal",
        "LotsAvailable",
        "LotType",
    ];

    /// Creates a new record.
    #[must_use]
    pub const fn new(
        timestamp: String,
        carpark_number: String,
        lots_total: i64,
        lots_available: i64,
        lot_type: String,
    ) -> Self {
        Self {
            timestamp,
            carpark_number,
            lots_total,
            lots_available,
            lot_type,
        }
    }

    /// Renders the record as CSV fields, in [`Self::HEADERS`] order.
    #[must_use]
    pub fn to_row(&self) -> [String; 5] {
        [
            self.timestamp.clone(),
            self.carpark_number.clone(),
            self.lots_total.to_string(),
            self.lots_available.to_string(),
            self.lot_type.clone(),
        ]
    }
}
