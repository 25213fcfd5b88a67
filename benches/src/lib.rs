//! Benchmark utilities for carpark.

use carpark_lib::{RawCarpark, RawLotInfo, Snapshot};

/// Lot type codes seen in the live feed.
const LOT_TYPES: [&str; 3] = ["C", "H", "Y"];

/// Builds a snapshot of `carparks` entries shaped like the live feed.
pub fn synthetic_snapshot(carparks: usize) -> Snapshot {
    Snapshot {
        timestamp: "2024-01-02T10:00:27+08:00".to_string(),
        carparks: (0..carparks)
            .map(|i| RawCarpark {
                carpark_number: format!("CP{i:05}"),
                update_datetime: "2024-01-02T09:59:12".to_string(),
                lot_info: vec![RawLotInfo {
                    total_lots: (100 + i % 900).to_string(),
                    lots_available: (i % 100).to_string(),
                    lot_type: LOT_TYPES[i % LOT_TYPES.len()].to_string(),
                }],
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_snapshot() {
        let snapshot = synthetic_snapshot(4);
        assert_eq!(snapshot.carparks.len(), 4);
        assert_eq!(snapshot.carparks[3].carpark_number, "CP00003");
        assert_eq!(snapshot.carparks[3].lot_info[0].lot_type, "C");
    }
}
