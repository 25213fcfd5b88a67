//! Collected availability report.

use carpark_types::CarparkAvailability;
use futures::{Stream, StreamExt};
use tracing::debug;

/// All availability records of one snapshot.
///
/// Records keep the order they arrived in, which follows task completion
/// and varies run to run. Consumers key rows by carpark number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityReport {
    records: Vec<CarparkAvailability>,
}

impl AvailabilityReport {
    /// Creates a report from already collected records.
    #[must_use]
    pub const fn new(records: Vec<CarparkAvailability>) -> Self {
        Self { records }
    }

    /// Drains `stream` until it ends.
    pub async fn collect<S>(stream: S) -> Self
    where
        S: Stream<Item = CarparkAvailability>,
    {
        let records: Vec<_> = stream.collect().await;
        debug!(records = records.len(), "collected availability report");
        Self { records }
    }

    /// Returns the records in arrival order.
    #[must_use]
    pub fn records(&self) -> &[CarparkAvailability] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the report holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the report, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<CarparkAvailability> {
        self.records
    }
}

impl FromIterator<CarparkAvailability> for AvailabilityReport {
    fn from_iter<I: IntoIterator<Item = CarparkAvailability>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
