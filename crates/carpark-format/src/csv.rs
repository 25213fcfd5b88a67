//! CSV output format.

use carpark_types::CarparkAvailability;
use std::io::Write;
use tracing::debug;

use crate::FormatError;

/// CSV formatter: comma-delimited, header row first.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Creates a new CSV formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Writes the header row, then one row per record, then flushes.
    ///
    /// Fields containing the delimiter, quotes or newlines are quoted.
    ///
    /// # Errors
    ///
    /// Returns an error if any write or the final flush fails.
    pub fn write_records<W: Write>(
        &self,
        records: &[CarparkAvailability],
        writer: W,
    ) -> Result<(), FormatError> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv.write_record(CarparkAvailability::HEADERS)?;

        for record in records {
            csv.write_record(record.to_row())?;
        }

        csv.flush()?;
        debug!(rows = records.len(), "wrote csv");
        Ok(())
    }
}
