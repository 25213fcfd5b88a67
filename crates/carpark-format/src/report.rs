//! Render-as-CSV capability for collected reports.

use carpark_aggregate::AvailabilityReport;
use std::io::{self, Write};

use crate::{CsvFormatter, FormatError};

/// A collected report that can render itself as CSV.
pub trait Reportable {
    /// Writes the report as CSV, header first, and flushes `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if any write or the flush fails.
    fn write_csv(&self, writer: &mut dyn Write) -> Result<(), FormatError>;

    /// Writes the report as CSV to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing stdout fails.
    fn print_carpark_availability_csv(&self) -> Result<(), FormatError> {
        let mut stdout = io::stdout().lock();
        self.write_csv(&mut stdout)
    }
}

impl Reportable for AvailabilityReport {
    fn write_csv(&self, writer: &mut dyn Write) -> Result<(), FormatError> {
        CsvFormatter::new().write_records(self.records(), writer)
    }
}
