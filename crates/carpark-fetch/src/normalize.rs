//! Concurrent flattening of carpark entries into availability records.
//!
//! Normalization runs in two phases. Every carpark is validated and its lot
//! counts parsed up front, so a bad entry fails the whole snapshot before any
//! task is spawned. Then one task per carpark publishes its record onto an
//! unbounded channel. A closer task holds the original sender and the set of
//! producers; once every producer has joined it drops the sender, which
//! closes the channel and ends the [`RecordStream`]. A producer that dies
//! without publishing leaves the stream short, which
//! [`RecordStream::finish`] reports as an error.

use carpark_types::{
    CarparkAvailability, CarparkError, MissingDataError, RawApiResponse, RawCarpark, Snapshot,
};
use futures::Stream;
use std::num::ParseIntError;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, trace};

/// Errors that can occur while normalizing a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A required snapshot or lot info entry was absent.
    #[error(transparent)]
    MissingData(#[from] MissingDataError),

    /// A lot count was not a base-10 integer.
    #[error("Invalid {field} {value:?} for carpark {carpark_number}: {source}")]
    InvalidCount {
        /// The carpark the count belongs to.
        carpark_number: String,
        /// Name of the offending field.
        field: &'static str,
        /// The raw text.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The stream ended with fewer records than carparks.
    #[error("Incomplete normalization: {received} of {expected} records published")]
    Incomplete {
        /// Producer tasks launched.
        expected: usize,
        /// Records received before the stream ended.
        received: usize,
    },
}

impl From<NormalizeError> for CarparkError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::MissingData(e) => Self::MissingData(e),
            NormalizeError::InvalidCount { .. } => Self::NumericParse(err.to_string()),
            NormalizeError::Incomplete { expected, received } => {
                Self::Incomplete { expected, received }
            }
        }
    }
}

/// Validated carpark fields, ready to become a record.
#[derive(Debug)]
struct ParsedCarpark {
    update_datetime: String,
    carpark_number: String,
    lot_type: String,
    lots_total: i64,
    lots_available: i64,
}

impl ParsedCarpark {
    fn parse(carpark: RawCarpark) -> Result<Self, NormalizeError> {
        let lot = carpark.first_lot_info()?;
        let lots_total = parse_count(&carpark.carpark_number, "total_lots", &lot.total_lots)?;
        let lots_available =
            parse_count(&carpark.carpark_number, "lots_available", &lot.lots_available)?;
        let lot_type = lot.lot_type.clone();

        Ok(Self {
            update_datetime: carpark.update_datetime,
            carpark_number: carpark.carpark_number,
            lot_type,
            lots_total,
            lots_available,
        })
    }

    fn into_record(self) -> CarparkAvailability {
        CarparkAvailability::new(
            self.update_datetime,
            self.carpark_number,
            self.lots_total,
            self.lots_available,
            self.lot_type,
        )
    }
}

fn parse_count(
    carpark_number: &str,
    field: &'static str,
    value: &str,
) -> Result<i64, NormalizeError> {
    value
        .parse::<i64>()
        .map_err(|source| NormalizeError::InvalidCount {
            carpark_number: carpark_number.to_string(),
            field,
            value: value.to_string(),
            source,
        })
}

/// Records published by normalization tasks, in completion order.
///
/// Ends once every task has published and the channel has been closed.
#[derive(Debug)]
pub struct RecordStream {
    rx: mpsc::UnboundedReceiver<CarparkAvailability>,
    expected: usize,
    received: usize,
}

impl RecordStream {
    /// Returns the number of producer tasks launched.
    #[must_use]
    pub const fn expected(&self) -> usize {
        self.expected
    }

    /// Receives the next record, or `None` once the channel is closed and drained.
    pub async fn recv(&mut self) -> Option<CarparkAvailability> {
        let record = self.rx.recv().await;
        if record.is_some() {
            self.received += 1;
        }
        record
    }

    /// Checks that one record arrived per producer.
    ///
    /// Call once the stream has ended.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::Incomplete`] if fewer records were received
    /// than producers were launched.
    pub fn finish(&self) -> Result<(), NormalizeError> {
        if self.received == self.expected {
            Ok(())
        } else {
            Err(NormalizeError::Incomplete {
                expected: self.expected,
                received: self.received,
            })
        }
    }
}

impl Stream for RecordStream {
    type Item = CarparkAvailability;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let polled = self.rx.poll_recv(cx);
        if let Poll::Ready(Some(_)) = &polled {
            self.received += 1;
        }
        polled
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.expected.saturating_sub(self.received)))
    }
}

/// Normalizes the first snapshot of a decoded response.
///
/// # Errors
///
/// Returns [`MissingDataError::NoSnapshot`] if the response has no snapshots,
/// otherwise see [`normalize`].
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn normalize_response(response: RawApiResponse) -> Result<RecordStream, NormalizeError> {
    normalize(response.into_first_snapshot()?)
}

/// Flattens every carpark in `snapshot` into one [`CarparkAvailability`].
///
/// All lot counts are parsed before any task is spawned; on error nothing is
/// published. Records arrive in task completion order, not input order.
///
/// # Errors
///
/// Returns an error if a carpark has no lot info or a count is not an integer.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn normalize(snapshot: Snapshot) -> Result<RecordStream, NormalizeError> {
    let parsed = snapshot
        .carparks
        .into_iter()
        .map(ParsedCarpark::parse)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(publish(parsed))
}

fn publish(parsed: Vec<ParsedCarpark>) -> RecordStream {
    let expected = parsed.len();
    let (tx, rx) = mpsc::unbounded_channel();
    let mut producers = JoinSet::new();

    for carpark in parsed {
        let tx = tx.clone();
        producers.spawn(async move {
            let record = carpark.into_record();
            if tx.send(record).is_err() {
                trace!("record stream dropped before publish");
            }
        });
    }

    tokio::spawn(async move {
        while let Some(joined) = producers.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "normalization task failed before publishing");
            }
        }
        drop(tx);
        debug!(expected, "all normalization tasks finished, record stream closed");
    });

    RecordStream {
        rx,
        expected,
        received: 0,
    }
}
