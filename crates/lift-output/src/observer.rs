//! `TraceObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use lift_core::{Floor, Person, SimTime};
use lift_sim::{Event, SimObserver, SimReport};

use crate::row::{ArrivalRow, EventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every fired event and arrival, then the
/// wait histogram, to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Event and arrival rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        match result {
            Ok(()) => {}
            // Keep only the first error.
            Err(e) if self.last_error.is_none() => self.last_error = Some(e),
            Err(_) => {}
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_event(&mut self, time: SimTime, event: &Event) {
        let result = self.writer.write_event(&EventRow::from_event(time, event));
        self.rows += 1;
        self.store_err(result);
    }

    fn on_arrival(&mut self, time: SimTime, floor: Floor, person: &Person) {
        let row = ArrivalRow {
            time,
            person:      person.id(),
            name:        person.name().to_owned(),
            floor,
            destination: person.destination(),
        };
        let result = self.writer.write_arrival(&row);
        self.rows += 1;
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _time: SimTime, report: &SimReport) {
        let result = self.writer.write_histogram(&report.buckets());
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
