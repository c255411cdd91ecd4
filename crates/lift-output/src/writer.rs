//! The `OutputWriter` trait implemented by output backends.

use lift_building::BucketCount;

use crate::{ArrivalRow, EventRow, OutputResult};

/// Sink for a run's trace and wait histogram.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and
/// retrieved with [`take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write one fired event.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write one arrival.
    fn write_arrival(&mut self, row: &ArrivalRow) -> OutputResult<()>;

    /// Write the bucketed wait histogram.
    fn write_histogram(&mut self, buckets: &[BucketCount]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
