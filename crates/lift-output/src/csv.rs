//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `events.csv`: `time,elevator,event,floor,people`
//! - `arrivals.csv`: `time,person,name,floor,destination`
//! - `histogram.csv`: `bucket_secs,count`

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use lift_building::BucketCount;

use crate::writer::OutputWriter;
use crate::{ArrivalRow, EventRow, OutputResult};

/// Writes a run's trace and histogram as CSV, to files by default.
pub struct CsvWriter<W: Write = File> {
    events:    Writer<W>,
    arrivals:  Writer<W>,
    histogram: Writer<W>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::from_writers(
            File::create(dir.join("events.csv"))?,
            File::create(dir.join("arrivals.csv"))?,
            File::create(dir.join("histogram.csv"))?,
        )
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap three sinks and write the header rows.
    pub fn from_writers(events: W, arrivals: W, histogram: W) -> OutputResult<Self> {
        let mut events = Writer::from_writer(events);
        events.write_record(["time", "elevator", "event", "floor", "people"])?;

        let mut arrivals = Writer::from_writer(arrivals);
        arrivals.write_record(["time", "person", "name", "floor", "destination"])?;

        let mut histogram = Writer::from_writer(histogram);
        histogram.write_record(["bucket_secs", "count"])?;

        Ok(Self {
            events,
            arrivals,
            histogram,
            finished: false,
        })
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.time.to_string(),
            row.elevator.0.to_string(),
            row.event.to_owned(),
            row.floor.to_string(),
            row.people_field(),
        ])?;
        Ok(())
    }

    fn write_arrival(&mut self, row: &ArrivalRow) -> OutputResult<()> {
        self.arrivals.write_record(&[
            row.time.to_string(),
            row.person.0.to_string(),
            row.name.clone(),
            row.floor.to_string(),
            row.destination.to_string(),
        ])?;
        Ok(())
    }

    fn write_histogram(&mut self, buckets: &[BucketCount]) -> OutputResult<()> {
        for bucket in buckets {
            self.histogram.write_record(&[bucket.label(), bucket.count.to_string()])?;
        }
        Ok(())
    }

    /// Flushes all three files.  Once every flush has succeeded further
    /// calls are no-ops; after a failure the next call flushes again.
    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.events.flush()?;
        self.arrivals.flush()?;
        self.histogram.flush()?;
        self.finished = true;
        Ok(())
    }
}
