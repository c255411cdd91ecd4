//! `lift-output`: simulation output writers for the lift-sim elevator
//! simulator.
//!
//! | Backend     | Files created                                   |
//! |-------------|-------------------------------------------------|
//! | CSV         | `events.csv`, `arrivals.csv`, `histogram.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! let report = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{ArrivalRow, EventRow};
pub use writer::OutputWriter;
