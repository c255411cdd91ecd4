//! CSV loaders for scenario calls, affluence curves and name lists.
//!
//! # Call files
//!
//! One row per caller.  Used both for an initial waiting list and for
//! [`ScheduledArrivals`][crate::ScheduledArrivals].
//!
//! ```csv
//! floor,name,arrival,destination
//! 1,Alice,06:00,5
//! 3,Bob,06:00:30,1
//! ```
//!
//! # Affluence files
//!
//! ```csv
//! # lines starting with '#' are ignored
//! time,affluence
//! 06:00,0.2
//! 08:30,1.5
//! ```
//!
//! # Name files
//!
//! One name per line, no header.  Blank lines are skipped.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, SimTime};

use crate::arrivals::{AffluenceTable, ScheduledCall};
use crate::{BuildingError, BuildingResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    floor:       Floor,
    name:        String,
    arrival:     String,
    destination: Floor,
}

#[derive(Deserialize)]
struct AffluenceRecord {
    time:      String,
    affluence: f64,
}

// ── Calls ─────────────────────────────────────────────────────────────────────

/// Load timed calls from a CSV file.
pub fn load_calls_csv(path: &Path) -> BuildingResult<Vec<ScheduledCall>> {
    let file = std::fs::File::open(path)?;
    load_calls_reader(file)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
pub fn load_calls_reader<R: Read>(reader: R) -> BuildingResult<Vec<ScheduledCall>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    csv_reader
        .deserialize::<CallRecord>()
        .map(|result| -> BuildingResult<ScheduledCall> {
            let row = result.map_err(|e| BuildingError::Parse(e.to_string()))?;
            Ok(ScheduledCall {
                time:        row.arrival.parse()?,
                floor:       row.floor,
                name:        row.name,
                destination: row.destination,
            })
        })
        .collect()
}

// ── Affluence ─────────────────────────────────────────────────────────────────

/// Load an affluence step function from a CSV file.
pub fn load_affluence_csv(path: &Path) -> BuildingResult<AffluenceTable> {
    let file = std::fs::File::open(path)?;
    load_affluence_reader(file)
}

/// Like [`load_affluence_csv`] but accepts any `Read` source.
pub fn load_affluence_reader<R: Read>(reader: R) -> BuildingResult<AffluenceTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut points: Vec<(SimTime, f64)> = Vec::new();
    for result in csv_reader.deserialize::<AffluenceRecord>() {
        let row = result.map_err(|e| BuildingError::Parse(e.to_string()))?;
        if !row.affluence.is_finite() || row.affluence < 0.0 {
            return Err(BuildingError::Parse(format!(
                "invalid affluence {} at {}",
                row.affluence, row.time
            )));
        }
        points.push((row.time.parse()?, row.affluence));
    }
    Ok(AffluenceTable::from_points(points))
}

// ── Names ─────────────────────────────────────────────────────────────────────

/// Load a name list (one per line, no header).
pub fn load_names_csv(path: &Path) -> BuildingResult<Vec<String>> {
    let file = std::fs::File::open(path)?;
    load_names_reader(file)
}

/// Like [`load_names_csv`] but accepts any `Read` source.
pub fn load_names_reader<R: Read>(reader: R) -> BuildingResult<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut names = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| BuildingError::Parse(e.to_string()))?;
        match record.get(0) {
            Some(name) if !name.is_empty() => names.push(name.to_owned()),
            _ => {}
        }
    }
    Ok(names)
}
