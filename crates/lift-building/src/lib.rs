//! `lift-building`: the building's shared state and its inputs.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`waiting_list`] | `WaitingList` (per-floor FIFO queues of `Person`)          |
//! | [`shadow`]       | `ShadowElevator` (ground-truth car state)                  |
//! | [`histogram`]    | `DurationHistogram`, `BucketCount`                         |
//! | [`arrivals`]     | `ArrivalGenerator` trait, `NoArrivals`, `ScheduledArrivals`, `AffluenceArrivals`, `AffluenceTable` |
//! | [`loader`]       | CSV loaders for calls, affluence curves and names          |
//! | [`error`]        | `BuildingError`, `BuildingResult<T>`                       |
//!
//! # Ownership model
//!
//! A `Person` value lives in exactly one place: a floor queue of the
//! `WaitingList` or the onboard set of one `ShadowElevator`.  Moving between
//! the two is a by-value transfer (`take_loadable` → `board`), so
//! double-allocation is ruled out by the type system rather than by checks.

pub mod arrivals;
pub mod error;
pub mod histogram;
pub mod loader;
pub mod shadow;
pub mod waiting_list;


pub use arrivals::{
    AffluenceArrivals, AffluenceTable, Arrival, ArrivalGenerator, NoArrivals, ScheduledArrivals,
    ScheduledCall,
};
pub use error::{BuildingError, BuildingResult};
pub use histogram::{BucketCount, DurationHistogram, BUCKET_BOUNDS_SECS};
pub use loader::{
    load_affluence_csv, load_affluence_reader, load_calls_csv, load_calls_reader, load_names_csv,
    load_names_reader,
};
pub use shadow::ShadowElevator;
pub use waiting_list::WaitingList;
