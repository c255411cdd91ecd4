//! `lift-core`: foundational types for the `lift-sim` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `ElevatorId`, `PersonId`, `Floor`                       |
//! | [`time`]      | `SimTime`, `SimClock`, `TICK_SECS`                      |
//! | [`config`]    | `SimConfig` (building constants, day bounds, seed)      |
//! | [`rng`]       | `SimRng`                                                |
//! | [`person`]    | `Person`                                                |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod person;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{ElevatorId, Floor, PersonId};
pub use person::Person;
pub use rng::SimRng;
pub use time::{SimClock, SimTime, TICK_SECS};
