//! `lift-strategy`: the dispatch policy seam.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`model`]     | `Strategy` trait (one required method plus notification hooks) |
//! | [`view`]      | `StrategyView<'a>`: read-only car and building snapshot        |
//! | [`direction`] | `Direction` (`Up`, `Down`, `Stop`)                             |
//! | [`validate`]  | `validate_floors`: rejects lists the engine cannot follow      |
//! | [`idle`]      | `IdleStrategy`: never moves                                    |
//! | [`sweep`]     | `SweepStrategy`: collective up/down sweep                      |
//! | [`nearest`]   | `NearestCallStrategy`: greedy nearest call                     |
//! | [`error`]     | `StrategyError`, `StrategyResult<T>`                           |
//!
//! # Design notes
//!
//! A strategy only *proposes* a plan.  The engine validates it, copies it
//! into the car's shadow state, and drives the car from there; a strategy's
//! private bookkeeping can drift without affecting correctness.

pub mod direction;
pub mod error;
pub mod idle;
pub mod model;
pub mod nearest;
pub mod sweep;
pub mod validate;
pub mod view;


pub use direction::Direction;
pub use error::{StrategyError, StrategyResult};
pub use idle::IdleStrategy;
pub use model::Strategy;
pub use nearest::NearestCallStrategy;
pub use sweep::SweepStrategy;
pub use validate::validate_floors;
pub use view::StrategyView;
