//! `lift-sim`: discrete-event loop for the lift-sim elevator simulator.
//!
//! # Tick loop
//!
//! ```text
//! for now in start_time.. step 3 s, while a car runs and now < end_of_day:
//!   ① Cutoff     : first tick at or after arrivals_end flags every car
//!                  and strategy.
//!   ② Events     : drain events due now; run each through `transition`;
//!                  set loading attempts aside.
//!   ③ Arbitrate  : LoadingArbiter resolves the attempts per floor.
//!   ④ Schedule   : queue every next event at now + duration (≥ 1 tick).
//!   ⑤ Arrivals   : while now < arrivals_end, ask the generator for one
//!                  new person.
//! ```
//!
//! # Modules
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`event`]       | `Event`, `EventKind`, durations, `compute_duration` |
//! | [`queue`]       | `EventQueue`                                        |
//! | [`transition`]  | The per-elevator state machine                      |
//! | [`arbitration`] | `LoadingArbiter`                                    |
//! | [`sim`]         | `Sim` and its loop                                  |
//! | [`builder`]     | `SimBuilder`                                        |
//! | [`observer`]    | `SimObserver`, `NoopObserver`                       |
//! | [`stats`]       | `SimStats`, `SimReport`                             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_building::NoArrivals;
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//! use lift_strategy::SweepStrategy;
//!
//! let config = SimConfig::default();
//! let strategies = (0..config.elevator_count()).map(|_| SweepStrategy::new()).collect();
//! let mut sim = SimBuilder::new(config, strategies, NoArrivals).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{report}");
//! ```

pub mod arbitration;
pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod queue;
pub mod sim;
pub mod stats;
pub mod transition;

#[cfg(test)]
mod tests;

pub use arbitration::LoadingArbiter;
pub use builder::{arrivals_rng, SimBuilder, ARBITER_STREAM, ARRIVALS_STREAM};
pub use error::{SimError, SimResult};
pub use event::{compute_duration, Event, EventKind};
pub use observer::{NoopObserver, SimObserver};
pub use queue::EventQueue;
pub use sim::Sim;
pub use stats::{ElevatorReport, SimReport, SimStats};
pub use transition::{transition, TransitionContext};
