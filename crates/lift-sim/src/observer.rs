//! Simulation observer trait for progress reporting and trace collection.

use lift_core::{Floor, Person, SimTime};

use crate::{Event, SimReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival counter
///
/// ```rust,ignore
/// struct Arrivals(usize);
///
/// impl SimObserver for Arrivals {
///     fn on_arrival(&mut self, _time: SimTime, _floor: Floor, _person: &Person) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _time: SimTime) {}

    /// Called for every queued event as it fires, before its transition.
    ///
    /// Loading attempts are resolved inside the tick and never queued, so
    /// they are not reported; their outcome is.
    fn on_event(&mut self, _time: SimTime, _event: &Event) {}

    /// Called when a new person joins a floor queue.
    fn on_arrival(&mut self, _time: SimTime, _floor: Floor, _person: &Person) {}

    /// Called at the end of each tick.
    ///
    /// `processed` is the number of events that fired this tick.
    fn on_tick_end(&mut self, _time: SimTime, _processed: usize) {}

    /// Called once after the loop ends.
    fn on_sim_end(&mut self, _time: SimTime, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
