//! The `Strategy` trait: the dispatch policy plugged into each car.

use lift_core::{Floor, Person, PersonId, SimTime};

use crate::StrategyView;

/// Pluggable dispatch policy for one elevator car.
///
/// The engine owns one `Strategy` per car and asks it where to go each time
/// the car has to plan its next leg (after starting, after the doors open
/// with nobody to drop, after the last unload, and on every stand-by poll).
///
/// # Required methods
///
/// Only [`choose_next_floors`][Self::choose_next_floors] is required.  The
/// notification hooks have no-op defaults; a strategy may use them to keep
/// its own bookkeeping, but the engine never relies on that bookkeeping.
///
/// # Contract for `choose_next_floors`
///
/// Return the ordered floors the car should visit next, head first.  The
/// list must be non-empty, every floor must be within `1..=max_floor`, and
/// its length must not exceed `view.max_planned_floors`.  The engine rejects
/// anything else with a fatal [`StrategyError`][crate::StrategyError].
/// Returning just the current floor means "stay here".
///
/// # Example
///
/// ```rust,ignore
/// struct GroundFloorShuttle;
///
/// impl Strategy for GroundFloorShuttle {
///     fn choose_next_floors(&mut self, view: &StrategyView<'_>) -> Vec<Floor> {
///         match view.onboard.first() {
///             Some(p) => vec![p.destination()],
///             None    => vec![1],
///         }
///     }
/// }
/// ```
pub trait Strategy {
    /// Plan the car's next stops.
    fn choose_next_floors(&mut self, view: &StrategyView<'_>) -> Vec<Floor>;

    /// The car has been placed at its starting floor.
    fn on_start(&mut self, _view: &StrategyView<'_>) {}

    /// The car reached `view.current_floor`; doors about to open.
    fn on_arrive(&mut self, _view: &StrategyView<'_>) {}

    /// `loaded` boarded at `view.current_floor`; they are now in `view.onboard`.
    fn on_load(&mut self, _view: &StrategyView<'_>, _loaded: &[PersonId]) {}

    /// `unloaded` left the car at `view.current_floor`.
    fn on_unload(&mut self, _view: &StrategyView<'_>, _unloaded: &[Person]) {}

    /// Someone started waiting at `floor`.
    fn on_new_person(&mut self, _time: SimTime, _floor: Floor, _person: &Person) {}

    /// No more persons will arrive today.
    fn on_last_person_arrived(&mut self, _time: SimTime) {}

    /// The car is idling at `view.current_floor` and is about to be polled.
    fn on_stand_by(&mut self, _view: &StrategyView<'_>) {}

    /// Called once at the start of every tick.
    fn on_tick(&mut self, _time: SimTime) {}
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_next_floors(&mut self, view: &StrategyView<'_>) -> Vec<Floor> {
        (**self).choose_next_floors(view)
    }

    fn on_start(&mut self, view: &StrategyView<'_>) {
        (**self).on_start(view)
    }

    fn on_arrive(&mut self, view: &StrategyView<'_>) {
        (**self).on_arrive(view)
    }

    fn on_load(&mut self, view: &StrategyView<'_>, loaded: &[PersonId]) {
        (**self).on_load(view, loaded)
    }

    fn on_unload(&mut self, view: &StrategyView<'_>, unloaded: &[Person]) {
        (**self).on_unload(view, unloaded)
    }

    fn on_new_person(&mut self, time: SimTime, floor: Floor, person: &Person) {
        (**self).on_new_person(time, floor, person)
    }

    fn on_last_person_arrived(&mut self, time: SimTime) {
        (**self).on_last_person_arrived(time)
    }

    fn on_stand_by(&mut self, view: &StrategyView<'_>) {
        (**self).on_stand_by(view)
    }

    fn on_tick(&mut self, time: SimTime) {
        (**self).on_tick(time)
    }
}
