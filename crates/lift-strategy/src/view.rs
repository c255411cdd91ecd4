//! Read-only elevator state passed to every strategy callback.

use lift_building::{ShadowElevator, WaitingList};
use lift_core::{ElevatorId, Floor, Person, SimConfig, SimTime};

/// A read-only snapshot of one car and the building, passed to every
/// [`Strategy`][crate::Strategy] callback.
///
/// Built by `lift-sim` from the car's shadow state right before the call.
/// Strategies can look but not touch: all borrows are shared, and the shadow
/// is only ever mutated by the engine.
pub struct StrategyView<'a> {
    /// The car being asked.
    pub elevator: ElevatorId,

    /// Current simulated time.
    pub time: SimTime,

    pub current_floor: Floor,

    /// The car's current plan, head first.
    pub planned: &'a [Floor],

    /// Persons currently in the car.
    pub onboard: &'a [Person],

    pub capacity: usize,

    /// Every floor queue in the building.
    pub waiting: &'a WaitingList,

    /// Highest floor; floors are `1..=max_floor`.
    pub max_floor: Floor,

    /// Longest floor list the engine accepts from `choose_next_floors`.
    pub max_planned_floors: usize,

    /// `true` once no more persons can arrive today.
    pub last_person_arrived: bool,
}

impl<'a> StrategyView<'a> {
    /// Build a view of `shadow` at `time`.
    #[inline]
    pub fn new(
        time:    SimTime,
        shadow:  &'a ShadowElevator,
        waiting: &'a WaitingList,
        config:  &SimConfig,
    ) -> Self {
        Self {
            elevator:            shadow.id(),
            time,
            current_floor:       shadow.current_floor(),
            planned:             shadow.planned_floors(),
            onboard:             shadow.onboard(),
            capacity:            shadow.capacity(),
            waiting,
            max_floor:           config.max_floor,
            max_planned_floors:  config.max_planned_floors,
            last_person_arrived: shadow.has_last_person_arrived(),
        }
    }

    /// Queue length per floor; element `i` is floor `i + 1`.
    pub fn waiting_counts(&self) -> Vec<usize> {
        self.waiting.waiting_counts()
    }

    /// `true` if anyone is waiting anywhere in the building.
    pub fn has_waiting(&self) -> bool {
        !self.waiting.is_empty()
    }

    /// Persons waiting at the car's current floor.
    pub fn waiting_here(&self) -> &'a [Person] {
        self.waiting.list_for(self.current_floor)
    }

    /// Floors with at least one waiting person, ascending.
    pub fn floors_with_waiting(&self) -> impl Iterator<Item = Floor> + 'a {
        self.waiting
            .lists()
            .filter(|(_, q)| !q.is_empty())
            .map(|(f, _)| f)
    }

    /// Free places left in the car.
    pub fn room(&self) -> usize {
        self.capacity.saturating_sub(self.onboard.len())
    }
}
