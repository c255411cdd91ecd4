//! Plain data row types written by output backends.

use lift_core::{ElevatorId, Floor, PersonId, SimTime};
use lift_sim::Event;

/// One fired elevator event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub time:     SimTime,
    pub elevator: ElevatorId,
    pub event:    &'static str,
    /// Floor the event happens at; the destination for `ArrivesAtFloor`.
    pub floor:    Floor,
    /// Persons loaded or unloaded; empty for other events.
    pub people:   Vec<PersonId>,
}

impl EventRow {
    pub fn from_event(time: SimTime, event: &Event) -> Self {
        Self {
            time,
            elevator: event.elevator,
            event:    event.name(),
            floor:    event.floor(),
            people:   event.people().to_vec(),
        }
    }

    /// Person ids joined by spaces, e.g. `"3 7 12"`.
    pub fn people_field(&self) -> String {
        self.people
            .iter()
            .map(|p| p.0.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One person joining a floor queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalRow {
    pub time:        SimTime,
    pub person:      PersonId,
    pub name:        String,
    pub floor:       Floor,
    pub destination: Floor,
}
