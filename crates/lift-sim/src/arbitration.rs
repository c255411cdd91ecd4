//! `LoadingArbiter`: resolves the tick's loading attempts.
//!
//! All attempts produced in one tick are resolved together, after every
//! fired event has been transitioned.  Attempts are grouped by floor, floors
//! in ascending order, and within a floor by ascending elevator id.
//!
//! - A lone car at a floor takes every queued person heading to one of its
//!   planned floors, in queue order, up to its free room and its per-event
//!   loading capacity.
//! - When several cars attempt at the same floor, each waiting person (queue
//!   order) is offered to the cars whose plan contains their destination:
//!
//!   1. keep cars that still have room, counting persons already assigned
//!      this tick, and have not reached their loading capacity;
//!   2. keep cars where the destination comes earliest in the plan;
//!   3. keep the least loaded cars;
//!   4. draw uniformly among what is left.
//!
//! Either way a person is removed from the floor queue as they are assigned,
//! so nobody boards two cars.
//!
//! A car that gets nobody leaves: it closes its doors if they were open,
//! otherwise it departs straight for the head of its plan.

use std::collections::BTreeMap;

use lift_building::{ShadowElevator, WaitingList};
use lift_core::{ElevatorId, Floor, Person, PersonId, SimRng, SimTime};
use tracing::{debug, trace};

use crate::{Event, EventKind, SimError, SimResult};

/// One pending loading attempt.
struct Attempt {
    elevator:   ElevatorId,
    floor:      Floor,
    planned:    Vec<Floor>,
    first:      bool,
    doors_open: bool,
}

impl Attempt {
    fn from_event(event: Event) -> SimResult<Self> {
        match event.kind {
            EventKind::AttemptToLoadFirst { floor, planned, doors_open } => Ok(Self {
                elevator: event.elevator,
                floor,
                planned,
                first: true,
                doors_open,
            }),
            EventKind::AttemptToLoadNext { floor, planned } => Ok(Self {
                elevator: event.elevator,
                floor,
                planned,
                first: false,
                doors_open: true,
            }),
            _ => Err(SimError::Invariant(format!(
                "{} is not a loading attempt",
                event.name()
            ))),
        }
    }
}

/// Owns the RNG stream used for the final tie-break.
pub struct LoadingArbiter {
    rng: SimRng,
}

impl LoadingArbiter {
    pub fn new(rng: SimRng) -> Self {
        Self { rng }
    }

    /// Resolve `attempts` and return each car's next event, in floor then
    /// elevator order.
    pub fn resolve(
        &mut self,
        now:      SimTime,
        attempts: Vec<Event>,
        shadows:  &mut [ShadowElevator],
        waiting:  &mut WaitingList,
    ) -> SimResult<Vec<Event>> {
        let mut by_floor: BTreeMap<Floor, Vec<Attempt>> = BTreeMap::new();
        for event in attempts {
            let attempt = Attempt::from_event(event)?;
            if shadows.get(attempt.elevator.index()).is_none() {
                return Err(SimError::UnknownElevator(attempt.elevator));
            }
            by_floor.entry(attempt.floor).or_default().push(attempt);
        }

        let mut out = Vec::new();
        for (floor, mut group) in by_floor {
            group.sort_by_key(|a| a.elevator);
            let batches = if let [single] = group.as_slice() {
                let shadow = &shadows[single.elevator.index()];
                vec![shadow.next_people_to_load(waiting)]
            } else {
                trace!(%now, floor, cars = group.len(), "contended loading");
                self.contend(now, floor, &group, shadows, waiting)
            };

            for (attempt, people) in group.into_iter().zip(batches) {
                let shadow = &mut shadows[attempt.elevator.index()];
                out.push(settle(attempt, people, shadow)?);
            }
        }
        Ok(out)
    }

    /// Assign the persons waiting at `floor` among several cars.
    fn contend(
        &mut self,
        now:     SimTime,
        floor:   Floor,
        group:   &[Attempt],
        shadows: &[ShadowElevator],
        waiting: &mut WaitingList,
    ) -> Vec<Vec<Person>> {
        let mut pending: Vec<Vec<Person>> = group.iter().map(|_| Vec::new()).collect();
        let queue: Vec<(PersonId, Floor)> = waiting
            .list_for(floor)
            .iter()
            .map(|p| (p.id(), p.destination()))
            .collect();

        for (person, destination) in queue {
            // (slot in `group`, position of destination in plan, onboard count)
            let mut candidates: Vec<(usize, usize, usize)> = group
                .iter()
                .enumerate()
                .filter_map(|(slot, attempt)| {
                    let position = attempt.planned.iter().position(|&f| f == destination)?;
                    let shadow = &shadows[attempt.elevator.index()];
                    let assigned = pending[slot].len();
                    let has_room = shadow.room() > assigned && assigned < shadow.loading_capacity();
                    has_room.then_some((slot, position, shadow.onboard_count()))
                })
                .collect();
            if candidates.is_empty() {
                continue;
            }

            let best_position = candidates.iter().map(|c| c.1).min().unwrap_or(0);
            candidates.retain(|c| c.1 == best_position);
            let least_loaded = candidates.iter().map(|c| c.2).min().unwrap_or(0);
            candidates.retain(|c| c.2 == least_loaded);

            let pick = if candidates.len() == 1 {
                0
            } else {
                self.rng.choose_index(candidates.len()).unwrap_or(0)
            };
            let slot = candidates[pick].0;

            if let Some(p) = waiting.remove_person(floor, person) {
                debug!(
                    %now,
                    floor,
                    person = %person,
                    elevator = %group[slot].elevator,
                    tied = candidates.len(),
                    "assigned"
                );
                pending[slot].push(p);
            }
        }
        pending
    }
}

/// Board `people` and pick the car's next event.
fn settle(attempt: Attempt, people: Vec<Person>, shadow: &mut ShadowElevator) -> SimResult<Event> {
    let floor = attempt.floor;
    let kind = if people.is_empty() {
        let next = shadow.next_floor().ok_or(SimError::NoPlannedFloor(attempt.elevator))?;
        if attempt.doors_open {
            EventKind::DoorClosing { floor, next }
        } else {
            EventKind::ArrivesAtFloor { from: floor, to: next }
        }
    } else {
        if shadow.onboard_count() + people.len() > shadow.capacity() {
            return Err(SimError::Invariant(format!(
                "{}: boarding {} would exceed capacity {}",
                attempt.elevator,
                people.len(),
                shadow.capacity()
            )));
        }
        let ids: Vec<PersonId> = people.iter().map(Person::id).collect();
        shadow.board(people);
        if attempt.first {
            EventKind::LoadingFirst { floor, people: ids }
        } else {
            EventKind::LoadingNext { floor, people: ids }
        }
    };
    Ok(Event::new(attempt.elevator, kind))
}
