//! `ShadowElevator`: the authoritative physical state of one car.
//!
//! Strategies keep whatever bookkeeping they like; the engine and the
//! statistics only ever trust the shadow.  It is mutated exclusively by the
//! event transitions in `lift-sim`.

use lift_core::{ElevatorId, Floor, Person, PersonId};

use crate::WaitingList;

/// Ground-truth state of one elevator car.
#[derive(Debug)]
pub struct ShadowElevator {
    id:                  ElevatorId,
    capacity:            usize,
    loading_capacity:    usize,
    current_floor:       Floor,
    planned:             Vec<Floor>,
    onboard:             Vec<Person>,
    last_person_arrived: bool,
    stopped:             bool,

    loaded_count:   u64,
    unloaded_count: u64,
    max_load:       usize,
}

impl ShadowElevator {
    pub fn new(id: ElevatorId, capacity: usize, loading_capacity: usize, floor: Floor) -> Self {
        Self {
            id,
            capacity,
            loading_capacity,
            current_floor:       floor,
            planned:             Vec::new(),
            onboard:             Vec::new(),
            last_person_arrived: false,
            stopped:             false,
            loaded_count:        0,
            unloaded_count:      0,
            max_load:            0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn loading_capacity(&self) -> usize {
        self.loading_capacity
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    /// Upcoming stops.  The head is the floor the car is travelling toward
    /// or stationed at.
    #[inline]
    pub fn planned_floors(&self) -> &[Floor] {
        &self.planned
    }

    #[inline]
    pub fn next_floor(&self) -> Option<Floor> {
        self.planned.first().copied()
    }

    #[inline]
    pub fn onboard(&self) -> &[Person] {
        &self.onboard
    }

    #[inline]
    pub fn onboard_count(&self) -> usize {
        self.onboard.len()
    }

    /// Free places left in the car.
    #[inline]
    pub fn room(&self) -> usize {
        self.capacity.saturating_sub(self.onboard.len())
    }

    pub fn loaded_count(&self) -> u64 {
        self.loaded_count
    }

    pub fn unloaded_count(&self) -> u64 {
        self.unloaded_count
    }

    /// Largest number of persons ever onboard at the same time.
    pub fn max_load(&self) -> usize {
        self.max_load
    }

    // ── Movement ──────────────────────────────────────────────────────────

    pub fn starts_at_floor(&mut self, floor: Floor) {
        self.current_floor = floor;
    }

    /// Arrive at `floor` and drop the head of the planned sequence.
    pub fn move_to(&mut self, floor: Floor) {
        self.current_floor = floor;
        if !self.planned.is_empty() {
            self.planned.remove(0);
        }
    }

    pub fn set_planned_floors(&mut self, floors: Vec<Floor>) {
        self.planned = floors;
    }

    // ── Passengers ────────────────────────────────────────────────────────

    /// Put `people` onboard.
    pub fn board(&mut self, people: Vec<Person>) {
        debug_assert!(
            self.onboard.len() + people.len() <= self.capacity,
            "{}: boarding {} with {} onboard exceeds capacity {}",
            self.id,
            people.len(),
            self.onboard.len(),
            self.capacity,
        );
        self.loaded_count += people.len() as u64;
        self.onboard.extend(people);
        self.max_load = self.max_load.max(self.onboard.len());
    }

    /// Take the persons with the given ids out of the car.
    ///
    /// Ids that are not onboard are ignored.
    pub fn unload(&mut self, ids: &[PersonId]) -> Vec<Person> {
        let mut out = Vec::with_capacity(ids.len());
        let mut kept = Vec::with_capacity(self.onboard.len());
        for person in self.onboard.drain(..) {
            if ids.contains(&person.id()) {
                out.push(person);
            } else {
                kept.push(person);
            }
        }
        self.onboard = kept;
        self.unloaded_count += out.len() as u64;
        out
    }

    /// Onboard persons whose destination is the current floor, capped at the
    /// per-event loading capacity.
    pub fn next_people_to_unload(&self) -> Vec<PersonId> {
        self.onboard
            .iter()
            .filter(|p| p.destination() == self.current_floor)
            .take(self.loading_capacity)
            .map(Person::id)
            .collect()
    }

    pub fn has_people_to_unload(&self) -> bool {
        self.onboard.iter().any(|p| p.destination() == self.current_floor)
    }

    /// Dequeue the persons this car can load at its current floor.
    ///
    /// Only persons heading to a planned floor qualify; the batch is capped
    /// by the free room and by the loading capacity.  The persons leave the
    /// waiting list in the same call, so no other car can claim them.
    pub fn next_people_to_load(&self, waiting: &mut WaitingList) -> Vec<Person> {
        let limit = self.room().min(self.loading_capacity);
        waiting.take_loadable(self.current_floor, &self.planned, limit)
    }

    /// Non-mutating counterpart of [`next_people_to_load`][Self::next_people_to_load].
    pub fn has_next_people_to_load(&self, waiting: &WaitingList) -> bool {
        self.room() > 0 && waiting.has_loadable(self.current_floor, &self.planned)
    }

    pub fn is_anyone_waiting_at_current_floor(&self, waiting: &WaitingList) -> bool {
        !waiting.list_for(self.current_floor).is_empty()
    }

    // ── Lifecycle flags ───────────────────────────────────────────────────

    /// Record that no more persons will arrive today.
    pub fn last_person_arrived(&mut self) {
        self.last_person_arrived = true;
    }

    pub fn has_last_person_arrived(&self) -> bool {
        self.last_person_arrived
    }

    /// Terminal: the car will not be scheduled again.
    pub fn stopping(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }
}
