//! `WaitingList`: per-floor queues of persons waiting for an elevator.
//!
//! # Ownership
//!
//! Each queue owns its `Person`s.  Loading moves them out by value (into an
//! elevator's onboard set), so a person is never in two places at once and a
//! removed person cannot be claimed a second time.
//!
//! # Ordering
//!
//! Every queue keeps insertion order, which is also arrival order: the
//! earliest caller is considered first by loading and by arbitration.
//! Removal rebuilds the queue rather than mutating it while it is iterated.

use lift_core::{Floor, Person, PersonId};

use crate::arrivals::ScheduledCall;
use crate::{BuildingError, BuildingResult};

/// Per-floor FIFO queues of waiting persons, indexed by `floor - 1`.
#[derive(Debug, Default)]
pub struct WaitingList {
    floors: Vec<Vec<Person>>,
}

impl WaitingList {
    /// An empty waiting list for floors `1..=max_floor`.
    pub fn new(max_floor: Floor) -> Self {
        Self {
            floors: (0..max_floor).map(|_| Vec::new()).collect(),
        }
    }

    /// Build a waiting list pre-populated with `calls`, in order.
    ///
    /// Persons are given `PersonId`s `0, 1, 2, …` in call order.
    pub fn with_calls(max_floor: Floor, calls: Vec<ScheduledCall>) -> BuildingResult<Self> {
        let mut list = Self::new(max_floor);
        let mut id = PersonId(0);
        for call in calls {
            let floor = call.floor;
            list.add(floor, call.into_person(id))?;
            id = id.next();
        }
        Ok(list)
    }

    /// Highest floor served by this list.
    #[inline]
    pub fn max_floor(&self) -> Floor {
        self.floors.len() as Floor
    }

    fn slot(&self, floor: Floor) -> BuildingResult<usize> {
        if floor == 0 || floor > self.max_floor() {
            return Err(BuildingError::FloorOutOfRange { floor, max: self.max_floor() });
        }
        Ok((floor - 1) as usize)
    }

    /// Append `person` to the back of `floor`'s queue.
    ///
    /// Both the calling floor and the person's destination must exist.
    pub fn add(&mut self, floor: Floor, person: Person) -> BuildingResult<()> {
        let idx = self.slot(floor)?;
        self.slot(person.destination())?;
        self.floors[idx].push(person);
        Ok(())
    }

    /// Persons waiting at `floor`, earliest first.  Empty for unknown floors.
    pub fn list_for(&self, floor: Floor) -> &[Person] {
        match self.slot(floor) {
            Ok(idx) => &self.floors[idx],
            Err(_) => &[],
        }
    }

    /// `(floor, queue)` pairs for every floor, ground floor first.
    pub fn lists(&self) -> impl Iterator<Item = (Floor, &[Person])> + '_ {
        self.floors
            .iter()
            .enumerate()
            .map(|(i, q)| (i as Floor + 1, q.as_slice()))
    }

    /// Queue length per floor; element `i` is floor `i + 1`.
    pub fn waiting_counts(&self) -> Vec<usize> {
        self.floors.iter().map(Vec::len).collect()
    }

    /// Total number of waiting persons across all floors.
    pub fn count_people(&self) -> usize {
        self.floors.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.iter().all(Vec::is_empty)
    }

    /// Highest `PersonId` currently queued, if any.
    pub fn max_person_id(&self) -> Option<PersonId> {
        self.floors.iter().flatten().map(Person::id).max()
    }

    /// `true` if someone at `floor` wants to go to one of `planned`.
    pub fn has_loadable(&self, floor: Floor, planned: &[Floor]) -> bool {
        self.list_for(floor)
            .iter()
            .any(|p| planned.contains(&p.destination()))
    }

    /// Remove and return up to `limit` persons at `floor` whose destination
    /// is in `planned`, in queue order.  Everyone else keeps their place.
    pub fn take_loadable(&mut self, floor: Floor, planned: &[Floor], limit: usize) -> Vec<Person> {
        let Ok(idx) = self.slot(floor) else {
            return Vec::new();
        };
        let queue = &mut self.floors[idx];
        if limit == 0 || queue.is_empty() {
            return Vec::new();
        }

        let mut taken = Vec::new();
        let mut kept = Vec::with_capacity(queue.len());
        for person in queue.drain(..) {
            if taken.len() < limit && planned.contains(&person.destination()) {
                taken.push(person);
            } else {
                kept.push(person);
            }
        }
        *queue = kept;
        taken
    }

    /// Remove one specific person from `floor`'s queue.
    ///
    /// Returns `None` if that person is not waiting there.
    pub fn remove_person(&mut self, floor: Floor, id: PersonId) -> Option<Person> {
        let idx = self.slot(floor).ok()?;
        let queue = &mut self.floors[idx];
        let pos = queue.iter().position(|p| p.id() == id)?;
        Some(queue.remove(pos))
    }
}
