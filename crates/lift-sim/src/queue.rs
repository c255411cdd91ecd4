//! `EventQueue`: sparse time-ordered queue of pending elevator events.
//!
//! Elevators spend most of a day travelling or with doors cycling, so most
//! ticks have nothing due.  The queue is keyed by due time and only the
//! entries for the current tick are touched.  Events sharing a due time keep
//! their insertion order.

use std::collections::BTreeMap;

use lift_core::{ElevatorId, SimTime};

use crate::Event;

/// Maps due times to the events due at that time.
#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<SimTime, Vec<Event>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `at`.
    pub fn push(&mut self, at: SimTime, event: Event) {
        self.inner.entry(at).or_default().push(event);
        self.total += 1;
    }

    /// Remove and return every event due at or before `now`, oldest first.
    ///
    /// Returns `None` when nothing is due (the common case).
    pub fn drain_due(&mut self, now: SimTime) -> Option<Vec<Event>> {
        let mut due: Option<Vec<Event>> = None;
        while let Some(entry) = self.inner.first_entry() {
            if *entry.key() > now {
                break;
            }
            let events = entry.remove();
            self.total -= events.len();
            due.get_or_insert_with(Vec::new).extend(events);
        }
        due
    }

    /// The earliest due time, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Number of pending events for `elevator`.
    pub fn pending_for(&self, elevator: ElevatorId) -> usize {
        self.inner
            .values()
            .flatten()
            .filter(|e| e.elevator == elevator)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SimTime, &Event)> + '_ {
        self.inner
            .iter()
            .flat_map(|(&t, events)| events.iter().map(move |e| (t, e)))
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
