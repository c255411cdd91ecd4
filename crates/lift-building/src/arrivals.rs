//! `ArrivalGenerator`: where new callers come from.
//!
//! The simulation loop asks the generator for at most one new person per
//! tick, after that tick's elevator events, for as long as arrivals are
//! allowed.  The generator decides whether someone shows up, on which floor,
//! and where they are going.
//!
//! # Provided generators
//!
//! | Type                | Behavior                                              |
//! |---------------------|-------------------------------------------------------|
//! | [`NoArrivals`]      | Never produces anyone                                 |
//! | [`ScheduledArrivals`] | Replays a fixed list of timed calls                 |
//! | [`AffluenceArrivals`] | Working-day probability model driven by an [`AffluenceTable`] |

use std::collections::{BTreeMap, VecDeque};

use lift_core::{Floor, Person, PersonId, SimRng, SimTime};
use tracing::trace;

use crate::{BuildingError, BuildingResult};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// A person who just called an elevator, and the floor they called from.
#[derive(Debug, PartialEq, Eq)]
pub struct Arrival {
    pub floor:  Floor,
    pub person: Person,
}

/// Source of new callers.
///
/// # Contract
///
/// - Called at most once per tick, with a non-decreasing `now`.
/// - Must be deterministic given its construction inputs (seeded RNG, fixed
///   lists).
/// - The returned person must carry `id`; the engine allocates ids.
pub trait ArrivalGenerator {
    /// Return the person arriving at `now`, if any.
    fn next_arrival(&mut self, now: SimTime, id: PersonId) -> Option<Arrival>;
}

impl<G: ArrivalGenerator + ?Sized> ArrivalGenerator for Box<G> {
    fn next_arrival(&mut self, now: SimTime, id: PersonId) -> Option<Arrival> {
        (**self).next_arrival(now, id)
    }
}

// ── No-op ─────────────────────────────────────────────────────────────────────

/// A generator that never produces anyone.
///
/// Use it when the whole scenario is in the initial waiting list.
pub struct NoArrivals;

impl ArrivalGenerator for NoArrivals {
    #[inline]
    fn next_arrival(&mut self, _now: SimTime, _id: PersonId) -> Option<Arrival> {
        None
    }
}

// ── Scheduled ─────────────────────────────────────────────────────────────────

/// One timed call: `name` calls from `floor` at `time`, going to `destination`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledCall {
    pub time:        SimTime,
    pub floor:       Floor,
    pub name:        String,
    pub destination: Floor,
}

impl ScheduledCall {
    pub fn into_person(self, id: PersonId) -> Person {
        Person::new(id, self.time, self.name, self.destination)
    }
}

/// Replays a fixed list of calls.
///
/// A call is released on the first tick at or after its time on which the
/// generator is asked; one call per request, in time order (ties keep input
/// order).  The person's arrival time is the scheduled time.
pub struct ScheduledArrivals {
    pending: VecDeque<ScheduledCall>,
}

impl ScheduledArrivals {
    pub fn new(mut calls: Vec<ScheduledCall>) -> Self {
        calls.sort_by_key(|c| c.time);
        Self { pending: calls.into() }
    }

    /// Calls not yet released.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl ArrivalGenerator for ScheduledArrivals {
    fn next_arrival(&mut self, now: SimTime, id: PersonId) -> Option<Arrival> {
        if self.pending.front()?.time > now {
            return None;
        }
        let call = self.pending.pop_front()?;
        let floor = call.floor;
        Some(Arrival { floor, person: call.into_person(id) })
    }
}

// ── Affluence model ───────────────────────────────────────────────────────────

/// Affluence values are divided by this to get a per-tick call probability.
const ADJUSTMENT_COEFFICIENT: f64 = 10.0;

/// Before this time most calls come from the ground floor.
const MORNING_END: SimTime = SimTime::from_hms(10, 30, 0);
/// After this time most calls come from upper floors, heading down.
const EVENING_START: SimTime = SimTime::from_hms(16, 30, 0);

const P_MORNING_FROM_GROUND: f64 = 0.8;
const P_EVENING_FROM_UPPER:  f64 = 0.9;
const P_EVENING_TO_GROUND:   f64 = 0.9;

/// Step function from time of day to affluence.
///
/// The affluence in force at `t` is the value of the latest point at or
/// before `t`; before the first point it is zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AffluenceTable {
    points: BTreeMap<SimTime, f64>,
}

impl AffluenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(time, affluence)` points.  A repeated time keeps the
    /// first value.
    pub fn from_points(points: impl IntoIterator<Item = (SimTime, f64)>) -> Self {
        let mut table = Self::new();
        for (t, a) in points {
            table.points.entry(t).or_insert(a);
        }
        table
    }

    /// Built-in office-building profile: morning and evening peaks, a lunch
    /// bump, quiet nights.
    pub fn working_day() -> Self {
        Self::from_points([
            (SimTime::from_hms(6, 0, 0),   0.2),
            (SimTime::from_hms(7, 30, 0),  0.8),
            (SimTime::from_hms(8, 30, 0),  1.5),
            (SimTime::from_hms(9, 30, 0),  0.8),
            (SimTime::from_hms(10, 30, 0), 0.3),
            (SimTime::from_hms(12, 0, 0),  1.0),
            (SimTime::from_hms(14, 0, 0),  0.3),
            (SimTime::from_hms(16, 30, 0), 0.8),
            (SimTime::from_hms(17, 30, 0), 1.5),
            (SimTime::from_hms(18, 30, 0), 0.8),
            (SimTime::from_hms(20, 0, 0),  0.2),
            (SimTime::from_hms(22, 30, 0), 0.0),
        ])
    }

    pub fn affluence_at(&self, t: SimTime) -> f64 {
        self.points
            .range(..=t)
            .next_back()
            .map_or(0.0, |(_, &a)| a)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The working-day traffic model.
///
/// Each request draws a call with probability `affluence(now) / 10`.  When a
/// call happens:
///
/// - before 10:30, the caller is on the ground floor 80 % of the time, on a
///   uniformly drawn floor otherwise;
/// - after 16:30, the caller is on an upper floor 90 % of the time, and an
///   upper-floor caller heads to the ground floor 90 % of the time;
/// - otherwise origin and destination are uniform, destination ≠ origin.
///
/// The caller's name is drawn uniformly from the name list.
pub struct AffluenceArrivals {
    table:     AffluenceTable,
    names:     Vec<String>,
    max_floor: Floor,
    rng:       SimRng,
}

impl AffluenceArrivals {
    /// `rng` should be a dedicated child stream of the run's root RNG.
    pub fn new(
        table:     AffluenceTable,
        names:     Vec<String>,
        max_floor: Floor,
        rng:       SimRng,
    ) -> BuildingResult<Self> {
        if names.is_empty() {
            return Err(BuildingError::Config("name list is empty".into()));
        }
        if max_floor < 2 {
            return Err(BuildingError::Config(format!(
                "affluence model needs at least 2 floors, got {max_floor}"
            )));
        }
        Ok(Self { table, names, max_floor, rng })
    }

    fn uniform_floor(&mut self) -> Floor {
        self.rng.gen_range(1..=self.max_floor)
    }

    fn pick_origin(&mut self, now: SimTime) -> Floor {
        if now < MORNING_END {
            if self.rng.gen_bool(P_MORNING_FROM_GROUND) {
                1
            } else {
                self.uniform_floor()
            }
        } else if now > EVENING_START {
            if self.rng.gen_bool(P_EVENING_FROM_UPPER) {
                self.rng.gen_range(2..=self.max_floor)
            } else {
                self.uniform_floor()
            }
        } else {
            self.uniform_floor()
        }
    }

    fn pick_destination(&mut self, now: SimTime, origin: Floor) -> Floor {
        if now > EVENING_START && origin != 1 && self.rng.gen_bool(P_EVENING_TO_GROUND) {
            return 1;
        }
        // Uniform over every floor except `origin`.
        let f = self.rng.gen_range(1..self.max_floor);
        if f >= origin { f + 1 } else { f }
    }
}

impl ArrivalGenerator for AffluenceArrivals {
    fn next_arrival(&mut self, now: SimTime, id: PersonId) -> Option<Arrival> {
        let p = self.table.affluence_at(now) / ADJUSTMENT_COEFFICIENT;
        if !self.rng.gen_bool(p) {
            return None;
        }
        let floor = self.pick_origin(now);
        let destination = self.pick_destination(now, floor);
        let name = self.rng.choose(&self.names)?.clone();
        trace!(%now, floor, destination, %name, "affluence call");
        Some(Arrival { floor, person: Person::new(id, now, name, destination) })
    }
}
