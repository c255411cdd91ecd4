//! Top-level simulation configuration.

use crate::{CoreError, CoreResult, Floor, SimClock, SimTime, TICK_SECS};

/// Top-level simulation configuration.
///
/// Holds every building constant and the bounds of the simulated day.
/// Typically built with `SimConfig::default()` and adjusted field by field,
/// or loaded from a JSON file by the application crate (`serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct SimConfig {
    /// Highest floor number.  Floors are `1..=max_floor`.
    pub max_floor: Floor,

    /// Maximum number of floors a strategy may return in one decision.
    pub max_planned_floors: usize,

    /// Maximum number of persons onboard one car.
    pub elevator_capacity: usize,

    /// Maximum number of persons boarding or alighting in one loading event.
    /// Independent of `elevator_capacity`.
    pub loading_capacity: usize,

    /// Time of the first tick; every elevator starts at this time.
    pub start_time: SimTime,

    /// No person arrives at or after this time.  Reaching it raises the
    /// "last person arrived" signal on every elevator.
    pub arrivals_end: SimTime,

    /// Hard upper bound on simulated time.
    pub end_of_day: SimTime,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Starting floor of each elevator, in registration order.  The length
    /// of this list is the number of elevators.
    pub starting_floors: Vec<Floor>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_floor:          10,
            max_planned_floors: 10,
            elevator_capacity:  15,
            loading_capacity:   3,
            start_time:         SimTime::from_hms(6, 0, 0),
            arrivals_end:       SimTime::from_hms(22, 30, 0),
            end_of_day:         SimTime::from_hms(23, 30, 0),
            seed:               10,
            starting_floors:    vec![1, 1],
        }
    }
}

impl SimConfig {
    /// Number of elevators in the building.
    #[inline]
    pub fn elevator_count(&self) -> usize {
        self.starting_floors.len()
    }

    /// `true` if `floor` exists in this building.
    #[inline]
    pub fn is_valid_floor(&self, floor: Floor) -> bool {
        (1..=self.max_floor).contains(&floor)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_time)
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        let fail = |msg: String| Err(CoreError::Config(msg));

        if self.max_floor == 0 {
            return fail("max_floor must be at least 1".into());
        }
        if self.max_planned_floors == 0 {
            return fail("max_planned_floors must be at least 1".into());
        }
        if self.elevator_capacity == 0 {
            return fail("elevator_capacity must be at least 1".into());
        }
        if self.loading_capacity == 0 {
            return fail("loading_capacity must be at least 1".into());
        }
        if self.start_time >= self.end_of_day {
            return fail(format!(
                "start_time {} must be before end_of_day {}",
                self.start_time, self.end_of_day
            ));
        }
        for (what, t) in [
            ("start_time", self.start_time),
            ("arrivals_end", self.arrivals_end),
            ("end_of_day", self.end_of_day),
        ] {
            if !t.is_tick_aligned() {
                return fail(format!("{what} {t} is not a multiple of {TICK_SECS} s"));
            }
        }
        if self.starting_floors.is_empty() {
            return fail("at least one elevator is required".into());
        }
        if let Some(&bad) = self.starting_floors.iter().find(|&&f| !self.is_valid_floor(f)) {
            return fail(format!("starting floor {bad} outside 1..={}", self.max_floor));
        }
        Ok(())
    }
}
