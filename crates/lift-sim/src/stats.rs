//! Run statistics and the end-of-run report.

use std::fmt;

use lift_building::{BucketCount, DurationHistogram, ShadowElevator, WaitingList};
use lift_core::{ElevatorId, Floor, Person, SimTime};

/// Counters accumulated while the simulation runs.
#[derive(Clone, Debug, Default)]
pub struct SimStats {
    /// Persons that entered the system (initial waiting list included).
    pub generated: u64,
    /// Persons delivered to their destination.
    pub transported: u64,
    /// Elevator events processed, attempts excluded.
    pub events_processed: u64,
    /// Time of the last tick that processed an event.
    pub last_event_time: Option<SimTime>,
    /// Waits (arrival to unload) of transported persons, in seconds.
    pub waits: DurationHistogram,
}

impl SimStats {
    /// Record that `person` left the system at `now`.
    pub fn record_trip(&mut self, now: SimTime, person: &Person) {
        self.transported += 1;
        self.waits.record(person.waited_secs(now));
    }
}

/// End-of-run summary for one elevator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElevatorReport {
    pub id:           ElevatorId,
    pub final_floor:  Floor,
    pub loaded:       u64,
    pub unloaded:     u64,
    pub left_onboard: usize,
    pub max_load:     usize,
    pub stopped:      bool,
}

impl ElevatorReport {
    pub fn from_shadow(shadow: &ShadowElevator) -> Self {
        Self {
            id:           shadow.id(),
            final_floor:  shadow.current_floor(),
            loaded:       shadow.loaded_count(),
            unloaded:     shadow.unloaded_count(),
            left_onboard: shadow.onboard_count(),
            max_load:     shadow.max_load(),
            stopped:      shadow.is_stopped(),
        }
    }
}

/// Everything a run produced, as returned by [`Sim::run`][crate::Sim::run].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimReport {
    pub end_time:        SimTime,
    pub last_event_time: Option<SimTime>,
    pub generated:       u64,
    pub transported:     u64,
    /// Persons still queued on a floor when the run ended.
    pub left_waiting:    usize,
    pub elevators:       Vec<ElevatorReport>,
    pub waits:           DurationHistogram,
}

impl SimReport {
    pub fn new(
        end_time: SimTime,
        stats:    &SimStats,
        shadows:  &[ShadowElevator],
        waiting:  &WaitingList,
    ) -> Self {
        Self {
            end_time,
            last_event_time: stats.last_event_time,
            generated:       stats.generated,
            transported:     stats.transported,
            left_waiting:    waiting.count_people(),
            elevators:       shadows.iter().map(ElevatorReport::from_shadow).collect(),
            waits:           stats.waits.clone(),
        }
    }

    /// Persons still inside a car when the run ended.
    pub fn left_onboard(&self) -> usize {
        self.elevators.iter().map(|e| e.left_onboard).sum()
    }

    /// `true` if every elevator reached its stopping state.
    pub fn all_stopped(&self) -> bool {
        self.elevators.iter().all(|e| e.stopped)
    }

    pub fn mean_wait_secs(&self) -> Option<f64> {
        self.waits.mean_secs()
    }

    pub fn max_wait_secs(&self) -> Option<u32> {
        self.waits.max()
    }

    pub fn buckets(&self) -> Vec<BucketCount> {
        self.waits.bucketed()
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "end time:      {}", self.end_time)?;
        writeln!(f, "generated:     {}", self.generated)?;
        writeln!(f, "transported:   {}", self.transported)?;
        writeln!(f, "left waiting:  {}", self.left_waiting)?;
        writeln!(f, "left onboard:  {}", self.left_onboard())?;
        match (self.mean_wait_secs(), self.max_wait_secs()) {
            (Some(mean), Some(max)) => writeln!(f, "wait (s):      mean {mean:.1}, max {max}")?,
            _ => writeln!(f, "wait (s):      n/a")?,
        }
        for e in &self.elevators {
            writeln!(
                f,
                "{}: floor {}, loaded {}, unloaded {}, max load {}, onboard {}{}",
                e.id,
                e.final_floor,
                e.loaded,
                e.unloaded,
                e.max_load,
                e.left_onboard,
                if e.stopped { "" } else { " (still running)" },
            )?;
        }
        writeln!(f, "wait histogram:")?;
        for bucket in self.buckets() {
            writeln!(f, "  {bucket}")?;
        }
        Ok(())
    }
}
