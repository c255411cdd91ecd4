//! Simulation time model.
//!
//! # Design
//!
//! Time is a time-of-day: whole seconds since midnight, stored in a `u32`.
//! The simulation advances in fixed quanta of [`TICK_SECS`] seconds; every
//! service duration in the engine is a multiple of the quantum, so events
//! always land exactly on a tick boundary.
//!
//! Using integer seconds means all schedule arithmetic is exact and
//! wait durations (`unload time - arrival time`) need no rounding.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Length of one simulated tick, in seconds.
pub const TICK_SECS: u32 = 3;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// A simulated time of day, in seconds since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct SimTime(pub u32);

impl SimTime {
    pub const MIDNIGHT: SimTime = SimTime(0);

    /// Build a time from hours, minutes and seconds.
    #[inline]
    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> SimTime {
        SimTime(hours * 3_600 + minutes * 60 + seconds)
    }

    /// Split into `(hours, minutes, seconds)`.
    pub fn hms(self) -> (u32, u32, u32) {
        (self.0 / 3_600, (self.0 % 3_600) / 60, self.0 % 60)
    }

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u32 {
        self.0 - earlier.0
    }

    /// `true` if this time falls exactly on a tick boundary.
    #[inline]
    pub fn is_tick_aligned(self) -> bool {
        self.0.is_multiple_of(TICK_SECS)
    }
}

impl std::ops::Add<u32> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u32) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: SimTime) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl FromStr for SimTime {
    type Err = CoreError;

    /// Parse `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CoreError::Parse(format!("invalid time {s:?}: expected HH:MM or HH:MM:SS"));

        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(bad());
        }
        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| bad())?;
        }
        let [h, m, sec] = fields;
        if h > 23 || m > 59 || sec > 59 {
            return Err(bad());
        }
        Ok(SimTime::from_hms(h, m, sec))
    }
}

impl TryFrom<String> for SimTime {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SimTime> for String {
    fn from(t: SimTime) -> String {
        t.to_string()
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock.  Starts at the configured start of day and advances
/// by one tick per loop iteration.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug)]
pub struct SimClock {
    /// Time of the first tick.
    pub start: SimTime,
    /// The current time.  Advanced by `SimClock::advance()` each iteration.
    pub now: SimTime,
}

impl SimClock {
    pub fn new(start: SimTime) -> Self {
        Self { start, now: start }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.now = self.now + TICK_SECS;
    }

    /// Simulated seconds since the start of the run.
    #[inline]
    pub fn elapsed_secs(&self) -> u32 {
        self.now.since(self.start)
    }

    /// Number of ticks processed so far.
    #[inline]
    pub fn ticks_elapsed(&self) -> u32 {
        self.elapsed_secs() / TICK_SECS
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (tick {})", self.now, self.ticks_elapsed())
    }
}
