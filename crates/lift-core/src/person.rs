//! The `Person` value type.

use std::fmt;

use crate::{Floor, PersonId, SimTime};

/// Someone who called an elevator.
///
/// Immutable once created.  At any instant a `Person` is owned by exactly one
/// floor queue or by exactly one elevator's onboard set; ownership moves
/// between them by value, so the type is not `Clone`.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id:           PersonId,
    arrival_time: SimTime,
    name:         String,
    destination:  Floor,
}

impl Person {
    pub fn new(id: PersonId, arrival_time: SimTime, name: impl Into<String>, destination: Floor) -> Self {
        Self { id, arrival_time, name: name.into(), destination }
    }

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// When the person called the elevator.
    #[inline]
    pub fn arrival_time(&self) -> SimTime {
        self.arrival_time
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn destination(&self) -> Floor {
        self.destination
    }

    /// Seconds between the call and `now`; zero if `now` is earlier.
    #[inline]
    pub fn waited_secs(&self, now: SimTime) -> u32 {
        now.0.saturating_sub(self.arrival_time.0)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} arrived at {} going to {}", self.name, self.arrival_time, self.destination)
    }
}
