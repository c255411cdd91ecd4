//! Elevator events and their durations.
//!
//! Every elevator always has exactly one event pending in the queue until it
//! stops for the day.  An event is due `duration` seconds after the event
//! that produced it fired: travel time precedes `ArrivesAtFloor`, door time
//! precedes `DoorOpening`, and so on.
//!
//! | Event                  | Duration (s)                    |
//! |------------------------|---------------------------------|
//! | `ElevatorStarts`       | 0                               |
//! | `ArrivesAtFloor`       | [`compute_duration`]`(from, to)` |
//! | `DoorOpening`          | 3                               |
//! | `DoorClosing`          | 3                               |
//! | `LoadingFirst`         | 9                               |
//! | `LoadingNext`          | 6                               |
//! | `UnloadingFirst`       | 9                               |
//! | `UnloadingNext`        | 6                               |
//! | `StandByAtFloor`       | 3                               |
//! | `StoppingAtFloor`      | 3                               |
//! | `AttemptToLoadFirst`   | 0 (resolved within the tick)    |
//! | `AttemptToLoadNext`    | 0 (resolved within the tick)    |

use std::fmt;

use lift_core::{ElevatorId, Floor, PersonId};

pub const DOOR_OPENING_SECS:    u32 = 3;
pub const DOOR_CLOSING_SECS:    u32 = 3;
pub const LOADING_FIRST_SECS:   u32 = 9;
pub const LOADING_NEXT_SECS:    u32 = 6;
pub const UNLOADING_FIRST_SECS: u32 = 9;
pub const UNLOADING_NEXT_SECS:  u32 = 6;
pub const STAND_BY_SECS:        u32 = 3;
pub const STOPPING_SECS:        u32 = 3;

/// Travel time in seconds between two floors.
///
/// | Distance | Seconds              |
/// |----------|----------------------|
/// | 0        | 0                    |
/// | 1        | 18                   |
/// | 2        | 24                   |
/// | 3        | 30                   |
/// | d > 3    | 36 + (d − 3) · 3     |
///
/// Symmetric in its arguments.  Every value is a multiple of the tick.
pub fn compute_duration(from: Floor, to: Floor) -> u32 {
    match from.abs_diff(to) {
        0 => 0,
        1 => 18,
        2 => 24,
        3 => 30,
        d => 36 + (d - 3) * 3,
    }
}

/// What happens to an elevator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    ElevatorStarts     { floor: Floor },
    ArrivesAtFloor     { from: Floor, to: Floor },
    DoorOpening        { floor: Floor },
    DoorClosing        { floor: Floor, next: Floor },
    LoadingFirst       { floor: Floor, people: Vec<PersonId> },
    LoadingNext        { floor: Floor, people: Vec<PersonId> },
    UnloadingFirst     { floor: Floor, people: Vec<PersonId> },
    UnloadingNext      { floor: Floor, people: Vec<PersonId> },
    StandByAtFloor     { floor: Floor },
    StoppingAtFloor    { floor: Floor },
    /// Transient: the car wants to load before leaving `floor`.
    ///
    /// `doors_open` is `false` only for the very first leg of the day, when
    /// the car has not opened its doors yet.
    AttemptToLoadFirst { floor: Floor, planned: Vec<Floor>, doors_open: bool },
    /// Transient: the car has loaded a batch and may load more.
    AttemptToLoadNext  { floor: Floor, planned: Vec<Floor> },
}

/// One scheduled event for one elevator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub elevator: ElevatorId,
    pub kind:     EventKind,
}

impl Event {
    #[inline]
    pub fn new(elevator: ElevatorId, kind: EventKind) -> Self {
        Self { elevator, kind }
    }

    /// Seconds between the producing event and this one.
    pub fn duration(&self) -> u32 {
        match &self.kind {
            EventKind::ElevatorStarts { .. }     => 0,
            EventKind::ArrivesAtFloor { from, to } => compute_duration(*from, *to),
            EventKind::DoorOpening { .. }        => DOOR_OPENING_SECS,
            EventKind::DoorClosing { .. }        => DOOR_CLOSING_SECS,
            EventKind::LoadingFirst { .. }       => LOADING_FIRST_SECS,
            EventKind::LoadingNext { .. }        => LOADING_NEXT_SECS,
            EventKind::UnloadingFirst { .. }     => UNLOADING_FIRST_SECS,
            EventKind::UnloadingNext { .. }      => UNLOADING_NEXT_SECS,
            EventKind::StandByAtFloor { .. }     => STAND_BY_SECS,
            EventKind::StoppingAtFloor { .. }    => STOPPING_SECS,
            EventKind::AttemptToLoadFirst { .. }
            | EventKind::AttemptToLoadNext { .. } => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match &self.kind {
            EventKind::ElevatorStarts { .. }     => "ElevatorStarts",
            EventKind::ArrivesAtFloor { .. }     => "ArrivesAtFloor",
            EventKind::DoorOpening { .. }        => "DoorOpening",
            EventKind::DoorClosing { .. }        => "DoorClosing",
            EventKind::LoadingFirst { .. }       => "LoadingFirst",
            EventKind::LoadingNext { .. }        => "LoadingNext",
            EventKind::UnloadingFirst { .. }     => "UnloadingFirst",
            EventKind::UnloadingNext { .. }      => "UnloadingNext",
            EventKind::StandByAtFloor { .. }     => "StandByAtFloor",
            EventKind::StoppingAtFloor { .. }    => "StoppingAtFloor",
            EventKind::AttemptToLoadFirst { .. } => "AttemptToLoadFirst",
            EventKind::AttemptToLoadNext { .. }  => "AttemptToLoadNext",
        }
    }

    /// The floor the event happens at.  For `ArrivesAtFloor` this is the
    /// destination.
    pub fn floor(&self) -> Floor {
        match &self.kind {
            EventKind::ElevatorStarts { floor }
            | EventKind::DoorOpening { floor }
            | EventKind::DoorClosing { floor, .. }
            | EventKind::LoadingFirst { floor, .. }
            | EventKind::LoadingNext { floor, .. }
            | EventKind::UnloadingFirst { floor, .. }
            | EventKind::UnloadingNext { floor, .. }
            | EventKind::StandByAtFloor { floor }
            | EventKind::StoppingAtFloor { floor }
            | EventKind::AttemptToLoadFirst { floor, .. }
            | EventKind::AttemptToLoadNext { floor, .. } => *floor,
            EventKind::ArrivesAtFloor { to, .. } => *to,
        }
    }

    /// Persons moved by a loading or unloading event; empty otherwise.
    pub fn people(&self) -> &[PersonId] {
        match &self.kind {
            EventKind::LoadingFirst { people, .. }
            | EventKind::LoadingNext { people, .. }
            | EventKind::UnloadingFirst { people, .. }
            | EventKind::UnloadingNext { people, .. } => people,
            _ => &[],
        }
    }

    /// `true` for the transient loading attempts resolved by the
    /// [`LoadingArbiter`][crate::LoadingArbiter].
    #[inline]
    pub fn is_attempt(&self) -> bool {
        matches!(
            self.kind,
            EventKind::AttemptToLoadFirst { .. } | EventKind::AttemptToLoadNext { .. }
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EventKind::ArrivesAtFloor { from, to } => {
                write!(f, "{} {} {from} -> {to}", self.elevator, self.name())
            }
            _ => write!(f, "{} {} at {}", self.elevator, self.name(), self.floor()),
        }
    }
}
