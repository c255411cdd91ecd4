//! Direction of travel implied by a planned-floor list.

use std::fmt;

use lift_core::Floor;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    /// Direction from `current` toward the head of `planned`.
    ///
    /// `Stop` when nothing is planned or the head is the current floor.
    pub fn between(current: Floor, planned: &[Floor]) -> Direction {
        match planned.first() {
            None => Direction::Stop,
            Some(&next) if next > current => Direction::Up,
            Some(&next) if next < current => Direction::Down,
            Some(_) => Direction::Stop,
        }
    }

    #[inline]
    pub fn is_stop(self) -> bool {
        self == Direction::Stop
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up   => "UP",
            Direction::Down => "DOWN",
            Direction::Stop => "STOP",
        })
    }
}
