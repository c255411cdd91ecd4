//! Collective up/down sweep.

use std::collections::BTreeSet;

use lift_core::Floor;
use tracing::trace;

use crate::{Direction, Strategy, StrategyView};

/// Classic collective control.
///
/// The car keeps going in its current direction while there are calls or
/// onboard destinations ahead of it, and reverses once there are none.  A
/// stop is any floor where someone is waiting, any onboard destination, and
/// the destination of anyone waiting at the current floor (so they become
/// loadable).
///
/// The plan lists every stop ahead in travel order, followed by the stops
/// behind in return order, truncated to `view.max_planned_floors`.
#[derive(Clone, Debug)]
pub struct SweepStrategy {
    direction: Direction,
}

impl SweepStrategy {
    pub fn new() -> Self {
        Self { direction: Direction::Stop }
    }

    /// Direction taken by the last decision.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn stops(view: &StrategyView<'_>) -> BTreeSet<Floor> {
        let mut stops: BTreeSet<Floor> = view.onboard.iter().map(|p| p.destination()).collect();
        stops.extend(view.floors_with_waiting());
        stops.extend(view.waiting_here().iter().map(|p| p.destination()));
        stops.remove(&view.current_floor);
        stops
    }
}

impl Default for SweepStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for SweepStrategy {
    fn choose_next_floors(&mut self, view: &StrategyView<'_>) -> Vec<Floor> {
        let current = view.current_floor;
        let stops = Self::stops(view);
        let above: Vec<Floor> = stops.range(current + 1..).copied().collect();
        let below: Vec<Floor> = stops.range(..current).rev().copied().collect();

        let next = match self.direction {
            Direction::Up if !above.is_empty() => Direction::Up,
            Direction::Up if !below.is_empty() => Direction::Down,
            Direction::Down if !below.is_empty() => Direction::Down,
            Direction::Down if !above.is_empty() => Direction::Up,
            Direction::Stop if !below.is_empty() => Direction::Down,
            Direction::Stop if !above.is_empty() => Direction::Up,
            _ => Direction::Stop,
        };
        if next != self.direction {
            trace!(elevator = %view.elevator, from = %self.direction, to = %next, "sweep direction change");
        }
        self.direction = next;

        let mut plan: Vec<Floor> = match next {
            Direction::Up   => above.into_iter().chain(below).collect(),
            Direction::Down => below.into_iter().chain(above).collect(),
            Direction::Stop => return vec![current],
        };
        plan.truncate(view.max_planned_floors.max(1));
        plan
    }
}
