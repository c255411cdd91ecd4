//! Nearest-call-first dispatching.

use lift_core::Floor;

use crate::{Strategy, StrategyView};

/// Greedy strategy that always serves whatever is closest.
///
/// - With passengers onboard: their destinations, nearest first.
/// - Otherwise, with people waiting at the current floor: their
///   destinations, nearest first.
/// - Otherwise: the nearest floor where someone waits.
/// - Otherwise: stay.
///
/// Distance ties go to the lower floor.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestCallStrategy;

impl NearestCallStrategy {
    fn nearest_first(current: Floor, floors: impl IntoIterator<Item = Floor>) -> Vec<Floor> {
        let mut out: Vec<Floor> = floors.into_iter().collect();
        out.sort_unstable_by_key(|&f| (f.abs_diff(current), f));
        out.dedup();
        out
    }
}

impl Strategy for NearestCallStrategy {
    fn choose_next_floors(&mut self, view: &StrategyView<'_>) -> Vec<Floor> {
        let current = view.current_floor;

        let mut plan = if !view.onboard.is_empty() {
            Self::nearest_first(current, view.onboard.iter().map(|p| p.destination()))
        } else if !view.waiting_here().is_empty() {
            Self::nearest_first(current, view.waiting_here().iter().map(|p| p.destination()))
        } else {
            Self::nearest_first(current, view.floors_with_waiting())
                .into_iter()
                .take(1)
                .collect()
        };

        if plan.is_empty() {
            return vec![current];
        }
        plan.truncate(view.max_planned_floors.max(1));
        plan
    }
}
