//! A strategy that never moves.

use lift_core::Floor;

use crate::{Strategy, StrategyView};

/// A [`Strategy`] that always stays at the current floor.
///
/// Useful as a placeholder in tests or for a car that is out of service:
/// it stands by until the arrivals cutoff, then stops.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleStrategy;

impl Strategy for IdleStrategy {
    #[inline]
    fn choose_next_floors(&mut self, view: &StrategyView<'_>) -> Vec<Floor> {
        vec![view.current_floor]
    }
}
