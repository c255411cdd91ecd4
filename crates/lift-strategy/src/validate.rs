//! Checks applied to every floor list a strategy returns.

use lift_core::{ElevatorId, Floor};

use crate::{StrategyError, StrategyResult};

/// Reject empty lists, floors outside `1..=max_floor`, and lists longer than
/// `max_planned`.  Never clamps.
pub fn validate_floors(
    elevator:    ElevatorId,
    floors:      &[Floor],
    max_floor:   Floor,
    max_planned: usize,
) -> StrategyResult<()> {
    if floors.is_empty() {
        return Err(StrategyError::Empty { elevator });
    }
    if floors.len() > max_planned {
        return Err(StrategyError::TooManyFloors { elevator, got: floors.len(), max: max_planned });
    }
    if let Some(&floor) = floors.iter().find(|&&f| f == 0 || f > max_floor) {
        return Err(StrategyError::FloorOutOfRange { elevator, floor, max: max_floor });
    }
    Ok(())
}
