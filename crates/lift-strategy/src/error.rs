use lift_core::{ElevatorId, Floor};
use thiserror::Error;

/// A strategy returned a floor list the engine cannot follow.
///
/// Always fatal: a strategy that plans impossible moves cannot be trusted to
/// keep driving a car.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("{elevator}: strategy returned an empty floor list")]
    Empty { elevator: ElevatorId },

    #[error("{elevator}: strategy returned floor {floor} outside 1..={max}")]
    FloorOutOfRange {
        elevator: ElevatorId,
        floor:    Floor,
        max:      Floor,
    },

    #[error("{elevator}: strategy returned {got} floors, at most {max} allowed")]
    TooManyFloors {
        elevator: ElevatorId,
        got:      usize,
        max:      usize,
    },
}

pub type StrategyResult<T> = Result<T, StrategyError>;
