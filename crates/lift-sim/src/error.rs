use lift_building::BuildingError;
use lift_core::{CoreError, ElevatorId};
use lift_strategy::StrategyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Building(#[from] BuildingError),

    #[error("strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("{what} length {got} does not match elevator count {expected}")]
    ElevatorCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("event for unknown elevator {0}")]
    UnknownElevator(ElevatorId),

    #[error("{0} has no planned floor to travel to")]
    NoPlannedFloor(ElevatorId),

    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

pub type SimResult<T> = Result<T, SimError>;
