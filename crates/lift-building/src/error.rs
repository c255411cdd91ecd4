use lift_core::{CoreError, Floor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildingError {
    #[error("floor {floor} outside 1..={max}")]
    FloorOutOfRange { floor: Floor, max: Floor },

    #[error("building configuration error: {0}")]
    Config(String),

    #[error("building data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type BuildingResult<T> = Result<T, BuildingError>;
