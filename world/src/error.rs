use std::fmt;

use quadtree::QuadTreeError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldError {
    InvalidBounds(QuadTreeError),
    PopulationExhausted { max: usize },
}

pub type WorldResult<T> = Result<T, WorldError>;

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::InvalidBounds(err) => write!(f, "invalid world bounds: {}", err),
            WorldError::PopulationExhausted { max } => {
                write!(f, "population limit of {} creatures reached", max)
            }
        }
    }
}

impl std::error::Error for WorldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorldError::InvalidBounds(err) => Some(err),
            WorldError::PopulationExhausted { .. } => None,
        }
    }
}
