use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadTreeError {
    InvalidBounds {
        nw_x: f32,
        nw_y: f32,
        se_x: f32,
        se_y: f32,
    },
}

pub type QuadTreeResult<T> = Result<T, QuadTreeError>;

impl fmt::Display for QuadTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadTreeError::InvalidBounds {
                nw_x,
                nw_y,
                se_x,
                se_y,
            } => {
                write!(
                    f,
                    "tree bounds must be finite with nw strictly less than se on both axes (nw_x: {}, nw_y: {}, se_x: {}, se_y: {})",
                    nw_x, nw_y, se_x, se_y
                )
            }
        }
    }
}

impl std::error::Error for QuadTreeError {}
