use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    InvalidSize {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    InvalidStart {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidSize { width, height } => {
                write!(f, "invalid grid size {}x{}", width, height)
            }
            MazeError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "cell ({}, {}) is outside of the {}x{} grid",
                x, y, width, height
            ),
            MazeError::InvalidStart {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "start position ({}, {}) is outside of the {}x{} grid",
                x, y, width, height
            ),
        }
    }
}

impl std::error::Error for MazeError {}
