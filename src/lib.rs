pub mod error;
pub mod generators;
pub mod grids;
pub mod presenter;
pub mod renderer;

pub use error::MazeError;
pub use generators::backtracker::MazeGenerator;
pub use generators::{Generator, GeneratorConfig, StepResult};
pub use grids::{Cell, Dimensions, Direction, Position, WallGrid, Walls};
pub use presenter::{FrameClock, Presenter};
