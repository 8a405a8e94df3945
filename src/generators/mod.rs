pub mod backtracker;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::MazeError;
use crate::grids::{Direction, Position, WallGrid, DEFAULT_DIMS};
use backtracker::MazeGenerator;

/// Outcome of a single generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// A wall was removed between `from` and `to`; `to` is the new head of
    /// the traversal.
    Carved {
        from: Position,
        to: Position,
        direction: Direction,
    },
    /// The head had no unvisited neighbors and was dropped from the path.
    Backtracked,
    /// Generation is complete. Further steps change nothing.
    Done,
}

pub trait Generator {
    fn step_generation(&mut self) -> StepResult;
    fn generate_maze(&mut self) -> &WallGrid;
    fn grid(&self) -> &WallGrid;
    /// Cell the generator is working on, if any.
    fn current(&self) -> Option<Position>;
    fn steps(&self) -> usize;
    fn is_done(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub start: Position,
    /// Fixed seed for reproducible mazes; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMS.0,
            height: DEFAULT_DIMS.1,
            start: (0, 0),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn square(size: usize) -> Self {
        Self {
            width: size,
            height: size,
            ..Self::default()
        }
    }

    pub fn build(&self) -> Result<MazeGenerator<StdRng>, MazeError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        MazeGenerator::new(self.width, self.height, self.start, rng)
    }
}
