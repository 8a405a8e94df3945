use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MazeError;
use crate::generators::{Generator, StepResult};
use crate::grids::{Neighbor, Position, WallGrid};

/// Randomized depth-first ("recursive backtracker") maze generator.
///
/// The stack holds the active path from the start cell to the current head.
/// Each call to [`step`](MazeGenerator::step) either carves into one
/// unvisited neighbor of the head or drops the head, so the finished grid is
/// a spanning tree of passages.
#[derive(Debug)]
pub struct MazeGenerator<R> {
    grid: WallGrid,
    stack: Vec<Position>,
    rng: R,
    steps: usize,
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(width: usize, height: usize, start: Position, rng: R) -> Result<Self, MazeError> {
        let mut grid = WallGrid::new(width, height)?;

        let (x, y) = start;
        if !grid.contains(x, y) {
            return Err(MazeError::InvalidStart {
                x,
                y,
                width,
                height,
            });
        }
        grid.visit(start);

        debug!(
            "backtracker on {}x{} grid starting at ({}, {})",
            width, height, x, y
        );

        Ok(Self {
            grid,
            stack: vec![start],
            rng,
            steps: 0,
        })
    }

    pub fn step(&mut self) -> StepResult {
        let current = match self.stack.last() {
            Some(&current) => current,
            None => return StepResult::Done,
        };

        let unvisited = self.unvisited_neighbors(current);
        let (direction, to) = match unvisited.choose(&mut self.rng) {
            Some(&neighbor) => neighbor,
            None => {
                self.stack.pop();
                self.steps += 1;
                if self.stack.is_empty() {
                    info!(
                        "maze complete after {} steps, {} passages carved",
                        self.steps,
                        self.grid.passage_count()
                    );
                    return StepResult::Done;
                }
                trace!("backtracked from {:?}", current);
                return StepResult::Backtracked;
            }
        };

        self.grid.clear_wall_between(current, direction);
        self.grid.visit(to);
        self.stack.push(to);
        self.steps += 1;
        trace!("carved {:?} from {:?} to {:?}", direction, current, to);

        StepResult::Carved {
            from: current,
            to,
            direction,
        }
    }

    /// Steps until the maze is finished and returns the grid.
    pub fn run_to_completion(&mut self) -> &WallGrid {
        while self.step() != StepResult::Done {}
        &self.grid
    }

    // only called with positions taken off the stack, which all came from the grid
    fn unvisited_neighbors(&self, pos: Position) -> Vec<Neighbor> {
        self.grid
            .neighbors(pos)
            .filter(|(_, cell)| !cell.visited())
            .map(|(dir, cell)| (dir, cell.position()))
            .collect()
    }
}

impl<R> MazeGenerator<R> {
    #[inline]
    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    /// Head of the traversal, `None` once generation is done.
    #[inline]
    pub fn current(&self) -> Option<Position> {
        self.stack.last().copied()
    }

    /// Length of the active path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Steps that changed the generator, including the final pop that
    /// empties the stack and reports `Done`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }
}

impl<R: Rng> Generator for MazeGenerator<R> {
    fn step_generation(&mut self) -> StepResult {
        self.step()
    }

    fn generate_maze(&mut self) -> &WallGrid {
        self.run_to_completion()
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }

    fn current(&self) -> Option<Position> {
        self.stack.last().copied()
    }

    fn steps(&self) -> usize {
        self.steps
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grids::{Direction, Walls};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    fn seeded(width: usize, height: usize, start: Position, seed: u64) -> MazeGenerator<StdRng> {
        MazeGenerator::new(width, height, start, StdRng::seed_from_u64(seed)).unwrap()
    }

    fn assert_walls_symmetric(grid: &WallGrid) {
        for cell in grid.cells() {
            let (x, y) = cell.position();
            for (dir, neighbor) in grid.neighbors_of(x, y).unwrap() {
                assert_eq!(
                    cell.has_wall(dir),
                    neighbor.has_wall(-dir),
                    "wall {:?} of {:?} disagrees with {:?}",
                    dir,
                    cell.position(),
                    neighbor.position()
                );
            }
        }
    }

    fn reachable_through_passages(grid: &WallGrid, start: Position) -> usize {
        let mut seen = vec![false; grid.dims().area()];
        let mut queue = VecDeque::new();
        seen[start.1 * grid.width() + start.0] = true;
        queue.push_back(start);
        let mut count = 0;

        while let Some((x, y)) = queue.pop_front() {
            count += 1;
            let cell = grid.cell_at(x, y).unwrap();
            for (dir, neighbor) in grid.neighbors_of(x, y).unwrap() {
                let (nx, ny) = neighbor.position();
                if !cell.has_wall(dir) && !seen[ny * grid.width() + nx] {
                    seen[ny * grid.width() + nx] = true;
                    queue.push_back((nx, ny));
                }
            }
        }
        count
    }

    fn assert_perfect(grid: &WallGrid) {
        let area = grid.dims().area();
        assert!(grid.cells().all(|c| c.visited()));
        assert_eq!(grid.visited_count(), area);
        assert_eq!(grid.passage_count(), area - 1);
        assert_eq!(reachable_through_passages(grid, (0, 0)), area);
        assert_walls_symmetric(grid);
    }

    #[test]
    fn single_cell_is_done_immediately() {
        let mut generator = seeded(1, 1, (0, 0), 0);
        assert_eq!(generator.step(), StepResult::Done);
        assert_eq!(generator.step(), StepResult::Done);
        let cell = generator.grid().cell_at(0, 0).unwrap();
        assert!(cell.visited());
        assert_eq!(cell.walls(), Walls::ALL);
    }

    #[test]
    fn two_cells_carve_then_backtrack_then_finish() {
        let mut generator = seeded(2, 1, (0, 0), 0);
        assert_eq!(
            generator.step(),
            StepResult::Carved {
                from: (0, 0),
                to: (1, 0),
                direction: Direction::Right,
            }
        );
        assert_eq!(generator.current(), Some((1, 0)));
        assert_eq!(generator.depth(), 2);
        assert_eq!(generator.step(), StepResult::Backtracked);
        assert_eq!(generator.step(), StepResult::Done);
        assert!(generator.is_done());
        assert_eq!(generator.current(), None);

        let grid = generator.grid();
        assert!(!grid.cell_at(0, 0).unwrap().has_wall(Direction::Right));
        assert!(!grid.cell_at(1, 0).unwrap().has_wall(Direction::Left));
    }

    #[test]
    fn start_outside_grid_is_rejected() {
        let err = MazeGenerator::new(3, 3, (3, 1), StdRng::seed_from_u64(0))
            .err()
            .unwrap();
        assert_eq!(
            err,
            MazeError::InvalidStart {
                x: 3,
                y: 1,
                width: 3,
                height: 3
            }
        );
    }

    #[test]
    fn invalid_size_wins_over_start() {
        let err = MazeGenerator::new(0, 3, (0, 0), StdRng::seed_from_u64(0))
            .err()
            .unwrap();
        assert_eq!(err, MazeError::InvalidSize { width: 0, height: 3 });
    }

    #[test]
    fn start_cell_is_visited_on_construction() {
        let generator = seeded(4, 4, (2, 3), 1);
        assert!(generator.grid().cell_at(2, 3).unwrap().visited());
        assert_eq!(generator.grid().visited_count(), 1);
        assert_eq!(generator.current(), Some((2, 3)));
        assert!(!generator.is_done());
    }

    #[test]
    fn walls_stay_symmetric_after_every_step() {
        let mut generator = seeded(6, 6, (3, 2), 7);
        loop {
            let result = generator.step();
            assert_walls_symmetric(generator.grid());
            if result == StepResult::Done {
                break;
            }
        }
    }

    #[test]
    fn carve_moves_into_an_unvisited_neighbor() {
        let mut generator = seeded(5, 5, (0, 0), 3);
        let mut carved = 0;
        loop {
            let before = generator.grid().visited_count();
            match generator.step() {
                StepResult::Carved {
                    from,
                    to,
                    direction,
                } => {
                    assert_eq!(direction.offset(from), Some(to));
                    assert_eq!(generator.grid().visited_count(), before + 1);
                    assert_eq!(generator.current(), Some(to));
                    carved += 1;
                }
                StepResult::Backtracked => {
                    assert_eq!(generator.grid().visited_count(), before);
                }
                StepResult::Done => break,
            }
        }
        assert_eq!(carved, 24);
    }

    #[test]
    fn completed_mazes_are_spanning_trees() {
        for size in 2..=12 {
            for seed in 0..4 {
                let start = ((seed as usize * 5) % size, (seed as usize * 3) % size);
                let mut generator = seeded(size, size, start, seed);
                assert_perfect(generator.run_to_completion());
            }
        }
    }

    #[test]
    fn rectangular_grids_are_spanning_trees() {
        let mut generator = seeded(9, 3, (8, 2), 11);
        assert_perfect(generator.run_to_completion());

        let mut generator = seeded(1, 7, (0, 3), 11);
        assert_perfect(generator.run_to_completion());
    }

    #[test]
    fn done_is_idempotent() {
        let mut generator = seeded(4, 4, (0, 0), 5);
        generator.run_to_completion();
        let steps = generator.steps();
        let snapshot: Vec<(Walls, bool)> = generator
            .grid()
            .cells()
            .map(|c| (c.walls(), c.visited()))
            .collect();

        for _ in 0..3 {
            assert_eq!(generator.step(), StepResult::Done);
        }
        let after: Vec<(Walls, bool)> = generator
            .grid()
            .cells()
            .map(|c| (c.walls(), c.visited()))
            .collect();
        assert_eq!(snapshot, after);
        assert_eq!(generator.steps(), steps);
    }

    fn run_results(generator: &mut MazeGenerator<StdRng>) -> Vec<StepResult> {
        let mut results = Vec::new();
        loop {
            let result = generator.step();
            results.push(result);
            if result == StepResult::Done {
                return results;
            }
        }
    }

    #[test]
    fn first_carve_direction_depends_on_seed() {
        let mut seen = Vec::new();
        for seed in 0..64 {
            match seeded(3, 3, (1, 1), seed).step() {
                StepResult::Carved { direction, .. } => {
                    if !seen.contains(&direction) {
                        seen.push(direction);
                    }
                }
                other => panic!("expected a carve from the center, got {:?}", other),
            }
        }
        for dir in Direction::ALL.iter() {
            assert!(seen.contains(dir), "{:?} was never chosen first", dir);
        }
    }

    #[test]
    fn different_seeds_different_sequences() {
        let one = run_results(&mut seeded(10, 10, (0, 0), 1));
        let two = run_results(&mut seeded(10, 10, (0, 0), 2));
        assert_eq!(one.len(), two.len());
        assert_ne!(one, two);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut one = seeded(10, 10, (4, 4), 1234);
        let mut two = seeded(10, 10, (4, 4), 1234);
        let mut results = Vec::new();
        loop {
            let result = one.step();
            assert_eq!(result, two.step());
            results.push(result);
            if result == StepResult::Done {
                break;
            }
        }
        // one carve and one pop per cell, the last pop reported as Done
        assert_eq!(results.len(), 2 * 100 - 1);
    }

    #[test]
    fn generator_trait_drives_to_completion() {
        let mut generator: Box<dyn Generator> = Box::new(seeded(5, 5, (0, 0), 9));
        assert!(!generator.is_done());
        assert_eq!(generator.generate_maze().passage_count(), 24);
        assert!(generator.is_done());
        assert_eq!(generator.step_generation(), StepResult::Done);
    }
}
