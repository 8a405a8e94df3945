pub mod cell;
pub mod wall_grid;

pub use cell::{Cell, Walls};
pub use wall_grid::WallGrid;

pub const DEFAULT_DIMS: (usize, usize) = (25, 25);

/// `(x, y)` coordinates of a cell, `x` grows to the right and `y` grows down.
pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl Direction {
    /// Canonical scan order used for every neighbor lookup.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
    ];

    /// Steps one cell from `pos` in this direction, `None` when that would
    /// underflow. Upper bounds are the caller's problem.
    pub fn offset(self, (x, y): Position) -> Option<Position> {
        match self {
            Direction::Left => x.checked_sub(1).map(|x| (x, y)),
            Direction::Top => y.checked_sub(1).map(|y| (x, y)),
            Direction::Right => Some((x + 1, y)),
            Direction::Bottom => Some((x, y + 1)),
        }
    }

    #[inline]
    pub(crate) fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
        }
    }
}

pub type Neighbor = (Direction, Position);

/// In-bounds neighbors of a cell, yielded in `Direction::ALL` order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neighborhood {
    pub left: Option<Position>,
    pub top: Option<Position>,
    pub right: Option<Position>,
    pub bottom: Option<Position>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Left => self.left,
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
        }
    }

    pub fn set(&mut self, dir: Direction, pos: Option<Position>) {
        match dir {
            Direction::Left => self.left = pos,
            Direction::Top => self.top = pos,
            Direction::Right => self.right = pos,
            Direction::Bottom => self.bottom = pos,
        }
    }
}

impl Iterator for Neighborhood {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let dir = Direction::ALL[self.counter];
            self.counter += 1;
            if let Some(pos) = self.get(dir) {
                return Some((dir, pos));
            }
        }
        None
    }
}
