use crate::grids::{Direction, Position};

/// Bitset of the walls still standing around a cell, one bit per `Direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls(u8);

impl Walls {
    pub const ALL: Walls = Walls(0b1111);
    pub const NONE: Walls = Walls(0);

    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    #[inline]
    pub fn remove(&mut self, dir: Direction) -> bool {
        let had = self.contains(dir);
        self.0 &= !dir.bit();
        had
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Standing walls in `Direction::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .iter()
            .copied()
            .filter(move |dir| self.contains(*dir))
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    position: Position,
    visited: bool,
    walls: Walls,
}

impl Cell {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            visited: false,
            walls: Walls::ALL,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Walls that have not been carved yet.
    #[inline]
    pub fn walls(&self) -> Walls {
        self.walls
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.contains(dir)
    }

    // only ever goes false -> true
    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }

    pub(crate) fn carve(&mut self, dir: Direction) -> bool {
        self.walls.remove(dir)
    }
}
