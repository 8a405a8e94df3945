use crate::error::MazeError;
use crate::grids::{Cell, Dimensions, Direction, Neighborhood, Position};

/// Fixed-size grid of walled cells stored row-major in a flat `Vec`.
///
/// Cells are only ever addressed by coordinates, and a wall is only ever
/// removed together with its mirror on the neighboring cell.
#[derive(Debug, Clone)]
pub struct WallGrid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        match width.checked_mul(height) {
            Some(area) if area > 0 => {}
            _ => return Err(MazeError::InvalidSize { width, height }),
        }

        Ok(Self::filled(Dimensions { width, height }))
    }

    fn filled(dims: Dimensions) -> Self {
        let cells = (0..dims.area())
            .map(|index| Cell::new((index % dims.width, index / dims.width)))
            .collect();
        Self { dims, cells }
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.dims.contains(x, y)
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        (self.dims.width * y) + x
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, MazeError> {
        if !self.contains(x, y) {
            return Err(MazeError::OutOfBounds {
                x,
                y,
                width: self.dims.width,
                height: self.dims.height,
            });
        }
        Ok(self.index_of(x, y))
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, MazeError> {
        let index = self.checked_index(x, y)?;
        Ok(&self.cells[index])
    }

    /// In-bounds neighbors of `(x, y)`, paired with the direction leading to
    /// them, in Left, Top, Right, Bottom order.
    pub fn neighbors_of(&self, x: usize, y: usize) -> Result<Vec<(Direction, &Cell)>, MazeError> {
        self.checked_index(x, y)?;
        Ok(self.neighbors((x, y)).collect())
    }

    // `pos` must be inside the grid
    fn neighborhood(&self, pos: Position) -> Neighborhood {
        let mut neighbors = Neighborhood::new();
        for dir in Direction::ALL.iter().copied() {
            let next = dir.offset(pos).filter(|&(nx, ny)| self.contains(nx, ny));
            neighbors.set(dir, next);
        }
        neighbors
    }

    /// Unchecked form of `neighbors_of` for positions already known to be in
    /// the grid.
    pub(crate) fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Direction, &Cell)> {
        self.neighborhood(pos)
            .map(move |(dir, (nx, ny))| (dir, &self.cells[self.index_of(nx, ny)]))
    }

    /// Removes the wall on `from` facing `dir` and the mirrored wall on the
    /// neighbor. Returns the neighbor's position, or `None` when `dir` points
    /// out of the grid.
    pub(crate) fn clear_wall_between(&mut self, from: Position, dir: Direction) -> Option<Position> {
        if !self.contains(from.0, from.1) {
            return None;
        }
        let to = dir.offset(from).filter(|&(x, y)| self.contains(x, y))?;

        let index_from = self.index_of(from.0, from.1);
        let index_to = self.index_of(to.0, to.1);
        self.cells[index_from].carve(dir);
        self.cells[index_to].carve(-dir);

        Some(to)
    }

    pub(crate) fn visit(&mut self, (x, y): Position) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let index = self.index_of(x, y);
        self.cells[index].visit();
        true
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of carved passages between neighboring cells. Every passage is
    /// counted once, via its Right or Bottom side.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                let (x, y) = cell.position();
                let right = x + 1 < self.dims.width && !cell.has_wall(Direction::Right);
                let bottom = y + 1 < self.dims.height && !cell.has_wall(Direction::Bottom);
                right as usize + bottom as usize
            })
            .sum()
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited()).count()
    }
}
