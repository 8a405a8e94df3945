use crate::grids::{Direction, Position, WallGrid};

const CORNER: char = '+';
const H_WALL: &str = "---";
const V_WALL: char = '|';
const OPEN: &str = "   ";
const UNVISITED: &str = ":::";
const CURSOR: &str = " @ ";

/// Draws the grid as text, one row of corners and horizontal walls above
/// every row of cells. Unvisited cells are shaded and `cursor`, if any, is
/// marked.
pub fn render(grid: &WallGrid, cursor: Option<Position>) -> String {
    let (width, height) = (grid.width(), grid.height());
    let mut out = String::with_capacity((2 * height + 1) * (4 * width + 2));

    for y in 0..height {
        // walls above the row
        for x in 0..width {
            out.push(CORNER);
            out.push_str(if has_wall(grid, x, y, Direction::Top) {
                H_WALL
            } else {
                OPEN
            });
        }
        out.push(CORNER);
        out.push('\n');

        for x in 0..width {
            out.push(if has_wall(grid, x, y, Direction::Left) {
                V_WALL
            } else {
                ' '
            });
            out.push_str(interior(grid, x, y, cursor));
        }
        out.push(if has_wall(grid, width - 1, y, Direction::Right) {
            V_WALL
        } else {
            ' '
        });
        out.push('\n');
    }

    for x in 0..width {
        out.push(CORNER);
        out.push_str(if has_wall(grid, x, height - 1, Direction::Bottom) {
            H_WALL
        } else {
            OPEN
        });
    }
    out.push(CORNER);
    out.push('\n');

    out
}

fn has_wall(grid: &WallGrid, x: usize, y: usize, dir: Direction) -> bool {
    grid.cell_at(x, y)
        .map(|cell| cell.has_wall(dir))
        .unwrap_or(true)
}

fn interior(grid: &WallGrid, x: usize, y: usize, cursor: Option<Position>) -> &'static str {
    if cursor == Some((x, y)) {
        return CURSOR;
    }
    match grid.cell_at(x, y) {
        Ok(cell) if cell.visited() => OPEN,
        _ => UNVISITED,
    }
}
