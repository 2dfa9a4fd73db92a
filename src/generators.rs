use rand::Rng;
use tracing::{debug, trace};

use crate::grid::{CompassPrimary, Grid, GridCoordinate};
use crate::shuffle::shuffle;
use crate::units::{ColumnsCount, RowsCount};

/// A uniformly random cell on the grid. The row is drawn before the column.
pub fn random_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> GridCoordinate {
    let (RowsCount(rows), ColumnsCount(columns)) = (grid.rows(), grid.columns());
    let row = rng.gen_range(0..rows);
    let column = rng.gen_range(0..columns);
    GridCoordinate::new(row, column)
}

/// Apply the recursive backtracker maze generation algorithm to a grid, returning the random
/// cell the carving started from.
///
/// A depth first walk from a random cell. Each newly entered cell is marked visited and its four
/// neighbours (north, east, south, west) are tried in a freshly shuffled order. A neighbour that
/// is on the grid and not yet visited has the wall between it and the current cell opened and
/// becomes the current cell. When every neighbour of a cell is used up we backtrack to the cell
/// we came from. Since a wall is only ever opened into an unvisited cell the passages form a
/// spanning tree: a perfect maze.
///
/// The backtracking uses an explicit stack rather than the call stack, so very large grids are
/// fine. The stack frames are entered in exactly the order a recursive walk would enter them, so
/// the random draws, and therefore the maze for a given rng, match the recursive formulation.
pub fn recursive_backtracker<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> GridCoordinate {
    let start = random_cell(grid, rng);
    carve_passages_from(grid, start, rng);
    start
}

/// Carve passages depth first from `start` into every reachable unvisited cell.
/// Does nothing if `start` is already visited.
pub fn carve_passages_from<R: Rng + ?Sized>(grid: &mut Grid, start: GridCoordinate, rng: &mut R) {
    if grid.is_visited(start) {
        return;
    }

    let mut stack = vec![enter_cell(grid, start, rng)];
    let mut deepest = stack.len();

    while let Some(frame) = stack.last_mut() {
        let direction = match frame.next_direction() {
            Some(dir) => dir,
            None => {
                // Dead end, backtrack.
                let _ = stack.pop();
                continue;
            }
        };
        let cell = frame.cell;

        let neighbour = match grid.neighbour_at_direction(cell, direction) {
            Some(coord) => coord,
            None => continue,
        };
        if grid.is_visited(neighbour) {
            continue;
        }

        if let Some(slot) = grid.wall_between(cell, direction) {
            trace!(?cell, ?direction, ?slot, "opening wall");
            grid.open_wall(slot);
        }

        stack.push(enter_cell(grid, neighbour, rng));
        deepest = deepest.max(stack.len());
    }

    debug!(rows = grid.rows().0,
           columns = grid.columns().0,
           ?start,
           visited = grid.visited_count(),
           open_walls = grid.open_walls_count(),
           deepest,
           "carved maze");
}

fn enter_cell<R: Rng + ?Sized>(grid: &mut Grid, cell: GridCoordinate, rng: &mut R) -> CarveFrame {
    grid.mark_visited(cell);
    let mut directions = CompassPrimary::ALL;
    shuffle(&mut directions, rng);
    CarveFrame {
        cell,
        directions,
        next: 0,
    }
}

/// A cell on the backtracking stack and the neighbour directions it has still to try.
#[derive(Debug)]
struct CarveFrame {
    cell: GridCoordinate,
    directions: [CompassPrimary; 4],
    next: usize,
}

impl CarveFrame {
    fn next_direction(&mut self) -> Option<CompassPrimary> {
        let direction = self.directions.get(self.next).cloned();
        if direction.is_some() {
            self.next += 1;
        }
        direction
    }
}
