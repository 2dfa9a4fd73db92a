use std::fmt;

use crate::grid::{CompassPrimary, Grid, GridCoordinate};
use crate::maze::Maze;
use crate::units::ColumnsCount;

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::from("   ")
    }
}

/// Empty cell bodies.
#[derive(Debug, Copy, Clone)]
pub struct BlankDisplay;
impl GridDisplay for BlankDisplay {}

/// Marks the carving start with `S` and the goal with `G`.
#[derive(Debug, Copy, Clone)]
pub struct StartGoalDisplay {
    start: GridCoordinate,
    goal: GridCoordinate,
}

impl StartGoalDisplay {
    pub fn new(start: GridCoordinate, goal: GridCoordinate) -> StartGoalDisplay {
        StartGoalDisplay { start, goal }
    }
}

impl GridDisplay for StartGoalDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.start {
            String::from(" S ")
        } else if coord == self.goal {
            String::from(" G ")
        } else {
            String::from("   ")
        }
    }
}

/// Draw the grid with ASCII walls, e.g. a carved 2x2 grid:
///
/// ```text
/// +---+---+
/// |       |
/// +---+   +
/// |       |
/// +---+---+
/// ```
pub fn render_text(grid: &Grid, display: &dyn GridDisplay) -> String {
    const CORNER: &str = "+";
    const WALL_LR_3: &str = "---";
    const OPEN_3: &str = "   ";
    const WALL_UD: &str = "|";
    const OPEN_1: &str = " ";

    let ColumnsCount(columns_count) = grid.columns();
    let mut output = String::new();

    // North boundary
    for _ in 0..columns_count {
        output.push_str(CORNER);
        output.push_str(WALL_LR_3);
    }
    output.push_str(CORNER);
    output.push('\n');

    let coordinates = grid.iter().collect::<Vec<_>>();
    for row in coordinates.chunks(columns_count) {

        output.push_str(WALL_UD);
        for coord in row {
            output.push_str(&display.render_cell_body(*coord));
            if grid.is_neighbour_linked(*coord, CompassPrimary::East) {
                output.push_str(OPEN_1);
            } else {
                output.push_str(WALL_UD);
            }
        }
        output.push('\n');

        for coord in row {
            output.push_str(CORNER);
            if grid.is_neighbour_linked(*coord, CompassPrimary::South) {
                output.push_str(OPEN_3);
            } else {
                output.push_str(WALL_LR_3);
            }
        }
        output.push_str(CORNER);
        output.push('\n');
    }

    output
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self, &BlankDisplay))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let markers = StartGoalDisplay::new(self.start(), self.goal());
        write!(f, "{}", render_text(self.grid(), &markers))
    }
}
