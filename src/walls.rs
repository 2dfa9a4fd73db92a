//! Turning a carved grid into wall geometry for whatever draws the maze or collides with it.
//!
//! All positions are rectangle centres in a space where the maze's top left corner is the origin,
//! x grows to the right and y grows downwards.

use itertools::iproduct;
use serde_derive::Serialize;

use crate::config::{CellSize, MazeConfig};
use crate::errors::*;
use crate::grid::{Grid, GridCoordinate};
use crate::maze::Maze;
use crate::units::{ColumnsCount, RowsCount};

/// Goal marker side as a fraction of the cell side.
pub const GOAL_SCALE: f32 = 0.7;
/// Ball radius as a fraction of the shorter cell side.
pub const BALL_RADIUS_SCALE: f32 = 0.3;

/// An axis aligned wall rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct WallDescriptor {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

/// One descriptor for every wall slot that is still closed.
///
/// Horizontal walls come first, then vertical walls, each in row major order. A horizontal wall
/// under cell `(r, c)` is a `cell width x thickness` bar centred on the bottom edge of that cell;
/// a vertical wall right of `(r, c)` is a `thickness x cell height` bar centred on its right edge.
pub fn closed_walls(grid: &Grid, cell_size: CellSize, thickness: f32) -> Vec<WallDescriptor> {
    let CellSize { width: unit_x, height: unit_y } = cell_size;
    let (RowsCount(rows), ColumnsCount(columns)) = (grid.rows(), grid.columns());

    let horizontals = iproduct!(0..rows - 1, 0..columns)
        .map(GridCoordinate::from)
        .filter(|&coord| !grid.is_horizontal_open(coord))
        .map(|GridCoordinate { row, column }| {
            WallDescriptor {
                center_x: column as f32 * unit_x + unit_x / 2.0,
                center_y: row as f32 * unit_y + unit_y,
                width: unit_x,
                height: thickness,
            }
        });

    let verticals = iproduct!(0..rows, 0..columns - 1)
        .map(GridCoordinate::from)
        .filter(|&coord| !grid.is_vertical_open(coord))
        .map(|GridCoordinate { row, column }| {
            WallDescriptor {
                center_x: column as f32 * unit_x + unit_x,
                center_y: row as f32 * unit_y + unit_y / 2.0,
                width: thickness,
                height: unit_y,
            }
        });

    horizontals.chain(verticals).collect()
}

/// The frame around the whole maze: top, bottom, left, right.
pub fn boundary_walls(rows: RowsCount,
                      columns: ColumnsCount,
                      cell_size: CellSize,
                      thickness: f32)
                      -> [WallDescriptor; 4] {
    let width = columns.0 as f32 * cell_size.width;
    let height = rows.0 as f32 * cell_size.height;
    let bar = |center_x, center_y, width, height| {
        WallDescriptor {
            center_x,
            center_y,
            width,
            height,
        }
    };

    [bar(width / 2.0, 0.0, width, thickness),
     bar(width / 2.0, height, width, thickness),
     bar(0.0, height / 2.0, thickness, height),
     bar(width, height / 2.0, thickness, height)]
}

/// The square the player is trying to reach, centred on the goal cell.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct GoalMarker {
    pub cell: GridCoordinate,
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

/// Where the player's ball is placed, centred on the top left cell.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct BallSpawn {
    pub cell: GridCoordinate,
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

/// Everything a physics or rendering layer needs to build the maze scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MazeLayout {
    pub width: f32,
    pub height: f32,
    pub carve_start: GridCoordinate,
    pub walls: Vec<WallDescriptor>,
    pub boundary: Vec<WallDescriptor>,
    pub goal: GoalMarker,
    pub ball: BallSpawn,
}

impl MazeLayout {
    /// Lay out `maze` with the geometry in `config`. The maze's own dimensions win over the
    /// dimensions in `config`.
    pub fn new(maze: &Maze, config: &MazeConfig) -> Result<MazeLayout> {
        config.validate()?;
        let cell_size = config.cell_size();
        let CellSize { width: unit_x, height: unit_y } = cell_size;
        let (RowsCount(rows), ColumnsCount(columns)) = (maze.rows(), maze.columns());

        let goal_cell = maze.goal();
        let goal = GoalMarker {
            cell: goal_cell,
            center_x: cell_centre(goal_cell.column, unit_x),
            center_y: cell_centre(goal_cell.row, unit_y),
            width: unit_x * GOAL_SCALE,
            height: unit_y * GOAL_SCALE,
        };

        let spawn_cell = GridCoordinate::new(0, 0);
        let ball = BallSpawn {
            cell: spawn_cell,
            center_x: cell_centre(spawn_cell.column, unit_x),
            center_y: cell_centre(spawn_cell.row, unit_y),
            radius: unit_x.min(unit_y) * BALL_RADIUS_SCALE,
        };

        Ok(MazeLayout {
            width: columns as f32 * unit_x,
            height: rows as f32 * unit_y,
            carve_start: maze.start(),
            walls: closed_walls(maze.grid(), cell_size, config.wall_thickness()),
            boundary: boundary_walls(maze.rows(), maze.columns(), cell_size,
                                     config.boundary_thickness())
                .to_vec(),
            goal,
            ball,
        })
    }
}

#[inline]
fn cell_centre(index: usize, unit: f32) -> f32 {
    index as f32 * unit + unit / 2.0
}


#[cfg(test)]
mod tests {

    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::generators;

    fn cell(width: f32, height: f32) -> CellSize {
        CellSize::new(width, height).unwrap()
    }

    fn wall(center_x: f32, center_y: f32, width: f32, height: f32) -> WallDescriptor {
        WallDescriptor {
            center_x,
            center_y,
            width,
            height,
        }
    }

    fn grid(rows: usize, columns: usize) -> Grid {
        Grid::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
    }

    #[test]
    fn closed_grid_emits_every_slot() {
        let g = grid(2, 3);
        let walls = closed_walls(&g, cell(10.0, 20.0), 5.0);
        // 3 horizontal slots then 4 vertical slots
        assert_eq!(walls,
                   vec![wall(5.0, 20.0, 10.0, 5.0),
                        wall(15.0, 20.0, 10.0, 5.0),
                        wall(25.0, 20.0, 10.0, 5.0),
                        wall(10.0, 10.0, 5.0, 20.0),
                        wall(20.0, 10.0, 5.0, 20.0),
                        wall(10.0, 30.0, 5.0, 20.0),
                        wall(20.0, 30.0, 5.0, 20.0)]);
    }

    #[test]
    fn open_slots_are_skipped() {
        let mut g = grid(2, 3);
        g.open_horizontal(GridCoordinate::new(0, 1));
        g.open_vertical(GridCoordinate::new(1, 0));
        let walls = closed_walls(&g, cell(10.0, 20.0), 5.0);
        assert_eq!(walls,
                   vec![wall(5.0, 20.0, 10.0, 5.0),
                        wall(25.0, 20.0, 10.0, 5.0),
                        wall(10.0, 10.0, 5.0, 20.0),
                        wall(20.0, 10.0, 5.0, 20.0),
                        wall(20.0, 30.0, 5.0, 20.0)]);
    }

    #[test]
    fn carved_two_by_two_keeps_one_wall() {
        let mut g = grid(2, 2);
        let mut rng = StepRng::new(0, 0);
        let _ = generators::recursive_backtracker(&mut g, &mut rng);
        assert_eq!(closed_walls(&g, cell(10.0, 20.0), 5.0),
                   vec![wall(5.0, 20.0, 10.0, 5.0)]);
    }

    #[test]
    fn single_cell_emits_nothing() {
        let mut g = grid(1, 1);
        let mut rng = StepRng::new(0, 0);
        let _ = generators::recursive_backtracker(&mut g, &mut rng);
        assert!(closed_walls(&g, cell(10.0, 10.0), 5.0).is_empty());
    }

    #[test]
    fn carved_maze_closed_wall_count() {
        // Total slots minus the spanning tree edges
        let mut g = grid(6, 8);
        let mut rng = StepRng::new(0, 0);
        let _ = generators::recursive_backtracker(&mut g, &mut rng);
        let slots = 6 * 7 + 5 * 8;
        assert_eq!(closed_walls(&g, cell(1.0, 1.0), 1.0).len(), slots - (6 * 8 - 1));
    }

    #[test]
    fn frame() {
        let frame = boundary_walls(RowsCount(2), ColumnsCount(4), cell(10.0, 20.0), 2.0);
        assert_eq!(frame,
                   [wall(20.0, 0.0, 40.0, 2.0),
                    wall(20.0, 40.0, 40.0, 2.0),
                    wall(0.0, 20.0, 2.0, 40.0),
                    wall(40.0, 20.0, 2.0, 40.0)]);
    }

    #[test]
    fn layout() {
        let config = MazeConfig::builder()
            .rows(2)
            .columns(2)
            .cell_size(10.0, 20.0)
            .build()
            .unwrap();
        let mut rng = StepRng::new(0, 0);
        let maze = Maze::generate_with_rng(config.rows(), config.columns(), &mut rng).unwrap();
        let layout = MazeLayout::new(&maze, &config).unwrap();

        assert_eq!((layout.width, layout.height), (20.0, 40.0));
        assert_eq!(layout.carve_start, GridCoordinate::new(0, 0));
        assert_eq!(layout.walls, vec![wall(5.0, 20.0, 10.0, 5.0)]);
        assert_eq!(layout.boundary.len(), 4);

        assert_eq!(layout.goal.cell, GridCoordinate::new(1, 1));
        assert_eq!((layout.goal.center_x, layout.goal.center_y), (15.0, 30.0));
        assert_eq!((layout.goal.width, layout.goal.height), (10.0 * 0.7, 20.0 * 0.7));

        assert_eq!(layout.ball.cell, GridCoordinate::new(0, 0));
        assert_eq!((layout.ball.center_x, layout.ball.center_y), (5.0, 10.0));
        assert_eq!(layout.ball.radius, 10.0 * 0.3);
    }

    #[test]
    fn layout_serializes() {
        let config = MazeConfig::builder().rows(1).columns(2).seed(1).build().unwrap();
        let maze = Maze::generate(&config).unwrap();
        let layout = MazeLayout::new(&maze, &config).unwrap();
        let json: serde_json::Value = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["walls"].as_array().map(|walls| walls.len()), Some(0));
        assert_eq!(json["goal"]["cell"]["column"], 1);
        assert!(json["ball"]["radius"].is_number());
    }
}
