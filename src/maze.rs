use rand::Rng;
use tracing::info;

use crate::config::MazeConfig;
use crate::errors::*;
use crate::generators;
use crate::grid::{Grid, GridCoordinate};
use crate::units::{ColumnsCount, RowsCount};

/// A fully carved perfect maze.
///
/// Owns the grid the carver worked on and only hands it out immutably, so once a `Maze` exists
/// its walls never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: GridCoordinate,
    goal: GridCoordinate,
}

impl Maze {
    /// Validate `config` and carve a maze with the random source it describes.
    pub fn generate(config: &MazeConfig) -> Result<Maze> {
        config.validate()?;
        let mut rng = config.rng();
        let maze = Maze::generate_with_rng(config.rows(), config.columns(), &mut rng)?;
        info!(rows = config.rows().0,
              columns = config.columns().0,
              seed = ?config.seed(),
              start = ?maze.start,
              "generated maze");
        Ok(maze)
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(rows: RowsCount,
                                              columns: ColumnsCount,
                                              rng: &mut R)
                                              -> Result<Maze> {
        let mut grid = Grid::new(rows, columns)?;
        let start = generators::recursive_backtracker(&mut grid, rng);
        let goal = goal_cell(&grid);
        Ok(Maze { grid, start, goal })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The random cell the carving started from.
    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.start
    }

    /// Always the bottom right cell, wherever the carving started.
    #[inline]
    pub fn goal(&self) -> GridCoordinate {
        self.goal
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.grid.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.grid.columns()
    }
}

fn goal_cell(grid: &Grid) -> GridCoordinate {
    let (RowsCount(rows), ColumnsCount(columns)) = (grid.rows(), grid.columns());
    GridCoordinate::new(rows - 1, columns - 1)
}


#[cfg(test)]
mod tests {

    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn generate_from_config() {
        let config = MazeConfig::builder().rows(5).columns(7).seed(3).build().unwrap();
        let maze = Maze::generate(&config).unwrap();
        assert_eq!(maze.rows(), RowsCount(5));
        assert_eq!(maze.columns(), ColumnsCount(7));
        assert_eq!(maze.goal(), GridCoordinate::new(4, 6));
        assert!(maze.grid().is_valid_coordinate(maze.start()));
        assert_eq!(maze.grid().open_walls_count(), 34);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let config = MazeConfig::builder().rows(10).columns(10).seed(88).build().unwrap();
        assert_eq!(Maze::generate(&config).unwrap(), Maze::generate(&config).unwrap());
    }

    #[test]
    fn goal_ignores_the_start() {
        let mut rng = StepRng::new(0, 0);
        let maze = Maze::generate_with_rng(RowsCount(3), ColumnsCount(2), &mut rng).unwrap();
        assert_eq!(maze.start(), GridCoordinate::new(0, 0));
        assert_eq!(maze.goal(), GridCoordinate::new(2, 1));
    }

    #[test]
    fn invalid_dimensions_rejected_before_generation() {
        let mut rng = StepRng::new(0, 0);
        let err = Maze::generate_with_rng(RowsCount(4), ColumnsCount(0), &mut rng).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::InvalidDimension(4, 0)));
    }

    #[test]
    fn single_cell_maze() {
        let mut rng = StepRng::new(0, 0);
        let maze = Maze::generate_with_rng(RowsCount(1), ColumnsCount(1), &mut rng).unwrap();
        assert_eq!(maze.start(), maze.goal());
        assert_eq!(maze.grid().open_walls_count(), 0);
    }
}
