//! **labyrinth** generates perfect mazes and describes their walls for rendering and collision.
//!
//! ```
//! use labyrinth::{config::MazeConfig, maze::Maze, walls::MazeLayout};
//!
//! let config = MazeConfig::builder().rows(6).columns(8).seed(7).build().unwrap();
//! let maze = Maze::generate(&config).unwrap();
//! assert_eq!(maze.grid().open_walls_count(), 6 * 8 - 1);
//!
//! let layout = MazeLayout::new(&maze, &config).unwrap();
//! assert_eq!(layout.walls.len(), (6 * 7 + 5 * 8) - (6 * 8 - 1));
//! ```

pub mod config;
pub mod errors;
pub mod export;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod maze;
pub mod shuffle;
pub mod units;
pub mod walls;
