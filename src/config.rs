//! Maze generation and layout configuration.

use error_chain::bail;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::{Deserialize, Serialize};

use crate::errors::*;
use crate::units::{ColumnsCount, RowsCount};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 8;
pub const DEFAULT_CELL_SIDE: f32 = 100.0;
/// Thickness of the inner walls separating cells.
pub const DEFAULT_WALL_THICKNESS: f32 = 5.0;
/// Thickness of the frame around the whole maze.
pub const DEFAULT_BOUNDARY_THICKNESS: f32 = 2.0;

/// Width and height of one grid cell in output units (e.g. pixels).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    pub fn new(width: f32, height: f32) -> Result<CellSize> {
        if !is_positive_finite(width) || !is_positive_finite(height) {
            bail!(ErrorKind::InvalidCellSize(width, height));
        }
        Ok(CellSize { width, height })
    }
}

/// Everything needed to generate one maze and lay out its walls.
///
/// Use [`MazeConfig::builder`] to construct one; building validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    rows: usize,
    columns: usize,
    cell_width: f32,
    cell_height: f32,
    wall_thickness: f32,
    boundary_thickness: f32,
    seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cell_width: DEFAULT_CELL_SIDE,
            cell_height: DEFAULT_CELL_SIDE,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            boundary_thickness: DEFAULT_BOUNDARY_THICKNESS,
            seed: None,
        }
    }
}

impl MazeConfig {
    #[inline]
    pub fn builder() -> MazeConfigBuilder {
        MazeConfigBuilder::default()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.rows)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.columns)
    }

    #[inline]
    pub fn cell_size(&self) -> CellSize {
        CellSize {
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    #[inline]
    pub fn wall_thickness(&self) -> f32 {
        self.wall_thickness
    }

    #[inline]
    pub fn boundary_thickness(&self) -> f32 {
        self.boundary_thickness
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Width and height of the whole maze area.
    pub fn extent(&self) -> (f32, f32) {
        (self.columns as f32 * self.cell_width, self.rows as f32 * self.cell_height)
    }

    /// Checks the dimensions are at least 1 and every length is positive and finite.
    ///
    /// Deserialized configurations bypass the builder, so call this before trusting one.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 || self.columns < 1 {
            bail!(ErrorKind::InvalidDimension(self.rows, self.columns));
        }
        let _ = CellSize::new(self.cell_width, self.cell_height)?;
        for &thickness in &[self.wall_thickness, self.boundary_thickness] {
            if !is_positive_finite(thickness) {
                bail!(ErrorKind::InvalidThickness(thickness));
            }
        }
        Ok(())
    }

    /// The random source for generation: seeded when a seed is configured, otherwise from
    /// operating system entropy.
    pub fn rng(&self) -> XorShiftRng {
        match self.seed {
            Some(seed) => XorShiftRng::seed_from_u64(seed),
            None => XorShiftRng::from_entropy(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MazeConfigBuilder {
    rows: Option<usize>,
    columns: Option<usize>,
    cell_width: Option<f32>,
    cell_height: Option<f32>,
    wall_thickness: Option<f32>,
    boundary_thickness: Option<f32>,
    seed: Option<u64>,
}

impl MazeConfigBuilder {
    pub fn new() -> MazeConfigBuilder {
        MazeConfigBuilder::default()
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn cell_size(mut self, width: f32, height: f32) -> Self {
        self.cell_width = Some(width);
        self.cell_height = Some(height);
        self
    }

    pub fn wall_thickness(mut self, thickness: f32) -> Self {
        self.wall_thickness = Some(thickness);
        self
    }

    pub fn boundary_thickness(mut self, thickness: f32) -> Self {
        self.boundary_thickness = Some(thickness);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fill in defaults for anything unset and validate.
    pub fn build(self) -> Result<MazeConfig> {
        let defaults = MazeConfig::default();
        let config = MazeConfig {
            rows: self.rows.unwrap_or(defaults.rows),
            columns: self.columns.unwrap_or(defaults.columns),
            cell_width: self.cell_width.unwrap_or(defaults.cell_width),
            cell_height: self.cell_height.unwrap_or(defaults.cell_height),
            wall_thickness: self.wall_thickness.unwrap_or(defaults.wall_thickness),
            boundary_thickness: self.boundary_thickness.unwrap_or(defaults.boundary_thickness),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[inline]
fn is_positive_finite(length: f32) -> bool {
    length.is_finite() && length > 0.0
}
