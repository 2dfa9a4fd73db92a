use bit_set::BitSet;
use error_chain::bail;
use itertools::iproduct;
use petgraph::graph::UnGraph;
use serde_derive::Serialize;
use smallvec::SmallVec;

use crate::errors::*;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};


#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd, Serialize)]
pub struct GridCoordinate {
    pub row: usize,
    pub column: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate { row, column }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> GridCoordinate {
        let ColumnsCount(width) = columns;
        GridCoordinate::new(index / width, index % width)
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_column_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    /// The four directions in carving candidate order: above, right, below, left.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];
}

/// One wall slot in either wall matrix, addressed by the lower indexed of the two cells it separates.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallSlot {
    /// Between `(row, column)` and `(row, column + 1)`.
    Vertical(GridCoordinate),
    /// Between `(row, column)` and `(row + 1, column)`.
    Horizontal(GridCoordinate),
}

/// A rectangular grid of cells with a visited flag per cell and two wall matrices.
///
/// Vertical walls are stored `rows x (columns - 1)` and horizontal walls `(rows - 1) x columns`,
/// both row major. A `true` wall entry means that wall is open (removed).
///
/// Cell addresses outside of the grid are a programming error and panic.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    visited: BitSet,
    vertical_walls: Vec<bool>,
    horizontal_walls: Vec<bool>,
}

impl Grid {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid> {
        let (RowsCount(rows), ColumnsCount(columns)) = (rows, columns);
        if rows < 1 || columns < 1 {
            bail!(ErrorKind::InvalidDimension(rows, columns));
        }

        Ok(Grid {
            rows,
            columns,
            visited: BitSet::with_capacity(rows * columns),
            vertical_walls: vec![false; rows * (columns - 1)],
            horizontal_walls: vec![false; (rows - 1) * columns],
        })
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
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    /// Node count and the edge count of a spanning tree over those nodes.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        (NodesCount(cells_count), EdgesCount(cells_count - 1))
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows && coord.column < self.columns
    }

    /// Convert a grid coordinate to a one dimensional row major index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns + coord.column)
        } else {
            None
        }
    }

    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.visited.contains(self.cell_index(coord))
    }

    pub fn mark_visited(&mut self, coord: GridCoordinate) {
        let index = self.cell_index(coord);
        let _ = self.visited.insert(index);
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Open the wall between `coord` and the cell to its right.
    pub fn open_vertical(&mut self, coord: GridCoordinate) {
        let index = self.vertical_index(coord);
        self.vertical_walls[index] = true;
    }

    /// Open the wall between `coord` and the cell below it.
    pub fn open_horizontal(&mut self, coord: GridCoordinate) {
        let index = self.horizontal_index(coord);
        self.horizontal_walls[index] = true;
    }

    pub fn is_vertical_open(&self, coord: GridCoordinate) -> bool {
        self.vertical_walls[self.vertical_index(coord)]
    }

    pub fn is_horizontal_open(&self, coord: GridCoordinate) -> bool {
        self.horizontal_walls[self.horizontal_index(coord)]
    }

    pub fn open_wall(&mut self, slot: WallSlot) {
        match slot {
            WallSlot::Vertical(coord) => self.open_vertical(coord),
            WallSlot::Horizontal(coord) => self.open_horizontal(coord),
        }
    }

    pub fn is_wall_open(&self, slot: WallSlot) -> bool {
        match slot {
            WallSlot::Vertical(coord) => self.is_vertical_open(coord),
            WallSlot::Horizontal(coord) => self.is_horizontal_open(coord),
        }
    }

    /// The `rows` rows of the vertical wall matrix, each `columns - 1` long.
    pub fn vertical_wall_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let width = self.columns - 1;
        (0..self.rows).map(move |row| &self.vertical_walls[row * width..(row + 1) * width])
    }

    /// The `rows - 1` rows of the horizontal wall matrix, each `columns` long.
    pub fn horizontal_wall_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let width = self.columns;
        (0..self.rows - 1).map(move |row| &self.horizontal_walls[row * width..(row + 1) * width])
    }

    pub fn open_walls_count(&self) -> usize {
        self.vertical_walls
            .iter()
            .chain(self.horizontal_walls.iter())
            .filter(|&&open| open)
            .count()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        let GridCoordinate { row, column } = coord;
        let neighbour = match direction {
            CompassPrimary::North => {
                if row > 0 {
                    Some(GridCoordinate::new(row - 1, column))
                } else {
                    None
                }
            }
            CompassPrimary::East => Some(GridCoordinate::new(row, column + 1)),
            CompassPrimary::South => Some(GridCoordinate::new(row + 1, column)),
            CompassPrimary::West => {
                if column > 0 {
                    Some(GridCoordinate::new(row, column - 1))
                } else {
                    None
                }
            }
        };

        neighbour.filter(|&neighbour_coord| self.is_valid_coordinate(neighbour_coord))
    }

    /// The wall slot separating `coord` from its neighbour in `direction`.
    /// Returns None if there is no such neighbour on the grid.
    ///
    /// North opens `horizontal[row - 1][column]`, South `horizontal[row][column]`,
    /// West `vertical[row][column - 1]` and East `vertical[row][column]`.
    pub fn wall_between(&self,
                        coord: GridCoordinate,
                        direction: CompassPrimary)
                        -> Option<WallSlot> {
        self.neighbour_at_direction(coord, direction)
            .map(|neighbour| match direction {
                CompassPrimary::North => WallSlot::Horizontal(neighbour),
                CompassPrimary::South => WallSlot::Horizontal(coord),
                CompassPrimary::West => WallSlot::Vertical(neighbour),
                CompassPrimary::East => WallSlot::Vertical(coord),
            })
    }

    /// Is there an open wall between `coord` and its neighbour in `direction`?
    pub fn is_neighbour_linked(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        self.wall_between(coord, direction)
            .map_or(false, |slot| self.is_wall_open(slot))
    }

    /// Cells that are reachable from `coord` in one step through an open wall.
    pub fn links(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter(|&&direction| self.is_neighbour_linked(coord, direction))
            .filter_map(|&direction| self.neighbour_at_direction(coord, direction))
            .collect()
    }

    /// All cell coordinates in row major order.
    pub fn iter(&self) -> impl Iterator<Item = GridCoordinate> {
        iproduct!(0..self.rows, 0..self.columns).map(GridCoordinate::from)
    }

    /// Pairs of cells joined by an open wall. Horizontal walls come first, then vertical walls,
    /// each in row major order.
    pub fn iter_links(&self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + '_ {
        let horizontal_links = iproduct!(0..self.rows - 1, 0..self.columns)
            .map(GridCoordinate::from)
            .filter(move |&coord| self.is_horizontal_open(coord))
            .map(|coord| (coord, GridCoordinate::new(coord.row + 1, coord.column)));
        let vertical_links = iproduct!(0..self.rows, 0..self.columns - 1)
            .map(GridCoordinate::from)
            .filter(move |&coord| self.is_vertical_open(coord))
            .map(|coord| (coord, GridCoordinate::new(coord.row, coord.column + 1)));

        horizontal_links.chain(vertical_links)
    }

    /// The open walls as an undirected graph. Node `i` is the cell at row major index `i`.
    pub fn passage_graph(&self) -> UnGraph<GridCoordinate, ()> {
        let (NodesCount(nodes), EdgesCount(edges)) = self.graph_size();
        let mut graph = UnGraph::with_capacity(nodes, edges);
        let node_indices = self.iter()
            .map(|coord| graph.add_node(coord))
            .collect::<Vec<_>>();

        for (a, b) in self.iter_links() {
            let a_index = node_indices[self.cell_index(a)];
            let b_index = node_indices[self.cell_index(b)];
            let _ = graph.add_edge(a_index, b_index, ());
        }

        graph
    }

    #[inline]
    fn cell_index(&self, coord: GridCoordinate) -> usize {
        assert!(self.is_valid_coordinate(coord),
                "cell {:?} out of bounds for a {}x{} grid",
                coord,
                self.rows,
                self.columns);
        coord.row * self.columns + coord.column
    }

    #[inline]
    fn vertical_index(&self, coord: GridCoordinate) -> usize {
        assert!(coord.row < self.rows && coord.column + 1 < self.columns,
                "vertical wall {:?} out of bounds for a {}x{} grid",
                coord,
                self.rows,
                self.columns);
        coord.row * (self.columns - 1) + coord.column
    }

    #[inline]
    fn horizontal_index(&self, coord: GridCoordinate) -> usize {
        assert!(coord.row + 1 < self.rows && coord.column < self.columns,
                "horizontal wall {:?} out of bounds for a {}x{} grid",
                coord,
                self.rows,
                self.columns);
        coord.row * self.columns + coord.column
    }
}
