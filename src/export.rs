//! Writing a carved maze out for other programs.

use std::io::Write;

use itertools::Itertools;

use crate::errors::*;
use crate::grid::Grid;
use crate::walls::MazeLayout;

/// Serialize the passages as a text edge list.
///
/// Line 1: n(#vertices) m(#edges). Line 2+: an edge between two vertices, one per open wall.
/// Vertices are the cells in row major order, 1-based.
pub fn write_edge_list<W: Write>(grid: &Grid, out: &mut W) -> Result<()> {
    let graph = grid.passage_graph();
    writeln!(out, "{} {}", graph.node_count(), graph.edge_count())?;

    for edge in graph.raw_edges() {
        let src_as_1_based_index = edge.source().index() + 1;
        let dst_as_1_based_index = edge.target().index() + 1;
        writeln!(out, "{} {}", src_as_1_based_index, dst_as_1_based_index)?;
    }

    Ok(())
}

/// Pretty printed JSON of the layout.
pub fn write_layout_json<W: Write>(layout: &MazeLayout, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, layout)?;
    writeln!(out)?;
    Ok(())
}

/// A one line summary of the wall matrices, e.g. `v=[11|10] h=[01]`, handy in log output.
pub fn wall_matrix_summary(grid: &Grid) -> String {
    let bits = |rows: Vec<&[bool]>| {
        rows.iter()
            .map(|row| row.iter().map(|&open| if open { '1' } else { '0' }).collect::<String>())
            .join("|")
    };
    format!("v=[{}] h=[{}]",
            bits(grid.vertical_wall_rows().collect()),
            bits(grid.horizontal_wall_rows().collect()))
}
