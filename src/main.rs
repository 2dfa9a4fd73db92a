use docopt::Docopt;
use serde_derive::Deserialize;
use labyrinth::{
    config::MazeConfig,
    export,
    maze::Maze,
    walls::MazeLayout,
};
use std::{
    fs::File,
    io::BufWriter,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Labyrinth

Usage:
    labyrinth_driver -h | --help
    labyrinth_driver [--rows=<r>] [--cols=<c>] [--cell-width=<w>] [--cell-height=<h>] [--wall-thickness=<t>] [--seed=<s>] [--walls-out=<path>] [--save-edges=<path>] [--quiet]

Options:
    -h --help               Show this screen.
    --rows=<r>              Number of cell rows [default: 6].
    --cols=<c>              Number of cell columns [default: 8].
    --cell-width=<w>        Width of one cell in output units [default: 100].
    --cell-height=<h>       Height of one cell in output units [default: 100].
    --wall-thickness=<t>    Thickness of the walls between cells [default: 5].
    --seed=<s>              Seed the random generator for a repeatable maze.
    --walls-out=<path>      Write the wall layout (walls, frame, goal, ball) as JSON.
    --save-edges=<path>     Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --quiet                 Do not print the maze to stdout.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_cols: usize,
    flag_cell_width: f32,
    flag_cell_height: f32,
    flag_wall_thickness: f32,
    flag_seed: Option<u64>,
    flag_walls_out: String,
    flag_save_edges: String,
    flag_quiet: bool,
}

// The driver's own error types, wrapping the library errors and argument parsing failures.
mod errors {
    #![allow(deprecated)]
    use error_chain::*;
    error_chain! {

        links {
            Maze(::labyrinth::errors::Error, ::labyrinth::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let config = maze_config_from_args(&args)?;
    let maze = Maze::generate(&config)?;
    info!(summary = %export::wall_matrix_summary(maze.grid()), "maze walls");

    if !args.flag_quiet {
        println!("{}", maze);
    }

    if !args.flag_walls_out.is_empty() {
        let layout = MazeLayout::new(&maze, &config)?;
        save_layout(&layout, &args.flag_walls_out)?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    Ok(())
}

fn maze_config_from_args(args: &MazeArgs) -> Result<MazeConfig> {
    let builder = MazeConfig::builder()
        .rows(args.flag_rows)
        .columns(args.flag_cols)
        .cell_size(args.flag_cell_width, args.flag_cell_height)
        .wall_thickness(args.flag_wall_thickness);
    let builder = match args.flag_seed {
        Some(seed) => builder.seed(seed),
        None => builder,
    };
    Ok(builder.build()?)
}

fn save_layout(layout: &MazeLayout, file_path: &str) -> Result<()> {
    let mut out = BufWriter::new(File::create(file_path)
        .chain_err(|| format!("Failed to create wall layout file {}", file_path))?);
    export::write_layout_json(layout, &mut out)
        .chain_err(|| format!("Failed to write wall layout to {}", file_path))?;
    info!(path = file_path, walls = layout.walls.len(), "saved wall layout");
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {
    let mut out = BufWriter::new(File::create(file_path)
        .chain_err(|| format!("Failed to create maze graph file {}", file_path))?);
    export::write_edge_list(maze.grid(), &mut out)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    info!(path = file_path, "saved maze graph");
    Ok(())
}
