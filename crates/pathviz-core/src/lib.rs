//! **pathviz-core**: the grid model of the pathfinding visualizer.
//!
//! This crate provides the data the search algorithms operate on:
//! coordinates, cells with a state tag and cached adjacency, the square
//! grid that owns them, and random maze generation.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;

pub use cell::{Cell, CellState};
pub use error::GridError;
pub use geom::Pos;
pub use grid::Grid;
pub use mapgen::{DEFAULT_DENSITY, Maze, MazeGen};
