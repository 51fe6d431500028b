//! Random obstacle generation.
//!
//! [`Grid::randomize_obstacles`] scatters barriers independently per cell;
//! [`MazeGen`] builds a complete bordered maze with random interior
//! endpoints on top of it.

use rand::Rng;

use crate::cell::CellState;
use crate::error::GridError;
use crate::geom::Pos;
use crate::grid::Grid;

/// Default barrier probability: "less than 3 out of 10".
pub const DEFAULT_DENSITY: f64 = 0.2;

impl Grid {
    /// Turn each cell into a `Barrier` independently with `probability`.
    ///
    /// Returns the number of cells newly turned into barriers.
    pub fn randomize_obstacles<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) -> usize {
        let mut placed = 0;
        for i in 0..self.len() {
            let r: f64 = rng.random();
            if r < probability && self.set_state_at(i, CellState::Barrier) != CellState::Barrier {
                placed += 1;
            }
        }
        placed
    }

    /// A uniformly random position off the border ring, or `None` when the
    /// grid has no interior.
    pub fn random_interior<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Pos> {
        let n = self.size();
        if n < 3 {
            return None;
        }
        Some(Pos::new(
            rng.random_range(1..n - 1),
            rng.random_range(1..n - 1),
        ))
    }
}

/// A generated maze: bordered grid plus its endpoints.
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: Grid,
    pub start: Pos,
    pub end: Pos,
}

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    /// Barrier probability per cell.
    pub density: f64,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R, density: f64) -> Self {
        Self { rng, density }
    }

    /// Build an `n×n` bordered grid, seed barriers, then place start and end
    /// on distinct interior cells (overwriting any barrier there).
    ///
    /// Needs `n >= 4` so that two distinct interior cells exist.
    pub fn generate(&mut self, n: i32, logical_width: i32) -> Result<Maze, GridError> {
        if n < 4 {
            return Err(GridError::InvalidSize(n));
        }
        let mut grid = Grid::bordered(n, logical_width)?;
        let placed = grid.randomize_obstacles(self.density, &mut self.rng);

        let start = grid
            .random_interior(&mut self.rng)
            .ok_or(GridError::InvalidSize(n))?;
        let end = loop {
            let p = grid
                .random_interior(&mut self.rng)
                .ok_or(GridError::InvalidSize(n))?;
            if p != start {
                break p;
            }
        };
        grid.set_state(start, CellState::Start)?;
        grid.set_state(end, CellState::End)?;

        log::debug!("maze {n}x{n}: {placed} random barriers, start {start}, end {end}");
        Ok(Maze { grid, start, end })
    }
}
