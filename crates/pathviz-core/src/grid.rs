//! The [`Grid`] type: an `N×N` row-major collection of [`Cell`]s.
//!
//! The grid owns its cells exclusively and derives each cell's adjacency on
//! demand via [`rebuild_adjacency`](Grid::rebuild_adjacency). It also keeps
//! the "at most one start, at most one end" invariant: tagging a cell as
//! [`CellState::Start`] demotes the previous start cell to `Empty`.

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::Pos;

/// A square grid of cells.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    size: i32,
    logical_width: i32,
    start: Option<usize>,
    end: Option<usize>,
    adjacency_fresh: bool,
}

impl Grid {
    /// Create an `n×n` grid of empty cells spread over `logical_width` units.
    ///
    /// Each cell is `logical_width / n` units wide; the remainder of the
    /// integer division is left unused.
    pub fn new(n: i32, logical_width: i32) -> Result<Self, GridError> {
        if n <= 0 {
            return Err(GridError::InvalidSize(n));
        }
        let cells = (0..n)
            .flat_map(|row| (0..n).map(move |col| Cell::new(Pos::new(row, col))))
            .collect();
        Ok(Self {
            cells,
            size: n,
            logical_width: logical_width.max(0),
            start: None,
            end: None,
            adjacency_fresh: false,
        })
    }

    /// Create an `n×n` grid whose outermost ring is made of barriers.
    pub fn bordered(n: i32, logical_width: i32) -> Result<Self, GridError> {
        let mut grid = Self::new(n, logical_width)?;
        grid.fill_border();
        Ok(grid)
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The logical width the grid was created with.
    #[inline]
    pub fn logical_width(&self) -> i32 {
        self.logical_width
    }

    /// Width of a single cell in logical units.
    #[inline]
    pub fn cell_width(&self) -> i32 {
        self.logical_width / self.size
    }

    /// Logical origin of the cell at `p`: `(row * width, col * width)`.
    pub fn cell_origin(&self, p: Pos) -> Option<(i32, i32)> {
        self.contains(p).then(|| {
            let w = self.cell_width();
            (p.row * w, p.col * w)
        })
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.in_square(self.size)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        self.contains(p)
            .then(|| (p.row * self.size + p.col) as usize)
    }

    /// Position of the cell at flat index `idx`.
    #[inline]
    pub fn pos_at(&self, idx: usize) -> Pos {
        let n = self.size as usize;
        Pos::new((idx / n) as i32, (idx % n) as i32)
    }

    fn checked_index(&self, p: Pos) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size,
        })
    }

    /// Borrow the cell at `p`.
    pub fn cell(&self, p: Pos) -> Result<&Cell, GridError> {
        let i = self.checked_index(p)?;
        Ok(&self.cells[i])
    }

    /// State tag of the cell at `p`.
    pub fn state(&self, p: Pos) -> Result<CellState, GridError> {
        self.cell(p).map(|c| c.state)
    }

    /// Tag the cell at `p` with `state`, returning its previous state.
    ///
    /// Assigning `Start` or `End` demotes the previous holder of that tag to
    /// `Empty`. Changing a cell's walkability marks the cached adjacency as
    /// stale.
    pub fn set_state(&mut self, p: Pos, state: CellState) -> Result<CellState, GridError> {
        let i = self.checked_index(p)?;
        Ok(self.set_state_at(i, state))
    }

    pub(crate) fn set_state_at(&mut self, i: usize, state: CellState) -> CellState {
        let prev = self.cells[i].state;
        if prev == state {
            return prev;
        }
        match prev {
            CellState::Start => self.start = None,
            CellState::End => self.end = None,
            _ => {}
        }
        let slot = match state {
            CellState::Start => Some(&mut self.start),
            CellState::End => Some(&mut self.end),
            _ => None,
        };
        if let Some(slot) = slot {
            if let Some(old) = slot.replace(i) {
                self.cells[old].state = CellState::Empty;
            }
        }
        if prev.is_walkable() != state.is_walkable() {
            self.adjacency_fresh = false;
        }
        self.cells[i].state = state;
        prev
    }

    /// Write a search mark at `p` unless it holds the start or end tag.
    ///
    /// Returns whether the cell was changed. Out-of-bounds positions are
    /// ignored.
    pub fn paint(&mut self, p: Pos, state: CellState) -> bool {
        match self.index(p) {
            Some(i) if !self.cells[i].state.is_endpoint() && self.cells[i].state != state => {
                self.set_state_at(i, state);
                true
            }
            _ => false,
        }
    }

    /// Position of the start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start.map(|i| self.pos_at(i))
    }

    /// Position of the end cell, if any.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end.map(|i| self.pos_at(i))
    }

    /// Cached walkable neighbours of `p`; empty when `p` is out of bounds or
    /// adjacency has not been built.
    #[inline]
    pub fn neighbors(&self, p: Pos) -> &[Pos] {
        match self.index(p) {
            Some(i) => self.cells[i].neighbors(),
            None => &[],
        }
    }

    /// Whether the cached adjacency reflects the current barriers.
    #[inline]
    pub fn has_fresh_adjacency(&self) -> bool {
        self.adjacency_fresh
    }

    /// Set every cell on the outermost rows and columns to `Barrier`.
    pub fn fill_border(&mut self) {
        let last = self.size - 1;
        for i in 0..self.cells.len() {
            let p = self.pos_at(i);
            if p.row == 0 || p.col == 0 || p.row == last || p.col == last {
                self.set_state_at(i, CellState::Barrier);
            }
        }
    }

    /// Recompute every cell's neighbour list from the current barriers.
    ///
    /// Barrier cells get no neighbours and are never listed as one.
    pub fn rebuild_adjacency(&mut self) {
        for i in 0..self.cells.len() {
            if !self.cells[i].is_walkable() {
                self.cells[i].clear_neighbors();
                continue;
            }
            let p = self.pos_at(i);
            let ns: Vec<Pos> = p
                .neighbors_4()
                .into_iter()
                .filter(|&q| self.index(q).is_some_and(|j| self.cells[j].is_walkable()))
                .collect();
            self.cells[i].set_neighbors(ns);
        }
        self.adjacency_fresh = true;
    }

    /// Clear search marks while keeping barriers and endpoints.
    ///
    /// Every cell that is not `Barrier`, `Start` or `End` becomes `Empty`,
    /// and all cached adjacency is dropped.
    pub fn soft_reset(&mut self) {
        for cell in &mut self.cells {
            if cell.state != CellState::Barrier && !cell.state.is_endpoint() {
                cell.state = CellState::Empty;
            }
            cell.clear_neighbors();
        }
        self.adjacency_fresh = false;
    }

    /// Replace the grid with a fresh bordered grid of the same dimensions.
    pub fn full_reset(&mut self) {
        let mut fresh = Self {
            cells: (0..self.cells.len())
                .map(|i| Cell::new(self.pos_at(i)))
                .collect(),
            size: self.size,
            logical_width: self.logical_width,
            start: None,
            end: None,
            adjacency_fresh: false,
        };
        fresh.fill_border();
        *self = fresh;
    }

    /// Number of cells tagged `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
