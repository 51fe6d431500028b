//! Path reconstruction from a predecessor map.

use std::ops::ControlFlow;

use pathviz_core::{CellState, Grid, GridError, Pos};

use crate::outcome::{GoalReached, SearchOutcome};
use crate::traits::{RenderHook, SearchEvent};

/// Predecessor links recorded by a search, one slot per grid cell.
#[derive(Clone, Debug)]
pub struct Predecessors {
    links: Vec<Option<Pos>>,
    size: i32,
}

impl Predecessors {
    /// An empty map sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            links: vec![None; grid.len()],
            size: grid.size(),
        }
    }

    #[inline]
    fn idx(&self, p: Pos) -> Option<usize> {
        p.in_square(self.size)
            .then(|| (p.row * self.size + p.col) as usize)
    }

    /// The cell `p` was reached from, if any.
    #[inline]
    pub fn get(&self, p: Pos) -> Option<Pos> {
        self.idx(p).and_then(|i| self.links[i])
    }

    /// Record that `p` was reached from `from`. Ignored out of bounds.
    #[inline]
    pub fn set(&mut self, p: Pos, from: Pos) {
        if let Some(i) = self.idx(p) {
            self.links[i] = Some(from);
        }
    }

    /// Number of cells with a recorded predecessor.
    pub fn len(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Walk the predecessor chain backwards from `end`, tagging every cell
/// strictly between end and start as [`CellState::Path`].
///
/// The hook runs after each tag. Neither endpoint is modified; the walk
/// stops at the first cell without a predecessor. Returns the number of
/// steps walked, or `Break` if the hook interrupted.
pub fn reconstruct<H: RenderHook + ?Sized>(
    grid: &mut Grid,
    came_from: &Predecessors,
    end: Pos,
    hook: &mut H,
) -> ControlFlow<(), u32> {
    let mut steps = 0;
    let mut current = end;
    while let Some(prev) = came_from.get(current) {
        steps += 1;
        current = prev;
        if came_from.get(current).is_none() {
            break;
        }
        grid.paint(current, CellState::Path);
        hook.render(grid, SearchEvent::PathStep(current))?;
    }
    ControlFlow::Continue(steps)
}

/// Flat index of a search endpoint, rejecting out-of-bounds positions.
pub(crate) fn endpoint_index(grid: &Grid, p: Pos) -> Result<usize, GridError> {
    grid.index(p).ok_or(GridError::OutOfBounds {
        pos: p,
        size: grid.size(),
    })
}

/// Trace the path back to `start`, then restore both endpoint tags. When
/// `start == end` the cell keeps whatever tag it had.
pub(crate) fn finish<H: RenderHook + ?Sized>(
    grid: &mut Grid,
    came_from: &Predecessors,
    start: Pos,
    end: Pos,
    cost: u32,
    expanded: usize,
    hook: &mut H,
) -> Result<SearchOutcome, GridError> {
    if reconstruct(grid, came_from, end, hook).is_break() {
        return Ok(SearchOutcome::Interrupted);
    }
    if start != end {
        grid.set_state(end, CellState::End)?;
        grid.set_state(start, CellState::Start)?;
    }
    Ok(SearchOutcome::Found(GoalReached {
        end,
        cost,
        expanded,
    }))
}

/// Follow `Path` cells from `end` back to the cell next to `start` through
/// 4-adjacency and return how many cells the walk visits, both endpoints
/// included. Panics if the tagged path breaks or branches.
#[cfg(test)]
pub(crate) fn walk_path(grid: &Grid, start: Pos, end: Pos) -> u32 {
    if start == end {
        return 1;
    }
    let mut visited = 1;
    let mut prev = None;
    let mut current = end;
    while crate::heuristic::manhattan(current, start) != 1 {
        let next: Vec<Pos> = current
            .neighbors_4()
            .into_iter()
            .filter(|&q| Some(q) != prev && grid.state(q) == Ok(CellState::Path))
            .collect();
        assert_eq!(next.len(), 1, "path breaks or branches at {current}");
        prev = Some(current);
        current = next[0];
        visited += 1;
    }
    visited + 1
}
