use pathviz_core::{CellState, Grid, GridError, Pos};

use crate::frontier::{Frontier, Score};
use crate::heuristic::Heuristic;
use crate::outcome::{SearchOutcome, UNREACHABLE};
use crate::reconstruct::{Predecessors, endpoint_index, finish};
use crate::traits::{RenderHook, SearchEvent};

/// Find a shortest path from `start` to `end` with A*, rendering each step.
///
/// The frontier is keyed by `(f, insertion order)`, so equal-`f` cells are
/// expanded first-in first-out and runs are reproducible. A cell is pushed
/// only when it is not already queued; if its `g` improves while queued it
/// keeps its original entry. Queued cells are tagged `Open`, expanded cells
/// other than `start` are tagged `Closed`, and on success the path is tagged
/// `Path`.
///
/// Adjacency is read from the grid's cache; the caller must have called
/// [`Grid::rebuild_adjacency`] since the last barrier edit.
pub fn a_star<H: RenderHook + ?Sized>(
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    heuristic: Heuristic,
    hook: &mut H,
) -> Result<SearchOutcome, GridError> {
    let si = endpoint_index(grid, start)?;
    let ei = endpoint_index(grid, end)?;
    if !grid.has_fresh_adjacency() {
        log::warn!("a_star called with stale adjacency");
    }

    let len = grid.len();
    let mut g = vec![UNREACHABLE; len];
    let mut f = vec![f64::INFINITY; len];
    // Membership set mirroring the frontier: one entry per queued cell.
    let mut queued = vec![false; len];
    let mut came_from = Predecessors::new(grid);
    let mut open = Frontier::new();
    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);
    let mut expanded = 0;

    g[si] = 0;
    f[si] = heuristic.estimate(start, end);
    open.push(Score(f[si]), si);
    queued[si] = true;

    while let Some(current) = open.pop() {
        let ci = current.idx;

        if !queued[ci] {
            continue;
        }
        queued[ci] = false;

        if ci == ei {
            log::debug!("a_star({}) reached {end} after {expanded} expansions", heuristic.label());
            return finish(grid, &came_from, start, end, g[ei], expanded, hook);
        }

        let cp = grid.pos_at(ci);
        let tentative_g = g[ci] + 1;

        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(cp));

        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if tentative_g >= g[ni] {
                continue;
            }
            came_from.set(np, cp);
            g[ni] = tentative_g;
            f[ni] = f64::from(tentative_g) + heuristic.estimate(np, end);
            if !queued[ni] {
                open.push(Score(f[ni]), ni);
                queued[ni] = true;
                grid.paint(np, CellState::Open);
            }
        }

        expanded += 1;
        if hook.render(grid, SearchEvent::Expanded(cp)).is_break() {
            log::info!("a_star interrupted after {expanded} expansions");
            return Ok(SearchOutcome::Interrupted);
        }

        if ci != si {
            grid.paint(cp, CellState::Closed);
        }
    }

    log::debug!("a_star({}) exhausted frontier after {expanded} expansions", heuristic.label());
    Ok(SearchOutcome::NoPath { expanded })
}
