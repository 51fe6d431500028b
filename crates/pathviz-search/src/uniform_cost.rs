use pathviz_core::{CellState, Grid, GridError, Pos};

use crate::frontier::Frontier;
use crate::outcome::{SearchOutcome, UNREACHABLE};
use crate::reconstruct::{Predecessors, endpoint_index, finish};
use crate::traits::{RenderHook, SearchEvent};

/// Find a shortest path from `start` to `end` with uniform-cost search.
///
/// This is A* without a heuristic term: the frontier is keyed by
/// `(distance, insertion order)`. With unit edge costs the expansion order
/// is breadth-first. A cell may sit in the frontier several times at
/// decreasing distances; entries whose key exceeds the cell's recorded
/// distance are stale and skipped without invoking the hook.
pub fn uniform_cost<H: RenderHook + ?Sized>(
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    hook: &mut H,
) -> Result<SearchOutcome, GridError> {
    let si = endpoint_index(grid, start)?;
    let ei = endpoint_index(grid, end)?;
    if !grid.has_fresh_adjacency() {
        log::warn!("uniform_cost called with stale adjacency");
    }

    let len = grid.len();
    let mut dist = vec![UNREACHABLE; len];
    let mut came_from = Predecessors::new(grid);
    let mut open: Frontier<u32> = Frontier::new();
    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);
    let mut expanded = 0;

    dist[si] = 0;
    open.push(0, si);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if current.key > dist[ci] {
            continue;
        }

        if ci == ei {
            log::debug!("uniform_cost reached {end} after {expanded} expansions");
            return finish(grid, &came_from, start, end, dist[ei], expanded, hook);
        }

        let cp = grid.pos_at(ci);
        let tentative = dist[ci] + 1;

        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(cp));

        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if tentative >= dist[ni] {
                continue;
            }
            came_from.set(np, cp);
            dist[ni] = tentative;
            open.push(tentative, ni);
            grid.paint(np, CellState::Open);
        }

        expanded += 1;
        if hook.render(grid, SearchEvent::Expanded(cp)).is_break() {
            log::info!("uniform_cost interrupted after {expanded} expansions");
            return Ok(SearchOutcome::Interrupted);
        }

        if ci != si {
            grid.paint(cp, CellState::Closed);
        }
    }

    log::debug!("uniform_cost exhausted frontier after {expanded} expansions");
    Ok(SearchOutcome::NoPath { expanded })
}
