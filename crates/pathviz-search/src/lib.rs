//! Grid search algorithms with a step-by-step render hook.
//!
//! Two entry points operate on a [`pathviz_core::Grid`] whose adjacency has
//! been rebuilt:
//!
//! - **A\*** with a per-call [`Heuristic`] ([`a_star`])
//! - **Uniform-cost** search, i.e. Dijkstra with unit edges ([`uniform_cost`])
//!
//! Both tag cells `Open`/`Closed` as they explore, call a [`RenderHook`] once
//! per expanded cell, and on success hand the predecessor map to
//! [`reconstruct`], which tags the final path.

mod astar;
mod frontier;
mod heuristic;
mod outcome;
mod reconstruct;
mod traits;
mod uniform_cost;

pub use astar::a_star;
pub use heuristic::{Heuristic, euclidean, manhattan};
pub use outcome::{GoalReached, SearchOutcome, UNREACHABLE};
pub use reconstruct::{Predecessors, reconstruct};
pub use traits::{NoRender, RenderHook, SearchEvent};
pub use uniform_cost::uniform_cost;
