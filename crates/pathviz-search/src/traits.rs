use std::ops::ControlFlow;

use pathviz_core::{Grid, Pos};

/// What the search just did before handing control to the render hook.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SearchEvent {
    /// A cell was taken off the frontier and its neighbours relaxed.
    Expanded(Pos),
    /// A cell was tagged as part of the final path.
    PathStep(Pos),
}

/// Render callback invoked synchronously from inside a search.
///
/// Called once per expanded cell and once per path cell. Returning
/// [`ControlFlow::Break`] stops the search; its transient state is dropped
/// and the search reports [`SearchOutcome::Interrupted`](crate::SearchOutcome::Interrupted).
pub trait RenderHook {
    fn render(&mut self, grid: &Grid, event: SearchEvent) -> ControlFlow<()>;
}

impl<F> RenderHook for F
where
    F: FnMut(&Grid, SearchEvent) -> ControlFlow<()>,
{
    #[inline]
    fn render(&mut self, grid: &Grid, event: SearchEvent) -> ControlFlow<()> {
        self(grid, event)
    }
}

/// A hook that never renders and never interrupts.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoRender;

impl RenderHook for NoRender {
    #[inline]
    fn render(&mut self, _grid: &Grid, _event: SearchEvent) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
