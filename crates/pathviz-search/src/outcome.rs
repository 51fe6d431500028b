use pathviz_core::Pos;

/// Sentinel distance for cells the search has not reached.
pub const UNREACHABLE: u32 = u32::MAX;

/// Summary of a search that reached its goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalReached {
    pub end: Pos,
    /// Number of steps from start to end (`g[end]`).
    pub cost: u32,
    /// Cells expanded before the goal was popped.
    pub expanded: usize,
}

/// Result of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(GoalReached),
    /// The frontier was exhausted without reaching the end.
    NoPath { expanded: usize },
    /// The render hook asked the search to stop.
    Interrupted,
}

impl SearchOutcome {
    #[inline]
    pub fn goal(&self) -> Option<&GoalReached> {
        match self {
            Self::Found(goal) => Some(goal),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Path cost when found.
    #[inline]
    pub fn cost(&self) -> Option<u32> {
        self.goal().map(|g| g.cost)
    }
}
