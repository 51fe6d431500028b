//! The [`Cell`] type: a grid unit with a state tag and cached adjacency.

use crate::geom::Pos;

/// Mutually exclusive state tag of a grid cell.
///
/// `Open`, `Closed` and `Path` are visual tags written by a search; the
/// others are set by the user.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Open,
    Closed,
    Barrier,
    Start,
    End,
    Path,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 7] = [
        Self::Empty,
        Self::Open,
        Self::Closed,
        Self::Barrier,
        Self::Start,
        Self::End,
        Self::Path,
    ];

    /// A search may traverse any cell that is not a barrier.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Barrier)
    }

    /// Start or end marker.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Tags written by a search run, cleared by a soft reset.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }
}

/// A single grid unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    pub state: CellState,
    neighbors: Vec<Pos>,
}

impl Cell {
    /// Create an empty cell at `pos` with no cached adjacency.
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::Empty,
            neighbors: Vec::new(),
        }
    }

    /// The cell's coordinates.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Cached walkable neighbours, in up, down, left, right order.
    ///
    /// Empty until the owning grid rebuilds adjacency.
    #[inline]
    pub fn neighbors(&self) -> &[Pos] {
        &self.neighbors
    }

    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.state.is_walkable()
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: impl IntoIterator<Item = Pos>) {
        self.neighbors.clear();
        self.neighbors.extend(neighbors);
    }

    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }
}
