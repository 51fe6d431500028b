//! Grid coordinates: [`Pos`].

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A `(row, col)` grid coordinate. Rows grow downwards, columns rightwards.
///
/// Components are signed so that host-side coordinate mapping can produce
/// out-of-range values which the [`Grid`](crate::Grid) then rejects.
/// Ordering is row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours, in up, down, left, right order.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether both components lie in `[0, n)`.
    #[inline]
    pub const fn in_square(self, n: i32) -> bool {
        self.row >= 0 && self.col >= 0 && self.row < n && self.col < n
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
