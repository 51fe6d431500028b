use crate::geom::Pos;

/// Errors raised by grid accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("position {pos} is outside the {size}x{size} grid")]
    OutOfBounds { pos: Pos, size: i32 },
    #[error("invalid grid size {0}")]
    InvalidSize(i32),
}
