//! Session and host settings.

use std::path::PathBuf;
use std::time::Duration;

use pathviz_core::DEFAULT_DENSITY;

/// Cells per side of the grid.
pub const DEFAULT_SIZE: i32 = 50;

/// Logical width shared evenly among the rows.
pub const DEFAULT_LOGICAL_WIDTH: i32 = 600;

/// Pause after each rendered search step.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 5;

/// Smallest grid that still has two distinct interior cells.
pub const MIN_SIZE: i32 = 4;

/// Largest accepted grid.
pub const MAX_SIZE: i32 = 1024;

/// Grid and maze settings for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub size: i32,
    pub logical_width: i32,
    /// Barrier probability used when regenerating a random maze.
    pub density: f64,
    /// Seed for maze generation; drawn at random when `None`.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            logical_width: DEFAULT_LOGICAL_WIDTH,
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}

/// Settings for the terminal host around a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostConfig {
    pub frame_delay_ms: u64,
    /// Where log records go while the terminal is in raw mode.
    pub log_file: Option<PathBuf>,
    pub headless: bool,
}

impl HostConfig {
    #[inline]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SessionConfig::default();
        assert_eq!(c.size, 50);
        assert_eq!(c.logical_width, 600);
        assert_eq!(c.density, 0.2);
        assert_eq!(c.seed, None);
    }

    #[test]
    fn frame_delay() {
        let h = HostConfig {
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            ..HostConfig::default()
        };
        assert_eq!(h.frame_delay(), Duration::from_millis(5));
    }
}
