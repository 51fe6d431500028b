//! pathviz: an interactive grid pathfinding visualizer.
//!
//! A [`Session`] owns the grid and dispatches user [`Command`]s; the
//! [`host`] module drives it from a terminal and [`headless`] runs it
//! without one.

pub mod config;
pub mod headless;
pub mod host;
pub mod session;

pub use config::{HostConfig, SessionConfig};
pub use session::{Algorithm, Command, Dispatch, SearchReport, Session};
