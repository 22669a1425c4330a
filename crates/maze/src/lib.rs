//! Turn-weighted maze search.
//!
//! Given a grid with walls, a start cell with an initial facing, and an exit
//! cell, compute the minimal cost to reach the exit (forward step = 1, 90° turn
//! = 1000 by default) and the set of cells lying on at least one minimal path.
//!
//! Layout
//! - `grid`, `orientation`: the immutable maze model.
//! - `search`: state graph, cost-ordered search, and reconstruction.
//! - `ascii`: text adapter (`#`, `.`, `S`, `E`). The search never sees text.
//! - `rand_maze`: reproducible random mazes for tests and benches.
//!
//! API Policy
//! - Project-internal crate; breaking changes are fine when they improve the design.

pub mod api;
pub mod ascii;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod rand_maze;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::MazeError;
pub use grid::{Cell, Grid};
pub use orientation::Orientation;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::MazeError;
    pub use crate::grid::{Cell, Grid};
    pub use crate::orientation::Orientation;
    pub use crate::search::{solve, solve_with_defaults, Outcome, SearchCfg, State};
}
