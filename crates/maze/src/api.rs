//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI and benches. Breaking changes are allowed.

// Maze model
pub use crate::ascii::parse as parse_ascii;
pub use crate::error::MazeError;
pub use crate::grid::{Cell, Grid};
pub use crate::orientation::Orientation;
// Random mazes
pub use crate::rand_maze::{draw_maze, MazeCfg, Markers, ReplayToken};
// Search
pub use crate::search::{
    collect_optimal_cells, compute_costs, find_minimal_exit_cost, solve, solve_with_defaults,
    Outcome, SearchCfg, SearchStats, SearchTables, State, StateGraph,
};

/// Parse a text maze and solve it in one call.
///
/// Pre: `text` uses `#`, `.`, `S`, `E`.
/// Post: the two answers as `(cost, cell_count)`, or `None` when the exit is unreachable.
pub fn solve_text(text: &str, cfg: SearchCfg) -> Result<Option<(u64, usize)>, MazeError> {
    let grid = parse_ascii(text)?;
    let outcome = solve(&grid, cfg)?;
    Ok(outcome.cost().zip(outcome.cell_count()))
}
