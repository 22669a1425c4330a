//! Turn-weighted maze search over (cell, orientation) states.
//!
//! Purpose
//! - Compute the minimal cost from the start cell (with a fixed initial
//!   facing) to the exit cell, where a forward step and a 90° turn carry
//!   different weights.
//! - Recover the union of cells over *all* minimal-cost paths, not just one.
//!
//! Layout
//! - `types.rs` (states, edges, tables, config), `edges.rs` (lazy state graph),
//!   `dijkstra.rs` (cost-ordered relaxation with tied predecessors), and
//!   `reconstruct.rs` (exit cost and backward cell collection).
//!
//! Notes
//! - A 180° reversal is never a single edge; it costs two turns.
//! - Tables are built per query and owned by the caller afterwards.

mod dijkstra;
mod edges;
mod reconstruct;
mod types;

pub use dijkstra::compute_costs;
pub use edges::StateGraph;
pub use reconstruct::{collect_optimal_cells, find_minimal_exit_cost};
pub use types::{
    CostTable, Edge, EdgeKind, Outcome, PredecessorTable, SearchCfg, SearchStats, SearchTables,
    State,
};

use crate::error::MazeError;
use crate::grid::Grid;

/// Run the full query: search from the start state, then reconstruct.
///
/// An unreachable exit yields `Outcome::NoPath`; reconstruction is skipped.
pub fn solve(grid: &Grid, cfg: SearchCfg) -> Result<Outcome, MazeError> {
    let start = State::new(grid.start(), cfg.start_facing);
    let tables = compute_costs(grid, start, cfg)?;
    let Some(cost) = find_minimal_exit_cost(&tables.costs, grid.exit()) else {
        tracing::debug!(exit = %grid.exit(), "exit_unreachable");
        return Ok(Outcome::NoPath);
    };
    let cells = collect_optimal_cells(&tables.preds, &tables.costs, grid.exit(), cost);
    Ok(Outcome::Reached { cost, cells })
}

/// Convenience: solve with unit moves, 1000-cost turns, facing right.
pub fn solve_with_defaults(grid: &Grid) -> Result<Outcome, MazeError> {
    solve(grid, SearchCfg::default())
}

#[cfg(test)]
mod tests;
