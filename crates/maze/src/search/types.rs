//! Data types for the state graph and the search tables.
//!
//! Kept small and explicit to make `edges`, `dijkstra`, and `reconstruct` easy
//! to read.

use std::collections::HashMap;
use std::fmt;

use crate::error::MazeError;
use crate::grid::Cell;
use crate::orientation::Orientation;

/// Search-graph node: a cell together with the facing direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub cell: Cell,
    pub facing: Orientation,
}

impl State {
    #[inline]
    pub const fn new(cell: Cell, facing: Orientation) -> Self {
        Self { cell, facing }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.cell, self.facing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    Move,
    Turn,
}

/// Outgoing edge `from → to` with its weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: State,
    pub to: State,
    pub weight: u64,
    pub kind: EdgeKind,
}

impl Edge {
    /// Reject edges the relaxation must never see: zero weight, a move that
    /// is not a single forward step, or a turn that is not exactly 90°
    /// (a reversal included).
    pub fn check(&self) -> Result<(), MazeError> {
        let reason = if self.weight == 0 {
            Some("non-positive weight")
        } else {
            match self.kind {
                EdgeKind::Move if self.from.facing != self.to.facing => {
                    Some("move changes orientation")
                }
                EdgeKind::Move if self.from.cell.step(self.from.facing) != self.to.cell => {
                    Some("move is not a single forward step")
                }
                EdgeKind::Turn if self.from.cell != self.to.cell => Some("turn changes cell"),
                EdgeKind::Turn if self.to.facing == self.from.facing.opposite() => {
                    Some("turn reverses orientation")
                }
                EdgeKind::Turn if !self.from.facing.is_orthogonal_to(self.to.facing) => {
                    Some("turn is not 90 degrees")
                }
                _ => None,
            }
        };
        match reason {
            None => Ok(()),
            Some(reason) => Err(MazeError::InvariantViolation {
                from: self.from,
                to: self.to,
                weight: self.weight,
                reason,
            }),
        }
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Cost of one forward step.
    pub move_cost: u64,
    /// Cost of one 90° turn in place. A reversal costs twice this.
    pub turn_cost: u64,
    /// Facing direction at the start cell.
    pub start_facing: Orientation,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            move_cost: 1,
            turn_cost: 1000,
            start_facing: Orientation::Right,
        }
    }
}

impl SearchCfg {
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.move_cost == 0 {
            return Err(MazeError::ZeroCost { which: "move" });
        }
        if self.turn_cost == 0 {
            return Err(MazeError::ZeroCost { which: "turn" });
        }
        Ok(())
    }
}

/// Minimal known cost per reached state.
pub type CostTable = HashMap<State, u64>;

/// All predecessors achieving each state's minimal cost. The start state maps
/// to an empty list.
pub type PredecessorTable = HashMap<State, Vec<State>>;

/// Counters collected during one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped with their final cost.
    pub settled: usize,
    /// Edges examined while relaxing settled states.
    pub relaxed: usize,
    /// Heap entries discarded because a cheaper cost was already known.
    pub stale: usize,
    /// Equal-cost discoveries appended to an existing predecessor list.
    pub ties: usize,
}

/// Output of `compute_costs`.
#[derive(Clone, Debug, Default)]
pub struct SearchTables {
    pub costs: CostTable,
    pub preds: PredecessorTable,
    pub stats: SearchStats,
}

/// Result of a full query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The exit is reachable; `cells` is the union of all optimal paths.
    Reached {
        cost: u64,
        cells: std::collections::BTreeSet<Cell>,
    },
    NoPath,
}

impl Outcome {
    pub fn cost(&self) -> Option<u64> {
        match self {
            Outcome::Reached { cost, .. } => Some(*cost),
            Outcome::NoPath => None,
        }
    }

    /// Number of distinct cells on any optimal path; `None` when unreachable.
    pub fn cell_count(&self) -> Option<usize> {
        match self {
            Outcome::Reached { cells, .. } => Some(cells.len()),
            Outcome::NoPath => None,
        }
    }
}
