//! On-demand edge generation over (cell, orientation) states.
//!
//! Each state has at most three outgoing edges: one forward move (if the next
//! cell is walkable) and two 90° turns. The graph is never materialized.

use super::types::{Edge, EdgeKind, SearchCfg, State};
use crate::grid::Grid;

/// Lazy view of the state graph of a grid under a cost configuration.
#[derive(Clone, Copy, Debug)]
pub struct StateGraph<'a> {
    grid: &'a Grid,
    move_cost: u64,
    turn_cost: u64,
}

impl<'a> StateGraph<'a> {
    pub fn new(grid: &'a Grid, cfg: SearchCfg) -> Self {
        Self {
            grid,
            move_cost: cfg.move_cost,
            turn_cost: cfg.turn_cost,
        }
    }

    /// Forward move, if the cell ahead is walkable.
    pub fn move_edge(&self, s: State) -> Option<Edge> {
        let ahead = s.cell.step(s.facing);
        self.grid.is_walkable(ahead).then_some(Edge {
            from: s,
            to: State::new(ahead, s.facing),
            weight: self.move_cost,
            kind: EdgeKind::Move,
        })
    }

    /// The two in-place turns. The opposite orientation is never offered.
    pub fn turn_edges(&self, s: State) -> [Edge; 2] {
        s.facing.orthogonal().map(|facing| Edge {
            from: s,
            to: State::new(s.cell, facing),
            weight: self.turn_cost,
            kind: EdgeKind::Turn,
        })
    }

    /// All outgoing edges of `s`: the move first, then the turns.
    pub fn edges(&self, s: State) -> impl Iterator<Item = Edge> {
        let [t0, t1] = self.turn_edges(s);
        [self.move_edge(s), Some(t0), Some(t1)].into_iter().flatten()
    }
}
