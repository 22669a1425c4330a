//! Cost-ordered relaxation over the state graph, keeping every tied predecessor.
//!
//! The frontier is a min-ordered `BinaryHeap`; states are settled in
//! non-decreasing cost order, so a settled cost is final. Moves (1) and turns
//! (1000) interleave freely, which a FIFO frontier would only get right for
//! favourable inputs.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::BinaryHeap;

use super::edges::StateGraph;
use super::types::{SearchCfg, SearchStats, SearchTables, State};
use crate::error::MazeError;
use crate::grid::Grid;

/// Costs and tied predecessors for every state reachable from `start`.
///
/// Pure in `(grid, start, cfg)`: repeated calls yield equal tables (predecessor
/// lists compare equal as sets).
pub fn compute_costs(
    grid: &Grid,
    start: State,
    cfg: SearchCfg,
) -> Result<SearchTables, MazeError> {
    cfg.validate()?;
    SearchRunner::new(StateGraph::new(grid, cfg)).run(start)
}

/// Runner carrying the graph view and the tables under construction.
struct SearchRunner<'a> {
    graph: StateGraph<'a>,
    out: SearchTables,
    heap: BinaryHeap<Reverse<(u64, State)>>,
}

impl<'a> SearchRunner<'a> {
    fn new(graph: StateGraph<'a>) -> Self {
        Self {
            graph,
            out: SearchTables::default(),
            heap: BinaryHeap::new(),
        }
    }

    fn run(mut self, start: State) -> Result<SearchTables, MazeError> {
        self.out.costs.insert(start, 0);
        self.out.preds.insert(start, Vec::new());
        self.heap.push(Reverse((0, start)));

        while let Some(Reverse((cost, u))) = self.heap.pop() {
            // Skip entries superseded by a cheaper push.
            if self.out.costs.get(&u).is_some_and(|&best| cost > best) {
                self.out.stats.stale += 1;
                continue;
            }
            self.out.stats.settled += 1;
            let graph = self.graph;
            for edge in graph.edges(u) {
                edge.check()?;
                self.out.stats.relaxed += 1;
                let new_cost = cost
                    .checked_add(edge.weight)
                    .ok_or(MazeError::CostOverflow { from: u, to: edge.to })?;
                self.relax(u, edge.to, new_cost);
            }
        }

        log_stats(&self.out.stats, self.out.costs.len());
        Ok(self.out)
    }

    fn relax(&mut self, u: State, v: State, new_cost: u64) {
        match self.out.costs.entry(v) {
            Entry::Vacant(slot) => {
                slot.insert(new_cost);
                self.out.preds.insert(v, vec![u]);
                self.heap.push(Reverse((new_cost, v)));
            }
            Entry::Occupied(mut slot) => {
                let known = *slot.get();
                if new_cost < known {
                    slot.insert(new_cost);
                    self.out.preds.insert(v, vec![u]);
                    self.heap.push(Reverse((new_cost, v)));
                } else if new_cost == known {
                    let preds = self.out.preds.entry(v).or_default();
                    if !preds.contains(&u) {
                        preds.push(u);
                        self.out.stats.ties += 1;
                    }
                }
            }
        }
    }
}

fn log_stats(stats: &SearchStats, reached: usize) {
    tracing::debug!(
        reached,
        settled = stats.settled,
        relaxed = stats.relaxed,
        stale = stats.stale,
        ties = stats.ties,
        "search_done"
    );
}
