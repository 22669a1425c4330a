//! Exit cost lookup and backward collection of all optimal cells.

use std::collections::{BTreeSet, HashSet};

use super::types::{CostTable, PredecessorTable, State};
use crate::grid::Cell;
use crate::orientation::Orientation;

/// Cheapest cost over the orientations recorded at `exit`; `None` if the exit
/// was never reached.
pub fn find_minimal_exit_cost(costs: &CostTable, exit: Cell) -> Option<u64> {
    exit_states(costs, exit).map(|(_, c)| c).min()
}

/// Union of the cells on every path of cost `minimal` ending at `exit`.
///
/// Walks the predecessor DAG backwards from each exit state whose cost equals
/// `minimal`, using an explicit work-list. Each state is expanded at most once.
pub fn collect_optimal_cells(
    preds: &PredecessorTable,
    costs: &CostTable,
    exit: Cell,
    minimal: u64,
) -> BTreeSet<Cell> {
    let mut work: Vec<State> = exit_states(costs, exit)
        .filter(|&(_, c)| c == minimal)
        .map(|(s, _)| s)
        .collect();
    let mut seen: HashSet<State> = work.iter().copied().collect();
    let mut cells = BTreeSet::new();

    while let Some(s) = work.pop() {
        cells.insert(s.cell);
        let Some(before) = preds.get(&s) else {
            continue;
        };
        for &p in before {
            if seen.insert(p) {
                work.push(p);
            }
        }
    }
    cells
}

fn exit_states(costs: &CostTable, exit: Cell) -> impl Iterator<Item = (State, u64)> + '_ {
    Orientation::ALL.into_iter().filter_map(move |o| {
        let s = State::new(exit, o);
        costs.get(&s).map(|&c| (s, c))
    })
}
