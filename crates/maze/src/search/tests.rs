//! Scenario tests, a brute-force oracle cross-check, and search properties.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;

use super::*;
use crate::grid::{Cell, Grid};
use crate::orientation::Orientation;
use crate::rand_maze::{draw_maze, Markers, MazeCfg, ReplayToken};

const EXAMPLE_SMALL: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

const EXAMPLE_LARGE: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

fn grid(text: &str) -> Grid {
    text.parse().expect("test maze parses")
}

fn cells(list: &[(i32, i32)]) -> BTreeSet<Cell> {
    list.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

fn start_state(g: &Grid, cfg: SearchCfg) -> State {
    State::new(g.start(), cfg.start_facing)
}

/// Fixed-point relaxation over every state until nothing changes.
/// Slow but independent of the frontier order.
fn brute_force_costs(g: &Grid, from: State, cfg: SearchCfg) -> HashMap<State, u64> {
    let sg = StateGraph::new(g, cfg);
    let mut dist: HashMap<State, u64> = HashMap::new();
    dist.insert(from, 0);
    loop {
        let mut changed = false;
        let snapshot: Vec<(State, u64)> = dist.iter().map(|(&s, &c)| (s, c)).collect();
        for (u, cu) in snapshot {
            for e in sg.edges(u) {
                let cand = cu + e.weight;
                let better = dist.get(&e.to).map_or(true, |&cv| cand < cv);
                if better {
                    dist.insert(e.to, cand);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Cells of every state `s` with `d(start, s) + d(s, exit) == optimum`.
fn brute_force_optimal_cells(g: &Grid, cfg: SearchCfg, optimum: u64) -> BTreeSet<Cell> {
    let from_start = brute_force_costs(g, start_state(g, cfg), cfg);
    let mut out = BTreeSet::new();
    for (&s, &d1) in &from_start {
        let to_exit = brute_force_costs(g, s, cfg);
        let d2 = Orientation::ALL
            .iter()
            .filter_map(|&o| to_exit.get(&State::new(g.exit(), o)))
            .min();
        if d2.is_some_and(|&d2| d1 + d2 == optimum) {
            out.insert(s.cell);
        }
    }
    out
}

fn sorted_preds(preds: &PredecessorTable) -> HashMap<State, Vec<State>> {
    preds
        .iter()
        .map(|(&s, p)| {
            let mut p = p.clone();
            p.sort();
            (s, p)
        })
        .collect()
}

#[test]
fn straight_corridor_no_turns() {
    let g = grid("S..E\n");
    let out = solve_with_defaults(&g).unwrap();
    assert_eq!(
        out,
        Outcome::Reached {
            cost: 3,
            cells: cells(&[(0, 0), (1, 0), (2, 0), (3, 0)])
        }
    );
}

#[test]
fn single_turn_follows_l_shape() {
    let g = grid("##E\nS..\n");
    let out = solve_with_defaults(&g).unwrap();
    assert_eq!(out.cost(), Some(3 + 1000));
    let Outcome::Reached { cells: got, .. } = out else {
        panic!("exit should be reachable");
    };
    assert_eq!(got, cells(&[(0, 1), (1, 1), (2, 1), (2, 0)]));
}

#[test]
fn reversal_takes_two_turns() {
    let g = grid("E.S\n");
    let out = solve_with_defaults(&g).unwrap();
    assert_eq!(out.cost(), Some(2 + 2000));
    assert_eq!(out.cell_count(), Some(3));
}

#[test]
fn symmetric_bypass_unions_both_routes() {
    let g = grid(".....\nS.#.E\n.....\n");
    let out = solve_with_defaults(&g).unwrap();
    assert_eq!(out.cost(), Some(6 + 3000));
    let Outcome::Reached { cells: got, .. } = out else {
        panic!("exit should be reachable");
    };
    // Both detours are present, the dead-end in front of the exit is not.
    assert!(got.contains(&Cell::new(2, 0)));
    assert!(got.contains(&Cell::new(2, 2)));
    assert!(!got.contains(&Cell::new(3, 1)));
    let mut want: Vec<(i32, i32)> = (0..5).flat_map(|x| [(x, 0), (x, 2)]).collect();
    want.extend([(0, 1), (1, 1), (4, 1)]);
    assert_eq!(got, cells(&want));
}

#[test]
fn start_equals_exit() {
    let c = Cell::new(1, 0);
    let g = Grid::new(3, 1, vec![true; 3], Some(c), Some(c)).unwrap();
    let out = solve_with_defaults(&g).unwrap();
    assert_eq!(
        out,
        Outcome::Reached {
            cost: 0,
            cells: [c].into_iter().collect()
        }
    );
}

#[test]
fn walled_off_exit_is_no_path() {
    let g = grid("S#E\n");
    let cfg = SearchCfg::default();
    let tables = compute_costs(&g, start_state(&g, cfg), cfg).unwrap();
    assert_eq!(find_minimal_exit_cost(&tables.costs, g.exit()), None);
    assert_eq!(solve(&g, cfg).unwrap(), Outcome::NoPath);
}

#[test]
fn reference_mazes() {
    let out = solve_with_defaults(&grid(EXAMPLE_SMALL)).unwrap();
    assert_eq!((out.cost(), out.cell_count()), (Some(7036), Some(45)));
    let out = solve_with_defaults(&grid(EXAMPLE_LARGE)).unwrap();
    assert_eq!((out.cost(), out.cell_count()), (Some(11048), Some(64)));
}

#[test]
fn start_has_no_preds_and_others_do() {
    let g = grid(EXAMPLE_SMALL);
    let cfg = SearchCfg::default();
    let start = start_state(&g, cfg);
    let tables = compute_costs(&g, start, cfg).unwrap();
    assert_eq!(tables.preds.get(&start), Some(&Vec::new()));
    for (s, p) in &tables.preds {
        if *s != start {
            assert!(!p.is_empty(), "{s} has no predecessor");
        }
    }
    assert_eq!(tables.preds.len(), tables.costs.len());
    assert!(tables.stats.ties > 0);
    assert_eq!(tables.stats.settled, tables.costs.len());
}

#[test]
fn zero_weights_rejected_before_search() {
    let g = grid("S.E\n");
    let cfg = SearchCfg {
        move_cost: 0,
        ..SearchCfg::default()
    };
    let err = compute_costs(&g, start_state(&g, cfg), cfg).unwrap_err();
    assert_eq!(err, MazeError::ZeroCost { which: "move" });
}

#[test]
fn overflowing_path_cost_is_an_error() {
    // The reversal needs two turns: 2 * (u64::MAX / 2 + 1) does not fit.
    let g = grid("E.S\n");
    let cfg = SearchCfg {
        move_cost: 1,
        turn_cost: u64::MAX / 2 + 1,
        start_facing: Orientation::Right,
    };
    let err = solve(&g, cfg).unwrap_err();
    assert!(matches!(err, MazeError::CostOverflow { .. }), "{err:?}");
    let err = compute_costs(&g, start_state(&g, cfg), cfg).unwrap_err();
    let MazeError::CostOverflow { from, to } = err else {
        panic!("expected a cost overflow");
    };
    assert_eq!(from.cell, to.cell);
    assert!(from.facing.is_orthogonal_to(to.facing));
}

#[test]
fn cheap_turns_change_the_optimum() {
    // With turns cheaper than steps the reference FIFO ordering would be wrong;
    // the heap ordering agrees with the oracle.
    let cfg = SearchCfg {
        move_cost: 10,
        turn_cost: 1,
        start_facing: Orientation::Up,
    };
    let g = grid(EXAMPLE_SMALL);
    let start = start_state(&g, cfg);
    let tables = compute_costs(&g, start, cfg).unwrap();
    assert_eq!(tables.costs, brute_force_costs(&g, start, cfg));
}

fn small_maze() -> impl Strategy<Value = (Grid, SearchCfg)> {
    (
        any::<u64>(),
        1usize..7,
        1usize..7,
        0.0f64..0.45,
        prop_oneof![Just(Markers::Corners), Just(Markers::Uniform)],
        1u64..20,
        1u64..1500,
        prop::sample::select(Orientation::ALL.to_vec()),
    )
        .prop_map(|(seed, width, height, wall_density, markers, mv, turn, facing)| {
            let cfg = MazeCfg {
                width,
                height,
                wall_density,
                markers,
            };
            let g = draw_maze(cfg, ReplayToken { seed, index: 0 }).expect("non-empty maze");
            let scfg = SearchCfg {
                move_cost: mv,
                turn_cost: turn,
                start_facing: facing,
            };
            (g, scfg)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn costs_match_brute_force((g, cfg) in small_maze()) {
        let start = start_state(&g, cfg);
        let tables = compute_costs(&g, start, cfg).unwrap();
        prop_assert_eq!(&tables.costs, &brute_force_costs(&g, start, cfg));
    }

    #[test]
    fn no_edge_can_improve_a_settled_cost((g, cfg) in small_maze()) {
        let tables = compute_costs(&g, start_state(&g, cfg), cfg).unwrap();
        let sg = StateGraph::new(&g, cfg);
        for (&u, &cu) in &tables.costs {
            for e in sg.edges(u) {
                let cv = tables.costs.get(&e.to).copied();
                prop_assert!(cv.is_some_and(|cv| cv <= cu + e.weight));
            }
        }
    }

    #[test]
    fn repeated_searches_agree((g, cfg) in small_maze()) {
        let start = start_state(&g, cfg);
        let a = compute_costs(&g, start, cfg).unwrap();
        let b = compute_costs(&g, start, cfg).unwrap();
        prop_assert_eq!(&a.costs, &b.costs);
        prop_assert_eq!(sorted_preds(&a.preds), sorted_preds(&b.preds));
    }

    #[test]
    fn optimal_cells_match_brute_force((g, cfg) in small_maze()) {
        match solve(&g, cfg).unwrap() {
            Outcome::Reached { cost, cells } => {
                prop_assert!(cells.contains(&g.start()));
                prop_assert!(cells.contains(&g.exit()));
                prop_assert_eq!(cells, brute_force_optimal_cells(&g, cfg, cost));
            }
            Outcome::NoPath => {
                let dist = brute_force_costs(&g, start_state(&g, cfg), cfg);
                prop_assert!(Orientation::ALL
                    .iter()
                    .all(|&o| !dist.contains_key(&State::new(g.exit(), o))));
            }
        }
    }
}
