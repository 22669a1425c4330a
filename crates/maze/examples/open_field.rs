//! Timing probe on an open field, where ties are everywhere.
//!
//! Purpose
//! - Show how many optimal cells a wall-free grid yields and how long the
//!   search plus reconstruction takes at that size.

use std::time::Instant;

use maze::api::{solve_with_defaults, Cell, Grid, Outcome};

fn main() {
    let side = 200usize;
    let grid = Grid::new(
        side,
        side,
        vec![true; side * side],
        Some(Cell::new(0, side as i32 - 1)),
        Some(Cell::new(side as i32 - 1, 0)),
    )
    .expect("open field is a valid grid");

    let t0 = Instant::now();
    let outcome = solve_with_defaults(&grid).expect("default costs are valid");
    let ms = t0.elapsed().as_secs_f64() * 1e3;

    match outcome {
        Outcome::Reached { cost, cells } => {
            println!("side={side} cost={cost} optimal_cells={} time_ms={ms:.1}", cells.len());
        }
        Outcome::NoPath => println!("side={side} no path time_ms={ms:.1}"),
    }
}
