//! Text maze adapter: `#` wall, `.` floor, `S` start, `E` exit.
//!
//! Kept apart from the search so the core never sees text. Rows may be ragged;
//! missing trailing cells are treated as walls. Trailing `\r` and blank lines
//! at the end of the input are ignored.

use std::str::FromStr;

use crate::error::MazeError;
use crate::grid::{Cell, Grid};

const WALL: char = '#';
const FLOOR: char = '.';
const START: char = 'S';
const EXIT: char = 'E';

/// Parse a text maze into a `Grid`.
pub fn parse(input: &str) -> Result<Grid, MazeError> {
    let mut rows: Vec<&str> = input.lines().map(|l| l.trim_end_matches('\r')).collect();
    while rows.last().is_some_and(|l| l.trim().is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        return Err(MazeError::EmptyGrid);
    }
    let height = rows.len();
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let len = width
        .checked_mul(height)
        .filter(|_| i32::try_from(width).is_ok() && i32::try_from(height).is_ok())
        .ok_or(MazeError::TooLarge { width, height })?;
    let mut walkable = vec![false; len];
    let mut start: Option<Cell> = None;
    let mut exit: Option<Cell> = None;

    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let cell = cell_at(x, y, width, height)?;
            let open = match ch {
                WALL => false,
                FLOOR => true,
                START => {
                    place(&mut start, START, cell)?;
                    true
                }
                EXIT => {
                    place(&mut exit, EXIT, cell)?;
                    true
                }
                other => {
                    return Err(MazeError::UnknownTile {
                        line: y + 1,
                        column: x + 1,
                        ch: other,
                    })
                }
            };
            walkable[y * width + x] = open;
        }
    }
    Grid::new(width, height, walkable, start, exit)
}

fn cell_at(x: usize, y: usize, width: usize, height: usize) -> Result<Cell, MazeError> {
    match (i32::try_from(x), i32::try_from(y)) {
        (Ok(x), Ok(y)) => Ok(Cell::new(x, y)),
        _ => Err(MazeError::TooLarge { width, height }),
    }
}

fn place(slot: &mut Option<Cell>, marker: char, cell: Cell) -> Result<(), MazeError> {
    match *slot {
        Some(first) => Err(MazeError::DuplicateMarker {
            marker,
            first,
            second: cell,
        }),
        None => {
            *slot = Some(cell);
            Ok(())
        }
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
