//! Error type shared by grid construction, the ASCII adapter, and the search.
//!
//! Configuration problems (missing markers, bad shapes, zero weights) are
//! reported before any search begins. `InvariantViolation` marks a bug in edge
//! generation and is never expected at runtime. An unreachable exit is not an
//! error; see `search::Outcome::NoPath`.

use thiserror::Error;

use crate::grid::Cell;
use crate::search::State;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze has no start marker")]
    MissingStart,

    #[error("maze has no exit marker")]
    MissingExit,

    /// A marker appeared more than once in the input.
    #[error("duplicate {marker} marker at {second} (first at {first})")]
    DuplicateMarker {
        marker: char,
        first: Cell,
        second: Cell,
    },

    #[error("maze has no rows")]
    EmptyGrid,

    #[error("walkability table has {actual} entries, expected {width}x{height}")]
    Shape {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("{marker} marker at {cell} is not on a walkable cell")]
    MarkerOnWall { marker: char, cell: Cell },

    #[error("unknown tile {ch:?} at line {line}, column {column}")]
    UnknownTile { line: usize, column: usize, ch: char },

    /// Edge weights must be strictly positive for the search to terminate
    /// and for the predecessor table to stay acyclic.
    #[error("{which} cost must be positive")]
    ZeroCost { which: &'static str },

    /// Path cost no longer fits in `u64`.
    #[error("cost overflow on edge {from} -> {to}")]
    CostOverflow { from: State, to: State },

    /// Grid dimensions exceed the signed cell coordinate range.
    #[error("maze of {width}x{height} exceeds the coordinate range")]
    TooLarge { width: usize, height: usize },

    #[error("invalid edge {from} -> {to} (weight {weight}): {reason}")]
    InvariantViolation {
        from: State,
        to: State,
        weight: u64,
        reason: &'static str,
    },
}
