//! Immutable walkability grid with fixed start and exit cells.

use std::fmt;

use crate::error::MazeError;
use crate::orientation::Orientation;

/// Grid coordinate: `x` is the column, `y` the row (growing downward).
///
/// Signed so that stepping off the border yields a representable cell which
/// `Grid::is_walkable` then rejects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step along `o`.
    #[inline]
    pub fn step(self, o: Orientation) -> Cell {
        let (dx, dy) = o.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangular maze: row-major walkability plus the two markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    walkable: Vec<bool>, // row-major, len = width * height
    start: Cell,
    exit: Cell,
}

impl Grid {
    /// Build a grid from a row-major walkability table.
    ///
    /// Fails when either marker is missing, when a dimension does not fit a
    /// cell coordinate, when the table size does not match `width * height`,
    /// or when a marker sits on a wall.
    pub fn new(
        width: usize,
        height: usize,
        walkable: Vec<bool>,
        start: Option<Cell>,
        exit: Option<Cell>,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::EmptyGrid);
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(MazeError::TooLarge { width, height });
        }
        if width.checked_mul(height) != Some(walkable.len()) {
            return Err(MazeError::Shape {
                width,
                height,
                actual: walkable.len(),
            });
        }
        let start = start.ok_or(MazeError::MissingStart)?;
        let exit = exit.ok_or(MazeError::MissingExit)?;
        let grid = Self {
            width,
            height,
            walkable,
            start,
            exit,
        };
        for (marker, cell) in [('S', start), ('E', exit)] {
            if !grid.is_walkable(cell) {
                return Err(MazeError::MarkerOnWall { marker, cell });
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn exit(&self) -> Cell {
        self.exit
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Out-of-range cells count as walls.
    #[inline]
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.index(cell).map_or(false, |i| self.walkable[i])
    }

    /// Number of walkable cells.
    pub fn open_cells(&self) -> usize {
        self.walkable.iter().filter(|&&w| w).count()
    }
}
