//! Facing directions on the grid.
//!
//! Screen convention: `x` grows to the right, `y` grows downward, so `Up` is
//! `(0, -1)`.

use std::fmt;
use std::str::FromStr;

/// One of the four facing directions.
///
/// Declaration order doubles as the tie-break order used by the search frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Up,
    Right,
    Down,
    Left,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Right,
        Orientation::Down,
        Orientation::Left,
    ];

    /// Unit step `(dx, dy)` taken when moving forward.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Orientation::Up => (0, -1),
            Orientation::Right => (1, 0),
            Orientation::Down => (0, 1),
            Orientation::Left => (-1, 0),
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }

    /// True when `self` and `other` differ by exactly 90°.
    #[inline]
    pub fn is_orthogonal_to(self, other: Orientation) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    /// The two orientations reachable with a single 90° turn
    /// (counterclockwise first, then clockwise).
    #[inline]
    pub fn orthogonal(self) -> [Orientation; 2] {
        if self.is_horizontal() {
            [Orientation::Up, Orientation::Down]
        } else {
            [Orientation::Left, Orientation::Right]
        }
    }

    #[inline]
    pub fn opposite(self) -> Orientation {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Right => Orientation::Left,
            Orientation::Down => Orientation::Up,
            Orientation::Left => Orientation::Right,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Orientation::Up => "up",
            Orientation::Right => "right",
            Orientation::Down => "down",
            Orientation::Left => "left",
        };
        f.write_str(s)
    }
}

impl FromStr for Orientation {
    type Err = String;

    /// Accepts names (`up`, `east`, ...) and arrow glyphs (`^ > v <`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "north" | "n" | "^" => Ok(Orientation::Up),
            "right" | "east" | "e" | ">" => Ok(Orientation::Right),
            "down" | "south" | "s" | "v" => Ok(Orientation::Down),
            "left" | "west" | "w" | "<" => Ok(Orientation::Left),
            other => Err(format!("unknown orientation {other:?}")),
        }
    }
}
