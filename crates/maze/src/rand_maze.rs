//! Random mazes (Bernoulli walls + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of grids for property tests and
//!   benchmarks. Every draw is reproducible from `(seed, index)`.
//!
//! Model
//! - Each cell is a wall with probability `wall_density`, independently.
//! - Markers either sit in the bottom-left / top-right corners or are drawn
//!   uniformly (possibly on the same cell). Marker cells are forced open.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::{Cell, Grid};

/// Where the start and exit markers go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Markers {
    /// Start bottom-left, exit top-right.
    Corners,
    /// Both drawn uniformly over the grid.
    Uniform,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct MazeCfg {
    pub width: usize,
    pub height: usize,
    /// Probability that a cell is a wall. Clamped to [0, 1]; NaN means no walls.
    pub wall_density: f64,
    pub markers: Markers,
}

impl Default for MazeCfg {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            wall_density: 0.3,
            markers: Markers::Corners,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random maze. Fails only for a zero-sized configuration.
pub fn draw_maze(cfg: MazeCfg, tok: ReplayToken) -> Result<Grid, MazeError> {
    let (w, h) = (cfg.width, cfg.height);
    if w == 0 || h == 0 {
        return Err(MazeError::EmptyGrid);
    }
    let mut rng = tok.to_std_rng();
    let p = if cfg.wall_density.is_nan() {
        0.0
    } else {
        cfg.wall_density.clamp(0.0, 1.0)
    };
    let mut walkable: Vec<bool> = (0..w * h).map(|_| !rng.gen_bool(p)).collect();
    let (start, exit) = match cfg.markers {
        Markers::Corners => (Cell::new(0, h as i32 - 1), Cell::new(w as i32 - 1, 0)),
        Markers::Uniform => {
            let mut pick = || Cell::new(rng.gen_range(0..w) as i32, rng.gen_range(0..h) as i32);
            (pick(), pick())
        }
    };
    for c in [start, exit] {
        walkable[c.y as usize * w + c.x as usize] = true;
    }
    Grid::new(w, h, walkable, Some(start), Some(exit))
}
