//! Random wall placement for demo and test grids.

use gridsearch_core::{Grid, Position, Tile};
use rand::Rng;

/// Parameters for [`WallGen`].
#[derive(Debug, Clone, PartialEq)]
pub struct WallConfig {
    pub rows: i32,
    pub cols: i32,
    /// Probability (0.0–1.0) that any given cell becomes a wall.
    pub density: f64,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 90,
            density: 0.3,
        }
    }
}

impl WallConfig {
    /// Top-left corner, the usual start.
    pub fn top_left(&self) -> Position {
        Position::ZERO
    }

    /// Bottom-right corner, the usual end.
    pub fn bottom_right(&self) -> Position {
        Position::new(self.rows - 1, self.cols - 1)
    }
}

/// Random grid generator.
pub struct WallGen<R: Rng> {
    pub rng: R,
    pub config: WallConfig,
}

impl<R: Rng> WallGen<R> {
    pub fn new(config: WallConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Fill a fresh grid with independent random walls, then clear every
    /// position in `keep_open`.
    pub fn generate(&mut self, keep_open: &[Position]) -> Grid {
        let density = self.config.density.clamp(0.0, 1.0);
        let mut grid = Grid::new(self.config.rows, self.config.cols);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let r: f64 = self.rng.random();
                if r < density {
                    grid.set(Position::new(row, col), Tile::Wall);
                }
            }
        }
        for &p in keep_open {
            grid.set(p, Tile::Open);
        }
        log::debug!(
            "generated {}x{} grid, {} of {} cells open",
            grid.rows(),
            grid.cols(),
            grid.open_count(),
            grid.len()
        );
        grid
    }
}
