use glam::{IVec2, UVec2};
use rand::RngCore;
use thiserror::Error;

use crate::Grid;

/// Parameters for one generation run.
///
/// `size` counts cells; the automaton operates on a vertex grid one larger
/// in each dimension, so the contour pass has four corners per cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaveConfig {
    pub size: UVec2,
    /// Probability in `[0, 1]` that a vertex starts closed.
    pub fill_chance: f32,
    /// An open vertex with fewer than this many open neighbors closes.
    pub starve: u8,
    /// A vertex with more than this many open neighbors opens.
    pub revive: u8,
    pub steps: u32,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            size: UVec2::new(80, 60),
            fill_chance: 0.4,
            starve: 4,
            revive: 5,
            steps: 4,
        }
    }
}

impl CaveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size.x < 1 || self.size.y < 1 {
            return Err(ConfigError::EmptyGrid(self.size));
        }
        if !(0.0..=1.0).contains(&self.fill_chance) {
            return Err(ConfigError::FillChanceOutOfRange(self.fill_chance));
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1 cells, got {0}")]
    EmptyGrid(UVec2),
    #[error("fill chance must be within [0, 1], got {0}")]
    FillChanceOutOfRange(f32),
}

/// Runs one full generation: random initialization followed by
/// `config.steps` smoothing passes.
///
/// Deterministic for a fixed `prng` sequence; `steps == 0` returns the raw
/// initialization unmodified.
pub fn generate(config: &CaveConfig, mut prng: impl RngCore) -> Result<Grid, ConfigError> {
    config.validate()?;

    #[cfg(feature = "trace")]
    let _span = tracing::info_span!("generate").entered();

    let mut grid = Grid::new(config.size + UVec2::ONE);
    grid.fill_rand(config.fill_chance, &mut prng);
    for _ in 0..config.steps {
        grid = smooth_pass(&grid, config.starve, config.revive);
    }
    Ok(grid)
}

/// One smoothing pass, double-buffered: reads only from `src` and returns a
/// fresh grid, so no in-pass mutation is visible to later vertices.
///
/// The rule is asymmetric and ordered: an open vertex starves closed when
/// its open-neighbor count drops below `starve`; otherwise any vertex with
/// more than `revive` open neighbors opens; otherwise it keeps its state.
pub fn smooth_pass(src: &Grid, starve: u8, revive: u8) -> Grid {
    #[cfg(feature = "trace")]
    let _span = tracing::info_span!("smooth").entered();

    let mut next = Grid::new(src.size);
    next.data = Vec::with_capacity(src.data.len());
    for j in 0..src.size.y {
        for i in 0..src.size.x {
            let pos = IVec2::new(i as i32, j as i32);
            let open = src.data[src.to_index(UVec2::new(i, j))];
            let count = src.count_open_neighbors(pos);
            let state = if open && count < starve {
                false
            } else if count > revive {
                true
            } else {
                open
            };
            next.data.push(state);
        }
    }
    next
}
