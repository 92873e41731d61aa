//! 2D cave generation based on a cellular automaton, with marching-squares
//! contour extraction.
//!
//! Two components run in sequence per generation request: [`generate`]
//! seeds a vertex grid from random noise and smooths it with an asymmetric
//! starve/revive rule, then [`extract`] walks the resulting [`Grid`] and
//! emits an ordered [`RenderPlan`] of line segments, cell fills, and vertex
//! markers for an external renderer to draw.

pub use glam::{IVec2, UVec2, Vec2};

mod cave;
mod contour;
mod grid;

pub use cave::{generate, smooth_pass, CaveConfig, ConfigError};
pub use contour::{cell_geometry, extract, CellGeometry, DrawOp, FillKind, RenderPlan, Segment};
pub use grid::Grid;
