//! Marching-squares contour extraction.
//!
//! Walks the smoothed vertex grid cell by cell, folds the four corner
//! states into a 4-bit code, and maps each code to line segments or fill
//! markers through a fixed 16-entry table.

use glam::{IVec2, UVec2, Vec2};

use crate::Grid;

/// Corner bit weights; a bit is set when that corner is closed.
const TOP_LEFT: u16 = 0x1000;
const TOP_RIGHT: u16 = 0x0100;
const BOTTOM_RIGHT: u16 = 0x0010;
const BOTTOM_LEFT: u16 = 0x0001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

impl Segment {
    fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillKind {
    /// All four corners open.
    Open,
    /// All four corners closed.
    Enclosed,
}

/// The geometry a single cell contributes, selected by its corner code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellGeometry {
    Fill(FillKind),
    One(Segment),
    Two(Segment, Segment),
}

/// One drawing primitive of a [`RenderPlan`]. Coordinates are in grid
/// space; the renderer scales them to its output surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Segment(Segment),
    Fill { cell: UVec2, kind: FillKind },
    Marker(UVec2),
}

/// Ordered draw operations for one extraction pass: per-cell segments and
/// fills in cell row-major order, then one marker per open vertex in
/// vertex row-major order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderPlan {
    pub ops: Vec<DrawOp>,
}

impl RenderPlan {
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Segment(segment) => Some(segment),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = UVec2> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Marker(pos) => Some(*pos),
            _ => None,
        })
    }
}

/// Maps a cell's corner code to its geometry.
///
/// `code` must be a combination of the four corner weights. Segment
/// endpoints are edge midpoints of the cell at `(x, y)`: top `(x+0.5, y)`,
/// right `(x+1, y+0.5)`, bottom `(x+0.5, y+1)`, left `(x, y+0.5)`.
///
/// The two saddle codes (diagonally opposite corners closed) always take
/// the disconnected two-segment form, never the single diagonal; the
/// rendered output depends on that resolution staying fixed.
pub fn cell_geometry(code: u16, cell: UVec2) -> CellGeometry {
    let x = cell.x as f32;
    let y = cell.y as f32;
    let t = Vec2::new(x + 0.5, y);
    let r = Vec2::new(x + 1.0, y + 0.5);
    let b = Vec2::new(x + 0.5, y + 1.0);
    let l = Vec2::new(x, y + 0.5);

    match code {
        0x0000 => CellGeometry::Fill(FillKind::Open),
        0x0001 => CellGeometry::One(Segment::new(l, b)),
        0x0010 => CellGeometry::One(Segment::new(r, b)),
        0x0011 => CellGeometry::One(Segment::new(l, r)),
        0x0100 => CellGeometry::One(Segment::new(t, r)),
        0x0101 => CellGeometry::Two(Segment::new(r, b), Segment::new(l, t)),
        0x0110 => CellGeometry::One(Segment::new(t, b)),
        0x0111 => CellGeometry::One(Segment::new(l, t)),
        0x1000 => CellGeometry::One(Segment::new(l, t)),
        0x1001 => CellGeometry::One(Segment::new(t, b)),
        0x1010 => CellGeometry::Two(Segment::new(l, b), Segment::new(t, r)),
        0x1011 => CellGeometry::One(Segment::new(t, r)),
        0x1100 => CellGeometry::One(Segment::new(l, r)),
        0x1101 => CellGeometry::One(Segment::new(r, b)),
        0x1110 => CellGeometry::One(Segment::new(l, b)),
        0x1111 => CellGeometry::Fill(FillKind::Enclosed),
        _ => unreachable!("corner code {code:#06x} is not a combination of corner weights"),
    }
}

fn corner_code(grid: &Grid, cell: UVec2) -> u16 {
    let x = cell.x as i32;
    let y = cell.y as i32;
    let mut code = 0;
    if !grid.is_open(IVec2::new(x, y)) {
        code |= TOP_LEFT;
    }
    if !grid.is_open(IVec2::new(x + 1, y)) {
        code |= TOP_RIGHT;
    }
    if !grid.is_open(IVec2::new(x + 1, y + 1)) {
        code |= BOTTOM_RIGHT;
    }
    if !grid.is_open(IVec2::new(x, y + 1)) {
        code |= BOTTOM_LEFT;
    }
    code
}

/// Extracts the drawable contour of a vertex grid.
///
/// The cell grid is one smaller per axis than the vertex grid. Total over
/// any grid; a vertex grid empty in either axis yields an empty plan.
pub fn extract(grid: &Grid) -> RenderPlan {
    #[cfg(feature = "trace")]
    let _span = tracing::info_span!("extract").entered();

    let cells = UVec2::new(grid.size.x.saturating_sub(1), grid.size.y.saturating_sub(1));
    let mut plan = RenderPlan::default();
    for i in 0..cells.x * cells.y {
        let cell = UVec2::new(i % cells.x, i / cells.x);
        match cell_geometry(corner_code(grid, cell), cell) {
            CellGeometry::Fill(kind) => plan.ops.push(DrawOp::Fill { cell, kind }),
            CellGeometry::One(segment) => plan.ops.push(DrawOp::Segment(segment)),
            CellGeometry::Two(first, second) => {
                plan.ops.push(DrawOp::Segment(first));
                plan.ops.push(DrawOp::Segment(second));
            }
        }
    }
    for (index, open) in grid.data.iter().enumerate() {
        if *open {
            plan.ops.push(DrawOp::Marker(grid.from_index(index)));
        }
    }
    plan
}
