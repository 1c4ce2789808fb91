// File: crates/waffle-core/src/geometry.rs
// Summary: Pixel layout for the waffle: plot rect, cell rects, legend swatches and paper-relative anchors.

use skia_safe as skia;

use crate::types::{Insets, GRID_SIZE};

/// Legend column, as fractions of plot width measured from the plot's left edge.
pub const LEGEND_X0: f32 = 1.07;
pub const LEGEND_X1: f32 = 1.19;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
    /// Shrink by `d` on every side.
    pub fn inset(&self, d: f32) -> Self {
        Self::from_ltrb(self.left + d, self.top + d, self.right - d, self.bottom - d)
    }
    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Plot rectangle and everything positioned relative to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaffleLayout {
    pub plot: RectF,
}

impl WaffleLayout {
    pub fn new(width: i32, height: i32, insets: &Insets) -> Self {
        let plot = RectF::from_ltrb(
            insets.left as f32,
            insets.top as f32,
            (width - insets.right as i32) as f32,
            (height - insets.bottom as i32) as f32,
        );
        Self { plot }
    }

    pub fn cell_width(&self) -> f32 { self.plot.width() / GRID_SIZE as f32 }

    pub fn cell_height(&self) -> f32 { self.plot.height() / GRID_SIZE as f32 }

    /// Full cell slot at `row` (top = 0), `col` (left = 0), gap not removed.
    pub fn cell(&self, row: usize, col: usize) -> RectF {
        let (w, h) = (self.cell_width(), self.cell_height());
        let left = self.plot.left + col as f32 * w;
        let top = self.plot.top + row as f32 * h;
        RectF::from_ltrb(left, top, left + w, top + h)
    }

    /// Painted part of a cell, leaving `gap` pixels between neighbours.
    pub fn cell_fill(&self, row: usize, col: usize, gap: f32) -> RectF {
        self.cell(row, col).inset(gap * 0.5)
    }

    /// Legend swatch for display `order` (1-based), level with grid row `order - 1`.
    pub fn swatch(&self, order: u32) -> RectF {
        let row = order.saturating_sub(1) as f32;
        let h = self.cell_height();
        let top = self.plot.top + row * h;
        RectF::from_ltrb(self.paper_x(LEGEND_X0), top, self.paper_x(LEGEND_X1), top + h)
    }

    /// Horizontal paper coordinate: 0 = plot left, 1 = plot right.
    pub fn paper_x(&self, frac: f32) -> f32 {
        self.plot.left + frac * self.plot.width()
    }

    /// Vertical paper coordinate: 0 = plot bottom, 1 = plot top, >1 above the plot.
    pub fn paper_y(&self, frac: f32) -> f32 {
        self.plot.bottom - frac * self.plot.height()
    }
}
