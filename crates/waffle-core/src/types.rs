// File: crates/waffle-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, grid dimensions).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1280;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 720;

/// Cells per side of the waffle grid.
pub const GRID_SIZE: usize = 10;
/// Total cells in the waffle grid; one cell per percentage point.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;
/// Cell value for positions no brand was assigned to.
pub const EMPTY_CELL: u8 = 0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Legend column on the right, title block on top.
    fn default() -> Self {
        Self::new(40, 250, 120, 40)
    }
}
