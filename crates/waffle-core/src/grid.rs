// File: crates/waffle-core/src/grid.rs
// Summary: Latest-quarter selection, brand ordering and the 10x10 waffle grid.

use skia_safe as skia;

use crate::config::BrandPalette;
use crate::reshape::ShareRow;
use crate::types::{EMPTY_CELL, GRID_CELLS, GRID_SIZE};

/// One brand in the displayed quarter, with its fixed position and color.
#[derive(Clone, Debug, PartialEq)]
pub struct BrandEntry {
    pub brand: String,
    pub market_share: f64,
    pub order: u32,
    pub color: skia::Color,
}

impl BrandEntry {
    /// Number of grid cells this entry occupies.
    pub fn squares(&self) -> usize {
        (self.market_share * GRID_CELLS as f64).round().max(0.0) as usize
    }
}

/// Rows belonging to `quarter` only.
pub fn select_quarter(rows: &[ShareRow], quarter: &str) -> Vec<ShareRow> {
    rows.iter().filter(|r| r.quarter == quarter).cloned().collect()
}

/// Look up each brand's order and color, then stable-sort ascending by order.
/// Brands without an override land in the palette's default bucket; a shared
/// order is reported since both brands would claim the same legend slot.
pub fn assign_order_and_color(rows: &[ShareRow], palette: &BrandPalette) -> Vec<BrandEntry> {
    let mut entries: Vec<BrandEntry> = rows
        .iter()
        .map(|r| BrandEntry {
            brand: r.brand.clone(),
            market_share: r.market_share,
            order: palette.order_for(&r.brand),
            color: palette.color_for(&r.brand),
        })
        .collect();
    entries.sort_by_key(|e| e.order);

    for pair in entries.windows(2) {
        if pair[0].order == pair[1].order {
            log::warn!(
                "brands '{}' and '{}' share display order {}",
                pair[0].brand, pair[1].brand, pair[0].order
            );
        }
    }
    entries
}

/// Fixed 10x10 matrix of 1-based entry indices; `EMPTY_CELL` marks unassigned cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaffleGrid {
    pub cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl WaffleGrid {
    /// Cell at `row` (top = 0) and `col` (left = 0).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Number of cells holding `index`.
    pub fn count(&self, index: u8) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == index).count()
    }

    /// Number of cells assigned to any entry.
    pub fn populated(&self) -> usize {
        GRID_CELLS - self.count(EMPTY_CELL)
    }
}

/// Expand each entry into `round(share * 100)` cells and lay them out column-major:
/// top to bottom within a column, then left to right.
pub fn build_grid(entries: &[BrandEntry]) -> WaffleGrid {
    let mut flat: Vec<u8> = Vec::with_capacity(GRID_CELLS);
    for (i, e) in entries.iter().enumerate() {
        let index = (i + 1).min(u8::MAX as usize) as u8;
        flat.extend(std::iter::repeat(index).take(e.squares()));
    }
    if flat.len() > GRID_CELLS {
        log::warn!("shares add up to {} cells; truncating to {}", flat.len(), GRID_CELLS);
        flat.truncate(GRID_CELLS);
    }
    flat.resize(GRID_CELLS, EMPTY_CELL);

    // Reshape row-major into 10x10, then transpose.
    let mut cells = [[EMPTY_CELL; GRID_SIZE]; GRID_SIZE];
    for (k, &v) in flat.iter().enumerate() {
        let (r, c) = (k / GRID_SIZE, k % GRID_SIZE);
        cells[c][r] = v;
    }
    WaffleGrid { cells }
}
