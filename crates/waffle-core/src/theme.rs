// File: crates/waffle-core/src/theme.rs
// Summary: Colors for the chart surface, gaps, empty cells and text.

use skia_safe as skia;

/// Build an opaque color from a `0xRRGGBB` literal.
pub fn hex(rgb: u32) -> skia::Color {
    skia::Color::new(0xFF00_0000 | (rgb & 0x00FF_FFFF))
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Paper color behind everything, also used to border the legend swatches.
    pub background: skia::Color,
    /// Fill of the plot rectangle; shows through the gaps between cells.
    pub plot_background: skia::Color,
    /// Fill for cells no brand was assigned to.
    pub empty_cell: skia::Color,
    pub label: skia::Color,
    pub title: skia::Color,
    pub commentary: skia::Color,
}

impl Theme {
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: hex(0xF8F9F9),
            plot_background: hex(0xF8F9F9),
            empty_cell: hex(0xE5E7E9),
            label: hex(0x2A3F5F),
            title: hex(0x2A3F5F),
            commentary: hex(0x2A3F5F),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::paper() }
}
