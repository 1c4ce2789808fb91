// File: crates/waffle-core/src/bands.rs
// Summary: Piecewise-constant color table mapping entry indices to swatch colors.

use skia_safe as skia;

use crate::grid::BrandEntry;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
    pub color: skia::Color,
}

/// Equal-width contiguous bands covering [0, 1], one per entry in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct BandTable {
    pub bands: Vec<Band>,
}

impl BandTable {
    pub fn len(&self) -> usize { self.bands.len() }

    pub fn is_empty(&self) -> bool { self.bands.is_empty() }

    /// Band containing `t`; intervals are closed-open except the last, which includes 1.0.
    pub fn color_at(&self, t: f64) -> Option<skia::Color> {
        let t = t.clamp(0.0, 1.0);
        self.bands
            .iter()
            .find(|b| t >= b.lower && t < b.upper)
            .or_else(|| self.bands.last().filter(|b| t >= b.lower))
            .map(|b| b.color)
    }

    /// Color for a 1-based cell index, normalizing `1..=n` onto [0, 1].
    pub fn color_for_index(&self, index: u8) -> Option<skia::Color> {
        let n = self.bands.len();
        if index == 0 || index as usize > n { return None; }
        let t = if n > 1 { (index as f64 - 1.0) / (n as f64 - 1.0) } else { 0.0 };
        self.color_at(t)
    }

    /// Flatten into `(position, color)` stops with each boundary repeated, so the
    /// scale jumps between colors instead of blending.
    pub fn color_stops(&self) -> Vec<(f64, skia::Color)> {
        self.bands
            .iter()
            .flat_map(|b| [(b.lower, b.color), (b.upper, b.color)])
            .collect()
    }
}

/// Single ordered pass over the already-sorted entries.
pub fn build_color_bands(entries: &[BrandEntry]) -> BandTable {
    let n = entries.len();
    let bands = entries
        .iter()
        .enumerate()
        .map(|(i, e)| Band {
            lower: i as f64 / n as f64,
            upper: if i + 1 == n { 1.0 } else { (i + 1) as f64 / n as f64 },
            color: e.color,
        })
        .collect();
    BandTable { bands }
}
