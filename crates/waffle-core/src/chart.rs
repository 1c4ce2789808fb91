// File: crates/waffle-core/src/chart.rs
// Summary: WaffleChart and the headless rendering pipeline (Skia CPU raster surface -> RGBA -> PNG).

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use crate::annotate::{annotate, Annotations};
use crate::bands::{build_color_bands, BandTable};
use crate::config::{BrandPalette, QuarterCalendar};
use crate::error::{WaffleError, WaffleResult};
use crate::geometry::WaffleLayout;
use crate::grid::{assign_order_and_color, build_grid, select_quarter, BrandEntry, WaffleGrid};
use crate::reshape::ShareRow;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, EMPTY_CELL, GRID_SIZE, HEIGHT, WIDTH};

/// Title sits 0.12 plot-heights above the plot, commentary 0.03.
const TITLE_PAPER_Y: f32 = 1.12;
const COMMENTARY_PAPER_Y: f32 = 1.03;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Pixels left unpainted between neighbouring cells.
    pub cell_gap: f32,
    pub swatch_border: f32,
    pub title_size: f32,
    pub commentary_size: f32,
    pub label_size: f32,
    /// Off in tests to avoid font variance across machines.
    pub draw_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            cell_gap: 3.0,
            swatch_border: 3.0,
            title_size: 24.0,
            commentary_size: 16.0,
            label_size: 16.0,
            draw_text: true,
        }
    }
}

pub struct WaffleChart {
    pub grid: WaffleGrid,
    pub bands: BandTable,
    pub entries: Vec<BrandEntry>,
    pub annotations: Annotations,
}

impl WaffleChart {
    /// Grid and band table from entries already sorted by display order.
    pub fn new(entries: Vec<BrandEntry>) -> Self {
        let grid = build_grid(&entries);
        let bands = build_color_bands(&entries);
        Self { grid, bands, entries, annotations: Annotations::default() }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Select `quarter` (which must be in the calendar), order and color its brands, then build grid, bands and text.
    pub fn from_rows(
        rows: &[ShareRow],
        quarter: &str,
        palette: &BrandPalette,
        calendar: &QuarterCalendar,
    ) -> WaffleResult<Self> {
        if calendar.start_date(quarter).is_none() {
            return Err(WaffleError::UnknownQuarter { label: quarter.to_string() });
        }
        let selected = select_quarter(rows, quarter);
        if selected.is_empty() {
            return Err(WaffleError::EmptySelection { quarter: quarter.to_string() });
        }
        let entries = assign_order_and_color(&selected, palette);
        let annotations = annotate(rows, &entries, palette, calendar, quarter);
        Ok(Self::new(entries).with_annotations(annotations))
    }

    /// Fill color for a grid cell value.
    pub fn cell_color(&self, value: u8, theme: &Theme) -> skia::Color {
        if value == EMPTY_CELL {
            return theme.empty_cell;
        }
        self.bands.color_for_index(value).unwrap_or(theme.empty_cell)
    }

    /// Render into a tightly packed RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions, theme: &Theme) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        {
            let canvas = surface.canvas();
            self.draw(canvas, opts, theme);
        }

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut px = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((px, opts.width as u32, opts.height as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions, theme: &Theme) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(opts, theme)?;
        let img = image::RgbaImage::from_raw(w, h, px)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        theme: &Theme,
        output_png_path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts, theme)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, theme: &Theme) {
        let layout = WaffleLayout::new(opts.width, opts.height, &opts.insets);

        canvas.clear(theme.background);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.plot_background);
        canvas.draw_rect(layout.plot.to_skia(), &fill);

        // Cells; no axes or tick labels are drawn.
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                fill.set_color(self.cell_color(self.grid.get(row, col), theme));
                canvas.draw_rect(layout.cell_fill(row, col, opts.cell_gap).to_skia(), &fill);
            }
        }

        let shaper = opts.draw_text.then(TextShaper::new);
        self.draw_legend(canvas, &layout, opts, theme, shaper.as_ref());

        if let Some(shaper) = &shaper {
            let x = layout.paper_x(0.0);
            shaper.draw_bottom_left(
                canvas, &self.annotations.title,
                x, layout.paper_y(TITLE_PAPER_Y),
                opts.title_size, theme.title,
            );
            shaper.draw_bottom_left(
                canvas, &self.annotations.commentary,
                x, layout.paper_y(COMMENTARY_PAPER_Y),
                opts.commentary_size, theme.commentary,
            );
        }
    }

    fn draw_legend(
        &self,
        canvas: &skia::Canvas,
        layout: &WaffleLayout,
        opts: &RenderOptions,
        theme: &Theme,
        shaper: Option<&TextShaper>,
    ) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(opts.swatch_border);
        border.set_color(theme.background);

        for e in &self.entries {
            let swatch = layout.swatch(e.order);
            fill.set_color(e.color);
            canvas.draw_rect(swatch.to_skia(), &fill);
            canvas.draw_rect(swatch.to_skia(), &border);

            if let Some(shaper) = shaper {
                let (cx, cy) = swatch.center();
                shaper.draw_centered(canvas, &e.brand, cx, cy, opts.label_size, theme.label);
            }
        }
    }
}
