// File: crates/waffle-core/tests/smoke.rs
// Purpose: End-to-end render from the sample CSV; checks output size and a few pixels.

use waffle_core::geometry::WaffleLayout;
use waffle_core::theme::hex;
use waffle_core::types::{EMPTY_CELL, HEIGHT, WIDTH};
use waffle_core::{
    load_wide_csv, reshape, BrandEntry, RenderOptions, Theme, WaffleChart, WaffleConfig,
};

fn sample_chart() -> (WaffleChart, WaffleConfig) {
    let cfg = WaffleConfig::default();
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../").join(&cfg.input);
    let wide = load_wide_csv(&path, &cfg.calendar).expect("load sample");
    let rows = reshape(&wide, &cfg.calendar).expect("reshape");
    let quarter = cfg.calendar.latest().expect("calendar has quarters");
    let chart = WaffleChart::from_rows(&rows, quarter, &cfg.palette, &cfg.calendar).expect("chart");
    (chart, cfg)
}

fn pixel(px: &[u8], stride: usize, x: f32, y: f32) -> [u8; 4] {
    let i = y as usize * stride + x as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn rgba(c: skia_safe::Color) -> [u8; 4] {
    [c.r(), c.g(), c.b(), c.a()]
}

#[test]
fn render_smoke_png() {
    let (chart, cfg) = sample_chart();
    assert_eq!(chart.grid.populated(), 100);

    let out = std::path::PathBuf::from("target/test_out/waffle_smoke.png");
    chart.render_to_png(&cfg.render, &cfg.theme, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let img = image::open(&out).expect("decode png");
    assert_eq!((img.width(), img.height()), (WIDTH as u32, HEIGHT as u32));
}

#[test]
fn render_rgba8_cells_and_legend() {
    let (chart, _) = sample_chart();
    let mut opts = RenderOptions::default();
    opts.draw_text = false; // avoid font variance
    let theme = Theme::default();
    let (px, w, h, stride) = chart.render_to_rgba8(&opts, &theme).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    let layout = WaffleLayout::new(opts.width, opts.height, &opts.insets);

    // Background outside the plot.
    assert_eq!(pixel(&px, stride, 5.0, 5.0), rgba(theme.background));

    // Top-left cell belongs to the first entry, bottom-right to the last.
    let (cx, cy) = layout.cell(0, 0).center();
    assert_eq!(pixel(&px, stride, cx, cy), rgba(chart.entries[0].color));
    let (cx, cy) = layout.cell(9, 9).center();
    assert_eq!(pixel(&px, stride, cx, cy), rgba(hex(0x636efa)));

    // Gap between two cells shows the plot background.
    let left = layout.cell(0, 0);
    assert_eq!(pixel(&px, stride, left.right, left.center().1), rgba(theme.plot_background));

    // Legend swatch for each entry sits level with its row.
    for e in &chart.entries {
        let (sx, sy) = layout.swatch(e.order).center();
        assert_eq!(pixel(&px, stride, sx, sy), rgba(e.color), "swatch for {}", e.brand);
    }
}

#[test]
fn empty_cells_use_theme_color() {
    let entries = vec![
        BrandEntry { brand: "A".into(), market_share: 0.5, order: 1, color: hex(0xfa6161) },
        BrandEntry { brand: "B".into(), market_share: 0.4, order: 2, color: hex(0x636efa) },
    ];
    let chart = WaffleChart::new(entries);
    assert_eq!(chart.grid.get(0, 9), EMPTY_CELL);

    let mut opts = RenderOptions::default();
    opts.draw_text = false;
    let theme = Theme::default();
    let (px, _, _, stride) = chart.render_to_rgba8(&opts, &theme).expect("rgba render");
    let layout = WaffleLayout::new(opts.width, opts.height, &opts.insets);
    let (cx, cy) = layout.cell(4, 9).center();
    assert_eq!(pixel(&px, stride, cx, cy), rgba(theme.empty_cell));
}

#[test]
fn png_bytes_have_configured_dimensions() {
    let (chart, _) = sample_chart();
    let mut opts = RenderOptions::default();
    opts.draw_text = false;
    opts.width = 640;
    opts.height = 360;
    let bytes = chart.render_to_png_bytes(&opts, &Theme::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (640, 360));
}

#[test]
fn chart_requires_known_non_empty_quarter() {
    use waffle_core::WaffleError;
    let (_, cfg) = sample_chart();
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../").join(&cfg.input);
    let rows = reshape(&load_wide_csv(&path, &cfg.calendar).unwrap(), &cfg.calendar).unwrap();

    let err = WaffleChart::from_rows(&rows, "Q4 2022", &cfg.palette, &cfg.calendar).err().expect("unknown quarter");
    assert!(matches!(err, WaffleError::UnknownQuarter { .. }), "got {err:?}");

    let err = WaffleChart::from_rows(&[], "Q3 2022", &cfg.palette, &cfg.calendar).err().expect("empty selection");
    assert!(matches!(err, WaffleError::EmptySelection { .. }), "got {err:?}");
}
