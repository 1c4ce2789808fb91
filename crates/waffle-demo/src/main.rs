// File: crates/waffle-demo/src/main.rs
// Summary: Loads the EV market-share CSV, renders the latest quarter as a waffle chart and writes waffle.png.

use anyhow::{Context, Result};
use waffle_core::{load_wide_csv, reshape, WaffleChart, WaffleConfig};

#[cfg(feature = "preview")]
mod preview;

fn main() -> Result<()> {
    env_logger::init();

    // Optional positional overrides: <input.csv> <output.png>
    let mut cfg = WaffleConfig::default();
    let mut args = std::env::args().skip(1);
    if let Some(input) = args.next() {
        cfg.input = input.into();
    }
    if let Some(output) = args.next() {
        cfg.output = output.into();
    }
    println!("Using input file: {}", cfg.input.display());

    let wide = load_wide_csv(&cfg.input, &cfg.calendar)
        .with_context(|| format!("failed to load CSV '{}'", cfg.input.display()))?;
    log::info!("loaded {} brands x {} quarters", wide.rows.len(), wide.quarters.len());

    let rows = reshape(&wide, &cfg.calendar).context("failed to reshape market-share data")?;
    let quarter = cfg.calendar.latest().context("quarter calendar is empty")?;
    log::info!("rendering quarter {quarter}");

    let chart = WaffleChart::from_rows(&rows, quarter, &cfg.palette, &cfg.calendar)?;
    chart
        .render_to_png(&cfg.render, &cfg.theme, &cfg.output)
        .with_context(|| format!("failed to write '{}'", cfg.output.display()))?;
    println!("Wrote {}", cfg.output.display());

    show_preview(&chart, &cfg)
}

#[cfg(feature = "preview")]
fn show_preview(chart: &WaffleChart, cfg: &WaffleConfig) -> Result<()> {
    let (rgba, w, h, _) = chart.render_to_rgba8(&cfg.render, &cfg.theme)?;
    preview::run(rgba, w, h)
}

#[cfg(not(feature = "preview"))]
fn show_preview(_chart: &WaffleChart, _cfg: &WaffleConfig) -> Result<()> {
    log::info!("preview window skipped (build with --features preview)");
    Ok(())
}
