// File: crates/waffle-core/src/config.rs
// Summary: Immutable run configuration: quarter calendar, brand palette, paths and render settings.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use skia_safe as skia;

use crate::chart::RenderOptions;
use crate::theme::{hex, Theme};

/// Quarter labels present in the source CSV, oldest first.
pub const DEFAULT_QUARTERS: [&str; 6] = ["Q2 2021", "Q3 2021", "Q4 2021", "Q1 2022", "Q2 2022", "Q3 2022"];

/// Parse a label like `"Q3 2022"` into the first day of that quarter.
pub fn parse_quarter_label(label: &str) -> Option<NaiveDate> {
    let (q, year) = label.trim().split_once(' ')?;
    let q: u32 = q.strip_prefix('Q')?.parse().ok()?;
    if !(1..=4).contains(&q) { return None; }
    let year: i32 = year.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, (q - 1) * 3 + 1, 1)
}

/// Ordered quarter label -> start date lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct QuarterCalendar {
    quarters: Vec<(String, NaiveDate)>,
}

impl QuarterCalendar {
    pub fn new(quarters: Vec<(String, NaiveDate)>) -> Self {
        Self { quarters }
    }

    /// Build from labels of the form `"Qn YYYY"`; labels that do not parse are dropped.
    pub fn from_labels(labels: &[&str]) -> Self {
        let quarters = labels
            .iter()
            .filter_map(|l| parse_quarter_label(l).map(|d| (l.to_string(), d)))
            .collect();
        Self { quarters }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.quarters.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize { self.quarters.len() }

    pub fn is_empty(&self) -> bool { self.quarters.is_empty() }

    /// Start date for `label`, or `None` when the label is unknown.
    pub fn start_date(&self, label: &str) -> Option<NaiveDate> {
        self.quarters.iter().find(|(l, _)| l == label).map(|(_, d)| *d)
    }

    /// Most recent quarter.
    pub fn latest(&self) -> Option<&str> {
        self.quarters.iter().max_by_key(|(_, d)| *d).map(|(l, _)| l.as_str())
    }

    /// Label of the quarter starting exactly one year before `label`, if the calendar has it.
    pub fn year_before(&self, label: &str) -> Option<&str> {
        let start = self.start_date(label)?;
        let target = start.with_year(start.year() - 1)?;
        self.quarters.iter().find(|(_, d)| *d == target).map(|(l, _)| l.as_str())
    }
}

impl Default for QuarterCalendar {
    fn default() -> Self { Self::from_labels(&DEFAULT_QUARTERS) }
}

/// Fixed display position and swatch color for one brand.
#[derive(Clone, Debug, PartialEq)]
pub struct BrandStyle {
    pub name: String,
    pub order: u32,
    pub color: skia::Color,
}

impl BrandStyle {
    pub fn new(name: impl Into<String>, order: u32, color: skia::Color) -> Self {
        Self { name: name.into(), order, color }
    }
}

/// Brand -> (order, color) lookup with an explicit default bucket.
///
/// Brands without an override share `default_order` and `default_color`.
#[derive(Clone, Debug)]
pub struct BrandPalette {
    pub overrides: Vec<BrandStyle>,
    pub default_order: u32,
    pub default_color: skia::Color,
    /// Catch-all bucket left out when picking the leading brands for the commentary.
    pub aggregate_brand: Option<String>,
    descriptors: Vec<(String, String)>,
}

impl BrandPalette {
    pub fn new(default_order: u32, default_color: skia::Color) -> Self {
        Self { overrides: Vec::new(), default_order, default_color, aggregate_brand: None, descriptors: Vec::new() }
    }

    pub fn with_override(mut self, style: BrandStyle) -> Self {
        self.overrides.push(style);
        self
    }

    pub fn with_aggregate(mut self, brand: impl Into<String>) -> Self {
        self.aggregate_brand = Some(brand.into());
        self
    }

    /// Attach a short phrase introducing `brand` in the commentary, e.g. "The Chinese company".
    pub fn describe(mut self, brand: impl Into<String>, descriptor: impl Into<String>) -> Self {
        self.descriptors.push((brand.into(), descriptor.into()));
        self
    }

    pub fn lookup(&self, brand: &str) -> Option<&BrandStyle> {
        self.overrides.iter().find(|s| s.name == brand)
    }

    pub fn order_for(&self, brand: &str) -> u32 {
        self.lookup(brand).map_or(self.default_order, |s| s.order)
    }

    pub fn color_for(&self, brand: &str) -> skia::Color {
        self.lookup(brand).map_or(self.default_color, |s| s.color)
    }

    pub fn descriptor_for(&self, brand: &str) -> Option<&str> {
        self.descriptors.iter().find(|(b, _)| b == brand).map(|(_, d)| d.as_str())
    }

    pub fn is_aggregate(&self, brand: &str) -> bool {
        self.aggregate_brand.as_deref() == Some(brand)
    }
}

impl Default for BrandPalette {
    /// BYD Auto has no override; it sits in the default bucket at order 1.
    fn default() -> Self {
        Self::new(1, hex(0xfa6161))
            .with_override(BrandStyle::new("Tesla", 2, hex(0xad61fa)))
            .with_override(BrandStyle::new("Volkswagen", 3, hex(0xfaad61)))
            .with_override(BrandStyle::new("GAC Motor", 4, hex(0xfafa61)))
            .with_override(BrandStyle::new("Wuling", 5, hex(0x61fad4)))
            .with_override(BrandStyle::new("Others", 6, hex(0x636efa)))
            .with_aggregate("Others")
            .describe("BYD Auto", "The Chinese company")
    }
}

/// Everything one run needs; `Default` reproduces the fixed script constants.
#[derive(Clone)]
pub struct WaffleConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub calendar: QuarterCalendar,
    pub palette: BrandPalette,
    pub theme: Theme,
    pub render: RenderOptions,
}

impl Default for WaffleConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Global Electric Vehicle Market Share.csv"),
            output: PathBuf::from("waffle.png"),
            calendar: QuarterCalendar::default(),
            palette: BrandPalette::default(),
            theme: Theme::default(),
            render: RenderOptions::default(),
        }
    }
}
