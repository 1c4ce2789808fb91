// File: crates/waffle-core/src/lib.rs
// Summary: Core library entry point; exports the load -> reshape -> grid -> render pipeline.

pub mod error;
pub mod types;
pub mod config;
pub mod load;
pub mod reshape;
pub mod grid;
pub mod bands;
pub mod geometry;
pub mod theme;
pub mod text;
pub mod annotate;
pub mod chart;

pub use error::{WaffleError, WaffleResult};
pub use config::{BrandPalette, BrandStyle, QuarterCalendar, WaffleConfig};
pub use load::{load_wide_csv, parse_wide_csv, WideRow, WideTable};
pub use reshape::{parse_share, reshape, to_long, to_wide, MeltedRow, ShareRow};
pub use grid::{assign_order_and_color, build_grid, select_quarter, BrandEntry, WaffleGrid};
pub use bands::{build_color_bands, Band, BandTable};
pub use theme::Theme;
pub use text::{RichText, Span, TextShaper};
pub use chart::{RenderOptions, WaffleChart};
