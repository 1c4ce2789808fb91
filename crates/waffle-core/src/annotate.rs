// File: crates/waffle-core/src/annotate.rs
// Summary: Builds the title and commentary text from the selected quarter's figures.

use crate::config::{BrandPalette, QuarterCalendar};
use crate::grid::BrandEntry;
use crate::reshape::ShareRow;
use crate::text::RichText;

/// Title and commentary shown above the grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Annotations {
    pub title: RichText,
    pub commentary: RichText,
}

/// Top two entries by share, skipping the palette's aggregate bucket.
pub fn leaders<'a>(entries: &'a [BrandEntry], palette: &BrandPalette) -> Vec<&'a BrandEntry> {
    let mut named: Vec<&BrandEntry> = entries.iter().filter(|e| !palette.is_aggregate(&e.brand)).collect();
    named.sort_by(|a, b| b.market_share.total_cmp(&a.market_share));
    named.truncate(2);
    named
}

fn percent_of(rows: &[ShareRow], brand: &str, quarter: &str) -> Option<i64> {
    rows.iter().find(|r| r.brand == brand && r.quarter == quarter).map(ShareRow::percent)
}

/// Change in whole percentage points for `brand` between two quarters.
pub fn share_delta(rows: &[ShareRow], brand: &str, from: &str, to: &str) -> Option<i64> {
    Some(percent_of(rows, brand, to)? - percent_of(rows, brand, from)?)
}

pub fn title_for(leader: &BrandEntry) -> RichText {
    RichText::new()
        .colored(leader.brand.as_str(), leader.color)
        .text(" is the Global Leader of Electric Car Sales")
}

fn percent_label(e: &BrandEntry) -> String {
    format!("{}%", (e.market_share * 100.0).round() as i64)
}

/// Two clauses: the leader's share and year-on-year change, then a line break and
/// the runner-up's movement. Year-on-year parts are left out when the calendar has
/// no quarter one year back.
pub fn commentary_for(
    rows: &[ShareRow],
    entries: &[BrandEntry],
    palette: &BrandPalette,
    calendar: &QuarterCalendar,
    quarter: &str,
) -> RichText {
    let top = leaders(entries, palette);
    let Some(first) = top.first() else { return RichText::new() };
    let prev = calendar.year_before(quarter);

    let mut text = RichText::new();
    if let Some(d) = palette.descriptor_for(&first.brand) {
        text = text.text(format!("{d} "));
    }
    text = text
        .colored(first.brand.as_str(), first.color)
        .text(" had a market share of ")
        .colored(percent_label(first), first.color)
        .text(format!(" in {quarter}"));
    match prev.and_then(|p| share_delta(rows, &first.brand, p, quarter).map(|d| (p, d))) {
        Some((p, d)) => {
            let word = match d.signum() { 1 => "increase", -1 => "decrease", _ => "change" };
            text = text.text(format!(", a {d:+}pp {word} since {p}."));
        }
        None => text = text.text("."),
    }

    let Some(second) = top.get(1) else { return text };
    text = text.text(" Whereas ").colored(second.brand.as_str(), second.color);
    match prev.and_then(|p| share_delta(rows, &second.brand, p, quarter)) {
        Some(d) => {
            let verb = match d.signum() { 1 => "rise", -1 => "drop", _ => "hold" };
            text = text
                .text(format!(" saw its market share {verb}"))
                .line_break()
                .text(format!("by {d:+}pp to "));
        }
        None => {
            text = text.text(" had").line_break().text("a market share of ");
        }
    }
    text.colored(percent_label(second), second.color).text(".")
}

pub fn annotate(
    rows: &[ShareRow],
    entries: &[BrandEntry],
    palette: &BrandPalette,
    calendar: &QuarterCalendar,
    quarter: &str,
) -> Annotations {
    let title = leaders(entries, palette).first().map(|e| title_for(e)).unwrap_or_default();
    let commentary = commentary_for(rows, entries, palette, calendar, quarter);
    Annotations { title, commentary }
}
