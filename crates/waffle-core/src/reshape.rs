// File: crates/waffle-core/src/reshape.rs
// Summary: Wide -> long pivot, quarter start dates and percent-string parsing.

use chrono::NaiveDate;

use crate::config::QuarterCalendar;
use crate::error::{WaffleError, WaffleResult};
use crate::load::{WideRow, WideTable, ID_COLUMN};

/// One (brand, quarter) pair straight out of the pivot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeltedRow {
    pub brand: String,
    pub quarter: String,
    pub market_share_raw: String,
}

/// Fully derived long-format row.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareRow {
    pub brand: String,
    pub quarter: String,
    pub market_share_raw: String,
    /// `None` when the quarter label is not in the calendar.
    pub quarter_start_date: Option<NaiveDate>,
    /// Fraction in [0, 1]; always `parsed percent / 100`.
    pub market_share: f64,
}

impl ShareRow {
    pub fn from_melted(row: MeltedRow, calendar: &QuarterCalendar) -> WaffleResult<Self> {
        let quarter_start_date = attach_date(calendar, &row.quarter);
        let market_share = parse_share(&row.market_share_raw)?;
        Ok(Self {
            brand: row.brand,
            quarter: row.quarter,
            market_share_raw: row.market_share_raw,
            quarter_start_date,
            market_share,
        })
    }

    /// Share as whole percentage points.
    pub fn percent(&self) -> i64 {
        (self.market_share * 100.0).round() as i64
    }
}

/// Pivot quarter columns into rows, brand-major then quarter order.
pub fn to_long(wide: &WideTable) -> Vec<MeltedRow> {
    let mut out = Vec::with_capacity(wide.rows.len() * wide.quarters.len());
    for row in &wide.rows {
        for (quarter, value) in wide.quarters.iter().zip(&row.values) {
            out.push(MeltedRow {
                brand: row.brand.clone(),
                quarter: quarter.clone(),
                market_share_raw: value.clone(),
            });
        }
    }
    out
}

/// Group long rows back into one wide row per brand, in first-seen order.
pub fn to_wide(rows: &[MeltedRow]) -> WideTable {
    let mut quarters: Vec<String> = Vec::new();
    for r in rows {
        if !quarters.contains(&r.quarter) {
            quarters.push(r.quarter.clone());
        }
    }

    let mut out: Vec<WideRow> = Vec::new();
    for r in rows {
        let qi = quarters.iter().position(|q| *q == r.quarter).unwrap_or_default();
        let idx = match out.iter().position(|w| w.brand == r.brand) {
            Some(i) => i,
            None => {
                out.push(WideRow { brand: r.brand.clone(), values: vec![String::new(); quarters.len()] });
                out.len() - 1
            }
        };
        out[idx].values[qi] = r.market_share_raw.clone();
    }

    WideTable { id_column: ID_COLUMN.to_string(), quarters, rows: out }
}

/// Start date for `quarter`; unknown labels yield `None` and a warning, never an error.
pub fn attach_date(calendar: &QuarterCalendar, quarter: &str) -> Option<NaiveDate> {
    let date = calendar.start_date(quarter);
    if date.is_none() {
        log::warn!("quarter '{quarter}' has no start date in the calendar");
    }
    date
}

/// Parse a whole-percent string such as `"20%"` into `0.20`.
pub fn parse_share(raw: &str) -> WaffleResult<f64> {
    let invalid = || WaffleError::InvalidShare { value: raw.to_string() };
    let digits = raw.trim().strip_suffix('%').ok_or_else(invalid)?;
    let percent: u32 = digits.trim().parse().map_err(|_| invalid())?;
    Ok(percent as f64 / 100.0)
}

/// `to_long`, then attach dates and parse every share.
pub fn reshape(wide: &WideTable, calendar: &QuarterCalendar) -> WaffleResult<Vec<ShareRow>> {
    to_long(wide)
        .into_iter()
        .map(|row| ShareRow::from_melted(row, calendar))
        .collect()
}
