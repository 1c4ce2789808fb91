// File: crates/waffle-core/src/load.rs
// Summary: Loads the wide-format market-share CSV (one row per brand, one column per quarter).

use std::fs::File;
use std::io;
use std::path::Path;

use crate::config::QuarterCalendar;
use crate::error::{WaffleError, WaffleResult};

/// Header of the brand name column.
pub const ID_COLUMN: &str = "Brands";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideRow {
    pub brand: String,
    /// Raw cell text, one per entry in `WideTable::quarters`.
    pub values: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideTable {
    pub id_column: String,
    pub quarters: Vec<String>,
    pub rows: Vec<WideRow>,
}

impl WideTable {
    /// Raw value for `brand` in `quarter`.
    pub fn value(&self, brand: &str, quarter: &str) -> Option<&str> {
        let qi = self.quarters.iter().position(|q| q == quarter)?;
        let row = self.rows.iter().find(|r| r.brand == brand)?;
        row.values.get(qi).map(String::as_str)
    }
}

/// Open `path` and parse it with [`parse_wide_csv`].
pub fn load_wide_csv(path: impl AsRef<Path>, calendar: &QuarterCalendar) -> WaffleResult<WideTable> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = parse_wide_csv(file, calendar)?;
    log::debug!("loaded {} brands x {} quarters from {}", table.rows.len(), table.quarters.len(), path.display());
    Ok(table)
}

/// Parse wide CSV data. The `Brands` column and every calendar quarter must be present;
/// any other columns are ignored.
pub fn parse_wide_csv<R: io::Read>(reader: R, calendar: &QuarterCalendar) -> WaffleResult<WideTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    log::debug!("headers: {:?}", headers.iter().collect::<Vec<_>>());

    let column = |name: &str| -> WaffleResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| WaffleError::MissingColumn { column: name.to_string() })
    };

    let i_brand = column(ID_COLUMN)?;
    let quarter_cols = calendar
        .labels()
        .map(|label| column(label).map(|i| (label.to_string(), i)))
        .collect::<WaffleResult<Vec<_>>>()?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let brand = rec.get(i_brand).unwrap_or_default().to_string();
        let values = quarter_cols
            .iter()
            .map(|(_, i)| rec.get(*i).unwrap_or_default().to_string())
            .collect();
        rows.push(WideRow { brand, values });
    }

    Ok(WideTable {
        id_column: ID_COLUMN.to_string(),
        quarters: quarter_cols.into_iter().map(|(label, _)| label).collect(),
        rows,
    })
}
