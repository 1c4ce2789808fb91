// File: crates/waffle-core/src/error.rs
// Summary: Error type for loading and reshaping market-share data.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaffleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    #[error("invalid market share '{value}': expected a whole percent such as \"20%\"")]
    InvalidShare { value: String },

    #[error("quarter '{label}' is not in the calendar")]
    UnknownQuarter { label: String },

    #[error("no rows for quarter '{quarter}'")]
    EmptySelection { quarter: String },
}

pub type WaffleResult<T> = Result<T, WaffleError>;
