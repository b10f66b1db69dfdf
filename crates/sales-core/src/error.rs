// File: crates/sales-core/src/error.rs
// Summary: Error types for dataset loading and chart control.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failure to read or parse the sales dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column `{0}` is missing from the header")]
    MissingColumn(&'static str),

    #[error("line {line}: column `{column}` has non-numeric value {value:?}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Errors raised while driving charts: bad tokens, bad selector input, bad config.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown chart type `{0}`")]
    UnknownChartType(String),

    #[error("chart has no selector `{0}`")]
    UnknownSelector(String),

    #[error("invalid value {value:?} for selector `{selector}`")]
    InvalidSelection { selector: String, value: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}
