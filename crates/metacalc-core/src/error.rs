use thiserror::Error;

use crate::chart::ChartKey;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Record {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Baseline chart {0} not found")]
    BaselineNotFound(ChartKey),

    #[error("Baseline record index {index} out of range ({len} records)")]
    BaselineIndexOutOfRange { index: usize, len: usize },

    #[error("No record matched the baseline predicate")]
    NoBaselineMatch,

    #[error("No records to normalize")]
    EmptyInput,

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
