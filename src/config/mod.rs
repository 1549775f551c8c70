pub mod case_file;
pub mod coefficient_table;

pub use case_file::*;
pub use coefficient_table::*;

use crate::model::InputError;
use crate::types::UnitError;

/// Error types for loading cases and coefficient tables
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unit conversion error: {0}")]
    UnitError(#[from] UnitError),

    #[error(transparent)]
    InputError(#[from] InputError),

    #[error("Unsupported case file format: {0}")]
    UnsupportedFormat(String),
}
