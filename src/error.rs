use thiserror::Error;

pub type RatesResult<T> = Result<T, RatesError>;

#[derive(Error, Debug)]
pub enum RatesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid layout: {0}")]
    Layout(String),

    #[error("Failed to open workbook: {0}")]
    Open(String),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("Malformed data in {sheet}!{cell}: {reason}")]
    Malformed {
        sheet: String,
        cell: String,
        reason: String,
    },

    #[error("Failed to save workbook: {0}")]
    Save(String),
}
