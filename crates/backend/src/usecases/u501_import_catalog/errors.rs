use std::path::PathBuf;
use thiserror::Error;

/// Ошибки импорта каталога. Every variant aborts the run before anything is
/// written.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("unsupported source file '{}': expected .csv or an Excel workbook", .0.display())]
    UnsupportedSource(PathBuf),

    #[error("source appears to be empty")]
    EmptySource,

    #[error("missing required columns: {}", .missing.join(", "))]
    MissingRequiredColumns {
        missing: Vec<String>,
        /// Headers actually present, for the error report
        found: Vec<String>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook error: {0}")]
    Workbook(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<calamine::Error> for IngestionError {
    fn from(err: calamine::Error) -> Self {
        IngestionError::Workbook(err.to_string())
    }
}
