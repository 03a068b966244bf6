//! Error types for export

/// Export errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV writing failed
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writer could not be flushed
    #[error("export io error: {0}")]
    Io(#[from] std::io::Error),

    /// Output was not valid UTF-8
    #[error("export produced invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for export
pub type ExportResult<T> = Result<T, ExportError>;
