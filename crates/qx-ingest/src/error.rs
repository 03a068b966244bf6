//! Error types for ingest

use std::path::PathBuf;

/// Ingest errors
///
/// Every variant is terminal for the file being loaded.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Workbook could not be opened or recognised
    #[error("failed to open workbook {}: {source}", path.display())]
    Open {
        /// File that failed
        path: PathBuf,
        /// Decoder error
        #[source]
        source: calamine::Error,
    },

    /// In-memory workbook could not be decoded
    #[error("failed to decode workbook bytes: {0}")]
    Decode(#[source] calamine::Error),

    /// Workbook has no worksheet
    #[error("workbook contains no sheets")]
    NoSheets,

    /// Requested sheet does not exist
    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    /// Worksheet could not be read
    #[error("failed to read sheet '{sheet}': {source}")]
    Sheet {
        /// Sheet name
        sheet: String,
        /// Decoder error
        #[source]
        source: calamine::Error,
    },

    /// Colour table file could not be read
    #[error("failed to read colour table {}: {source}", path.display())]
    ColorTableIo {
        /// File that failed
        path: PathBuf,
        /// I/O error
        #[source]
        source: std::io::Error,
    },

    /// Colour table is not valid JSON
    #[error("invalid colour table: {0}")]
    ColorTableFormat(#[from] serde_json::Error),
}

/// Result type alias for ingest
pub type IngestResult<T> = Result<T, IngestError>;
