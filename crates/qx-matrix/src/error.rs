//! Error types for the matrix model

/// Errors raised while interpreting matrix values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Text is not one of the four relationship markers
    #[error("not a relationship marker: '{0}'")]
    UnknownMarker(String),

    /// Serialized grid whose cell count does not match its dimensions
    #[error("grid of {rows}x{columns} cannot hold {cells} cells")]
    GridShape {
        /// Declared row count
        rows: usize,
        /// Declared column count
        columns: usize,
        /// Cells actually supplied
        cells: usize,
    },
}
