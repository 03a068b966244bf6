//! Colour-table sidecar loading
//!
//! Legacy formatting metadata is extracted by an external tool into a JSON
//! list of `{row, column, key, rgb?}` entries at absolute coordinates.

use crate::error::{IngestError, IngestResult};
use qx_matrix::CellColorTable;
use std::path::Path;

/// Parse a colour table from JSON text
///
/// # Errors
///
/// [`IngestError::ColorTableFormat`] when the text is not a valid entry list.
pub fn parse_color_table(json: &str) -> IngestResult<CellColorTable> {
    Ok(serde_json::from_str(json)?)
}

/// Read a colour table sidecar file
///
/// # Errors
///
/// Fails when the file cannot be read or does not parse.
pub fn load_color_table(path: impl AsRef<Path>) -> IngestResult<CellColorTable> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::ColorTableIo {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_color_table(&text)?;
    tracing::info!(path = %path.display(), cells = table.len(), "colour table loaded");
    Ok(table)
}
