//! Workbook decoding via calamine

use crate::error::{IngestError, IngestResult};
use crate::options::{ImportOptions, SheetSelector};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use qx_matrix::{Grid, GridBuilder};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// Decode one worksheet of the workbook at `path`
///
/// # Errors
///
/// Fails when the file cannot be opened as a workbook, has no sheets, or
/// the selected sheet is missing or unreadable.
pub fn load_grid(path: impl AsRef<Path>, options: &ImportOptions) -> IngestResult<Grid> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = read_sheet(&mut workbook, options)?;
    tracing::info!(
        path = %path.display(),
        rows = grid.row_count(),
        columns = grid.column_count(),
        cells = grid.populated_cells(),
        "workbook loaded"
    );
    Ok(grid)
}

/// Decode one worksheet of an in-memory workbook (e.g. an upload)
///
/// # Errors
///
/// Same conditions as [`load_grid`].
pub fn load_grid_from_bytes(bytes: Vec<u8>, options: &ImportOptions) -> IngestResult<Grid> {
    let size = bytes.len();
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(IngestError::Decode)?;
    let grid = read_sheet(&mut workbook, options)?;
    tracing::info!(
        bytes = size,
        rows = grid.row_count(),
        columns = grid.column_count(),
        "workbook decoded"
    );
    Ok(grid)
}

fn read_sheet<RS>(workbook: &mut Sheets<RS>, options: &ImportOptions) -> IngestResult<Grid>
where
    RS: Read + Seek,
{
    let names = workbook.sheet_names();
    if names.is_empty() {
        return Err(IngestError::NoSheets);
    }

    let sheet = match &options.sheet {
        SheetSelector::Index(index) => names
            .get(*index)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound(options.sheet.to_string()))?,
        SheetSelector::Name(name) => names
            .iter()
            .find(|candidate| *candidate == name)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound(name.clone()))?,
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| IngestError::Sheet {
            sheet: sheet.clone(),
            source,
        })?;

    tracing::debug!(sheet = %sheet, start = ?range.start(), end = ?range.end(), "decoding sheet");
    Ok(range_to_grid(&range, options))
}

/// Place every cell of `range` at its absolute worksheet coordinate
fn range_to_grid(range: &Range<Data>, options: &ImportOptions) -> Grid {
    let Some((start_row, start_col)) = range.start() else {
        return Grid::empty();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);

    let mut builder = GridBuilder::new();
    let mut skipped = 0usize;
    for (row, column, data) in range.cells() {
        let (row, column) = (start_row + row, start_col + column);
        if !options.admits(row, column) {
            skipped += 1;
            continue;
        }
        if let Some(text) = cell_text(data) {
            builder.set(row, column, text);
        }
    }

    if skipped > 0 {
        tracing::warn!(
            skipped,
            max_rows = ?options.max_rows,
            max_cols = ?options.max_cols,
            "cells beyond import caps were dropped"
        );
    }
    builder.build()
}

/// Text form of a decoded cell; `None` for empty cells and empty strings
///
/// Whole floats print without a fractional part, booleans as `TRUE` /
/// `FALSE`, errors as `#` plus the error kind, dates as their serial number.
#[must_use]
pub fn cell_text(data: &Data) -> Option<String> {
    match data {
        Data::Empty => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Float(n) => Some(format_number(*n)),
        Data::Int(n) => Some(n.to_string()),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(e) => Some(format!("#{e:?}")),
        Data::DateTime(dt) => Some(format_number(dt.as_f64())),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
