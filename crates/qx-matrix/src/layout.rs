//! Fixed layout contract of the QX matrix family
//!
//! ```text
//!            0 ............ 73   75        76      78 ...........
//!   rows 3-14  marker cells       sub-assy  .       defect link (ç)
//!              (any marker)       label
//!   row 15     component names    .         .       defect names
//!   rows 17+   param markers      param     action  .
//!              (è / ê)            name      value
//! ```
//!
//! These offsets are contract constants, not configuration. Every accessor
//! here is total: out-of-range coordinates read as absent.

use crate::grid::Grid;
use std::ops::{Range, RangeInclusive};

/// Row holding the defect names (and the component names)
pub const DEFECT_ROW: usize = 15;

/// First column that may hold a defect name
pub const DEFECT_MIN_COLUMN: usize = 78;

/// Row holding component display names
pub const COMPONENT_NAME_ROW: usize = 15;

/// Columns holding component markers and names
pub const COMPONENT_COLUMNS: RangeInclusive<usize> = 0..=73;

/// Column holding sub-assembly labels
pub const SUB_ASSEMBLY_LABEL_COLUMN: usize = 75;

/// Rows searched when looking a sub-assembly up by name
pub const SUB_ASSEMBLY_LABEL_ROWS: RangeInclusive<usize> = 3..=13;

/// Rows scanned for the defect link marker
pub const SUB_ASSEMBLY_MARKER_ROWS: RangeInclusive<usize> = 3..=14;

/// Rows searched when resolving a colour label to its row
pub const COLOR_LABEL_ROWS: RangeInclusive<usize> = 3..=14;

/// Sole sub-assembly row used when no defect link marker exists
pub const FALLBACK_SUB_ASSEMBLY_ROW: usize = 13;

/// First parameter row
pub const PARAMETER_FIRST_ROW: usize = 17;

/// Column holding parameter names
pub const PARAMETER_NAME_COLUMN: usize = 75;

/// Column holding parameter corrective-action values
pub const PARAMETER_VALUE_COLUMN: usize = 76;

/// Defect-name cells, column order, from [`DEFECT_MIN_COLUMN`] onward
pub fn defect_cells(grid: &Grid) -> impl Iterator<Item = (usize, &str)> + '_ {
    grid.row_values(DEFECT_ROW, DEFECT_MIN_COLUMN)
}

/// Sub-assembly label stored on `row`
#[inline]
#[must_use]
pub fn sub_assembly_label(grid: &Grid, row: usize) -> Option<&str> {
    grid.cell(row, SUB_ASSEMBLY_LABEL_COLUMN)
}

/// Component display name stored for `column`
#[inline]
#[must_use]
pub fn component_name(grid: &Grid, column: usize) -> Option<&str> {
    grid.cell(COMPONENT_NAME_ROW, column)
}

/// Parameter name on `row`
#[inline]
#[must_use]
pub fn parameter_name(grid: &Grid, row: usize) -> Option<&str> {
    grid.cell(row, PARAMETER_NAME_COLUMN)
}

/// Parameter corrective-action value on `row`
#[inline]
#[must_use]
pub fn parameter_value(grid: &Grid, row: usize) -> Option<&str> {
    grid.cell(row, PARAMETER_VALUE_COLUMN)
}

/// Parameter rows present in this grid (possibly empty)
#[inline]
#[must_use]
pub fn parameter_rows(grid: &Grid) -> Range<usize> {
    PARAMETER_FIRST_ROW..grid.row_count().max(PARAMETER_FIRST_ROW)
}

/// First row in `rows` whose label equals `label`
#[must_use]
pub fn find_label_row(grid: &Grid, label: &str, rows: RangeInclusive<usize>) -> Option<usize> {
    rows.into_iter()
        .find(|&row| sub_assembly_label(grid, row) == Some(label))
}

/// Columns in [`COMPONENT_COLUMNS`] whose display name equals `name`
pub fn component_columns_named<'g>(
    grid: &'g Grid,
    name: &'g str,
) -> impl Iterator<Item = usize> + 'g {
    COMPONENT_COLUMNS.filter(move |&column| component_name(grid, column) == Some(name))
}
