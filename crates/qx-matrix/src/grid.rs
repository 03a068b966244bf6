//! Immutable cell grid
//!
//! A [`Grid`] is the decoded form of one worksheet. Every cell is either
//! absent or a non-empty trimmed string; whitespace-only and empty inputs
//! collapse to absent at construction so no reader ever has to re-check.
//!
//! All accessors are total: reading outside the populated area returns
//! `None`, exactly like an empty cell.

use crate::error::MatrixError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalise raw cell text: trim, and treat empty as absent
#[inline]
#[must_use]
pub fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Dense, row-major, read-only table of optional strings
///
/// Deserialization rejects a cell vector that does not fill `rows * columns`
/// and re-normalises every cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Option<String>>,
}

#[derive(Deserialize)]
struct GridRepr {
    rows: usize,
    columns: usize,
    cells: Vec<Option<String>>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = MatrixError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let expected = repr.rows.checked_mul(repr.columns);
        if expected != Some(repr.cells.len()) {
            return Err(MatrixError::GridShape {
                rows: repr.rows,
                columns: repr.columns,
                cells: repr.cells.len(),
            });
        }
        let cells = repr
            .cells
            .into_iter()
            .map(|cell| cell.and_then(|raw| normalize_cell(&raw)))
            .collect();
        Ok(Self {
            rows: repr.rows,
            columns: repr.columns,
            cells,
        })
    }
}

impl Grid {
    /// Create a grid with no cells
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from rows of optional raw values
    ///
    /// Rows may be ragged; the grid width is the longest row. Every value
    /// goes through [`normalize_cell`].
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let collected: Vec<Vec<Option<String>>> = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|value| value.and_then(|v| normalize_cell(v.as_ref())))
                    .collect()
            })
            .collect();

        let columns = collected.iter().map(Vec::len).max().unwrap_or(0);
        let rows = collected.len();
        let mut cells = Vec::with_capacity(rows * columns);
        for mut row in collected {
            row.resize(columns, None);
            cells.extend(row);
        }

        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Cell value at `(row, column)`; absent when empty or out of bounds
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells[row * self.columns + column].as_deref()
    }

    /// Whether the cell at `(row, column)` trimmed-equals `expected`
    #[inline]
    #[must_use]
    pub fn cell_equals(&self, row: usize, column: usize, expected: &str) -> bool {
        self.cell(row, column) == Some(expected.trim())
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Check if the grid holds no cells at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Non-empty cells of one row from `first_column` onward, in column order
    pub fn row_values(
        &self,
        row: usize,
        first_column: usize,
    ) -> impl Iterator<Item = (usize, &str)> + '_ {
        let end = if row < self.rows { self.columns } else { 0 };
        (first_column..end).filter_map(move |column| self.cell(row, column).map(|v| (column, v)))
    }

    /// Count of non-empty cells
    #[must_use]
    pub fn populated_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Sparse builder for [`Grid`]
///
/// Handy when a matrix is assembled cell by cell (decoders, fixtures).
/// The built grid is just large enough to hold the highest coordinate set.
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    cells: BTreeMap<(usize, usize), String>,
    min_rows: usize,
    min_columns: usize,
}

impl GridBuilder {
    /// Create an empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarantee the built grid is at least `rows` x `columns`
    #[inline]
    #[must_use]
    pub fn with_min_size(mut self, rows: usize, columns: usize) -> Self {
        self.min_rows = self.min_rows.max(rows);
        self.min_columns = self.min_columns.max(columns);
        self
    }

    /// Set a cell, consuming and returning the builder
    #[inline]
    #[must_use]
    pub fn with(mut self, row: usize, column: usize, value: impl AsRef<str>) -> Self {
        self.set(row, column, value);
        self
    }

    /// Set a cell in place; blank values clear it
    pub fn set(&mut self, row: usize, column: usize, value: impl AsRef<str>) -> &mut Self {
        match normalize_cell(value.as_ref()) {
            Some(v) => {
                self.cells.insert((row, column), v);
            }
            None => {
                self.cells.remove(&(row, column));
            }
        }
        self
    }

    /// Finish into an immutable grid
    #[must_use]
    pub fn build(self) -> Grid {
        let rows = self
            .cells
            .keys()
            .map(|(r, _)| r + 1)
            .max()
            .unwrap_or(0)
            .max(self.min_rows);
        let columns = self
            .cells
            .keys()
            .map(|(_, c)| c + 1)
            .max()
            .unwrap_or(0)
            .max(self.min_columns);

        let mut cells = vec![None; rows * columns];
        for ((row, column), value) in self.cells {
            cells[row * columns + column] = Some(value);
        }

        Grid {
            rows,
            columns,
            cells,
        }
    }
}
