//! Cell background colour model
//!
//! Colour is a parallel data channel in the matrix: a component is
//! "validated" for a defect when its cell shares the background of the
//! sub-assembly's cell at the defect column. Colour metadata is often
//! unavailable (modern workbook formats, missing formatting info), so every
//! lookup is best-effort and [`ColorLookup::Unknown`] is a first-class
//! answer rather than an error.
//!
//! Unknown never matches anything, not even another Unknown. A fully
//! degraded source therefore validates nothing.

use crate::grid::Grid;
use crate::layout;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Opaque, comparable colour identifier (palette index or equivalent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorKey(u32);

impl ColorKey {
    /// Wrap a raw identifier
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw identifier
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Result of a colour lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorLookup {
    /// The cell has a known colour
    Known(ColorKey),
    /// No colour information for this cell
    Unknown,
}

impl ColorLookup {
    /// Colour equality where Unknown never matches
    #[inline]
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        match (self, other) {
            (Self::Known(a), Self::Known(b)) => a == b,
            _ => false,
        }
    }

    /// Key if known
    #[inline]
    #[must_use]
    pub fn key(self) -> Option<ColorKey> {
        match self {
            Self::Known(key) => Some(key),
            Self::Unknown => None,
        }
    }

    /// Check if this lookup produced a colour
    #[inline]
    #[must_use]
    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Option<ColorKey>> for ColorLookup {
    fn from(key: Option<ColorKey>) -> Self {
        key.map_or(Self::Unknown, Self::Known)
    }
}

/// Best-effort colour capability keyed by `(row label, column)`
///
/// Implementations must never fail: missing information is reported as
/// [`ColorLookup::Unknown`].
pub trait ColorSource: Send + Sync {
    /// Colour of the cell on the row labelled `label` at `column`
    fn color_of(&self, label: &str, column: usize) -> ColorLookup;

    /// Whether this source can ever return a known colour
    fn is_available(&self) -> bool {
        true
    }
}

impl<T: ColorSource + ?Sized> ColorSource for &T {
    fn color_of(&self, label: &str, column: usize) -> ColorLookup {
        (**self).color_of(label, column)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<T: ColorSource + ?Sized> ColorSource for Box<T> {
    fn color_of(&self, label: &str, column: usize) -> ColorLookup {
        (**self).color_of(label, column)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<T: ColorSource + ?Sized> ColorSource for Arc<T> {
    fn color_of(&self, label: &str, column: usize) -> ColorLookup {
        (**self).color_of(label, column)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// Fully degraded source: every lookup is Unknown
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColor;

impl ColorSource for NoColor {
    #[inline]
    fn color_of(&self, _label: &str, _column: usize) -> ColorLookup {
        ColorLookup::Unknown
    }

    #[inline]
    fn is_available(&self) -> bool {
        false
    }
}

/// Adapter turning a closure into a [`ColorSource`]
#[derive(Debug, Clone, Copy)]
pub struct FnColorSource<F>(pub F);

impl<F> ColorSource for FnColorSource<F>
where
    F: Fn(&str, usize) -> ColorLookup + Send + Sync,
{
    fn color_of(&self, label: &str, column: usize) -> ColorLookup {
        (self.0)(label, column)
    }
}

/// Colour of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellColor {
    /// Palette-equivalent identifier (the only value compared)
    pub key: ColorKey,
    /// RGB triple when the producer resolved one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<[u8; 3]>,
}

/// One serialized [`CellColorTable`] entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellColorEntry {
    /// Absolute row
    pub row: usize,
    /// Absolute column
    pub column: usize,
    /// Colour of that cell
    #[serde(flatten)]
    pub color: CellColor,
}

/// Per-cell colour table keyed by absolute `(row, column)`
///
/// Produced by whatever extracts formatting metadata from the source
/// workbook. Serializes as a flat list of `{row, column, key, rgb}` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CellColorEntry>", into = "Vec<CellColorEntry>")]
pub struct CellColorTable {
    cells: HashMap<(usize, usize), CellColor>,
}

impl CellColorTable {
    /// Create empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cell colour by key
    pub fn insert(&mut self, row: usize, column: usize, key: ColorKey) -> &mut Self {
        self.cells.insert((row, column), CellColor { key, rgb: None });
        self
    }

    /// Record a cell colour with its RGB triple
    pub fn insert_with_rgb(
        &mut self,
        row: usize,
        column: usize,
        key: ColorKey,
        rgb: [u8; 3],
    ) -> &mut Self {
        self.cells.insert(
            (row, column),
            CellColor {
                key,
                rgb: Some(rgb),
            },
        );
        self
    }

    /// Colour of a cell, if recorded
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<&CellColor> {
        self.cells.get(&(row, column))
    }

    /// Number of recorded cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell is recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<CellColorEntry>> for CellColorTable {
    fn from(entries: Vec<CellColorEntry>) -> Self {
        Self {
            cells: entries
                .into_iter()
                .map(|e| ((e.row, e.column), e.color))
                .collect(),
        }
    }
}

impl From<CellColorTable> for Vec<CellColorEntry> {
    fn from(table: CellColorTable) -> Self {
        let mut entries: Vec<CellColorEntry> = table
            .cells
            .into_iter()
            .map(|((row, column), color)| CellColorEntry { row, column, color })
            .collect();
        entries.sort_by_key(|e| (e.row, e.column));
        entries
    }
}

/// Label-keyed view over a [`CellColorTable`]
///
/// Resolves a row label to its row in [`layout::COLOR_LABEL_ROWS`] (first
/// match), then reads the cell colour. Unresolvable labels and unrecorded
/// cells are Unknown.
#[derive(Debug, Clone)]
pub struct LabelledColorSource {
    grid: Arc<Grid>,
    table: CellColorTable,
}

impl LabelledColorSource {
    /// Pair a grid with the colour table extracted from the same sheet
    #[inline]
    #[must_use]
    pub fn new(grid: Arc<Grid>, table: CellColorTable) -> Self {
        Self { grid, table }
    }

    /// Underlying cell table
    #[inline]
    #[must_use]
    pub fn table(&self) -> &CellColorTable {
        &self.table
    }
}

impl ColorSource for LabelledColorSource {
    fn color_of(&self, label: &str, column: usize) -> ColorLookup {
        let Some(row) = layout::find_label_row(&self.grid, label, layout::COLOR_LABEL_ROWS) else {
            tracing::trace!(label, "colour label has no row");
            return ColorLookup::Unknown;
        };
        self.table.get(row, column).map(|c| c.key).into()
    }

    fn is_available(&self) -> bool {
        !self.table.is_empty()
    }
}
