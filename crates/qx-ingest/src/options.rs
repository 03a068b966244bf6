//! Import options

use serde::{Deserialize, Serialize};

/// Which worksheet to decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetSelector {
    /// Zero-based position in the workbook
    Index(usize),
    /// Exact sheet name
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl std::fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Workbook import options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Sheet to decode (first sheet by default)
    pub sheet: SheetSelector,
    /// Ignore cells at or beyond this absolute row
    pub max_rows: Option<usize>,
    /// Ignore cells at or beyond this absolute column
    pub max_cols: Option<usize>,
}

impl ImportOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a sheet by position
    #[inline]
    #[must_use]
    pub fn with_sheet_index(mut self, index: usize) -> Self {
        self.sheet = SheetSelector::Index(index);
        self
    }

    /// Select a sheet by name
    #[inline]
    #[must_use]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet = SheetSelector::Name(name.into());
        self
    }

    /// Cap imported rows
    #[inline]
    #[must_use]
    pub fn with_max_rows(mut self, rows: usize) -> Self {
        self.max_rows = Some(rows);
        self
    }

    /// Cap imported columns
    #[inline]
    #[must_use]
    pub fn with_max_cols(mut self, cols: usize) -> Self {
        self.max_cols = Some(cols);
        self
    }

    /// Whether an absolute coordinate falls inside the caps
    #[inline]
    #[must_use]
    pub fn admits(&self, row: usize, column: usize) -> bool {
        self.max_rows.map_or(true, |max| row < max) && self.max_cols.map_or(true, |max| column < max)
    }
}
