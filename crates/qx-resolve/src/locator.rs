//! Defect location
//!
//! Defects live in the defect row from [`layout::DEFECT_MIN_COLUMN`]
//! onward. Matching is case-insensitive substring containment, so a short
//! query finds the first defect whose name contains it.

use qx_matrix::{layout, Grid};
use serde::{Deserialize, Serialize};

/// A defect column and its display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefectEntry {
    /// Column in the defect row
    pub column: usize,
    /// Trimmed display name
    pub name: String,
}

/// Column of the first defect whose name contains `name` (case-insensitive)
///
/// `None` when the defect row is missing or nothing matches; callers treat
/// that as "no such defect".
#[must_use]
pub fn locate(grid: &Grid, name: &str) -> Option<usize> {
    let needle = name.to_lowercase();
    let found = layout::defect_cells(grid)
        .find(|(_, text)| text.to_lowercase().contains(&needle))
        .map(|(column, _)| column);

    tracing::debug!(defect = name, column = ?found, "located defect");
    found
}

/// Every named defect, in column order
#[must_use]
pub fn list_all(grid: &Grid) -> Vec<DefectEntry> {
    layout::defect_cells(grid)
        .map(|(column, name)| DefectEntry {
            column,
            name: name.to_string(),
        })
        .collect()
}

/// Defects whose name contains `keyword` (case-insensitive), column order
#[must_use]
pub fn search(grid: &Grid, keyword: &str) -> Vec<DefectEntry> {
    let needle = keyword.to_lowercase();
    list_all(grid)
        .into_iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qx_matrix::GridBuilder;
    use qx_test_utils::scenario_grid;

    #[test]
    fn locate_is_case_insensitive_substring() {
        let grid = scenario_grid();
        assert_eq!(locate(&grid, "crack"), Some(80));
        assert_eq!(locate(&grid, "SCRATCH"), Some(81));
        assert_eq!(locate(&grid, "ac"), Some(80));
        assert_eq!(locate(&grid, "leak"), Some(83));
    }

    #[test]
    fn locate_returns_lowest_column() {
        let grid = GridBuilder::new()
            .with(layout::DEFECT_ROW, 90, "Crack B")
            .with(layout::DEFECT_ROW, 85, "Crack A")
            .build();
        assert_eq!(locate(&grid, "crack"), Some(85));
    }

    #[test]
    fn locate_ignores_columns_before_defect_region() {
        let grid = scenario_grid();
        // "Bolt" is a component name in the same row
        assert_eq!(locate(&grid, "bolt"), None);
    }

    #[test]
    fn locate_missing_row_or_name() {
        assert_eq!(locate(&Grid::empty(), "crack"), None);
        assert_eq!(locate(&scenario_grid(), "Corrosion"), None);
    }

    #[test]
    fn list_all_skips_blank_cells() {
        let entries = list_all(&scenario_grid());
        let names: Vec<_> = entries.iter().map(|e| (e.column, e.name.as_str())).collect();
        assert_eq!(
            names,
            vec![(80, "Crack"), (81, "Surface scratch"), (83, "Leak")]
        );
    }

    #[test]
    fn search_filters_by_keyword() {
        let grid = scenario_grid();
        let found = search(&grid, "A");
        let columns: Vec<_> = found.iter().map(|e| e.column).collect();
        assert_eq!(columns, vec![80, 81, 83]);

        let found = search(&grid, "scr");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Surface scratch");
        assert!(search(&grid, "zzz").is_empty());
    }
}
