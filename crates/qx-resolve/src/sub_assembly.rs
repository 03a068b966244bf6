//! Defect to sub-assembly resolution

use indexmap::IndexSet;
use qx_matrix::{layout, Grid, MarkerClass};

/// Sub-assemblies linked to the defect at `defect_column`
///
/// Scans [`layout::SUB_ASSEMBLY_MARKER_ROWS`] for the defect link marker and
/// collects each row's label, deduplicated in row order. When no row links
/// the defect, the label on [`layout::FALLBACK_SUB_ASSEMBLY_ROW`] (if any)
/// is returned alone.
#[must_use]
pub fn resolve_sub_assemblies(grid: &Grid, defect_column: usize) -> Vec<String> {
    let mut linked: IndexSet<&str> = IndexSet::new();
    for row in layout::SUB_ASSEMBLY_MARKER_ROWS {
        if !MarkerClass::DefectLink.matches(grid.cell(row, defect_column)) {
            continue;
        }
        if let Some(label) = layout::sub_assembly_label(grid, row) {
            linked.insert(label);
        }
    }

    if linked.is_empty() {
        let fallback = layout::sub_assembly_label(grid, layout::FALLBACK_SUB_ASSEMBLY_ROW);
        tracing::debug!(
            defect_column,
            fallback = ?fallback,
            "no defect link marker, using fallback sub-assembly"
        );
        return fallback.map(str::to_string).into_iter().collect();
    }

    tracing::debug!(defect_column, count = linked.len(), "resolved sub-assemblies");
    linked.into_iter().map(str::to_string).collect()
}
