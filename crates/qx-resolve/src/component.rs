//! Sub-assembly to component resolution

use qx_matrix::{is_marker_text, layout, Grid, MarkerClass};

/// Row carrying the `sub_assembly` label within [`layout::SUB_ASSEMBLY_LABEL_ROWS`]
#[inline]
#[must_use]
pub fn find_sub_assembly_row(grid: &Grid, sub_assembly: &str) -> Option<usize> {
    layout::find_label_row(grid, sub_assembly, layout::SUB_ASSEMBLY_LABEL_ROWS)
}

/// Component columns carrying any marker on the sub-assembly row
pub fn linked_component_columns(grid: &Grid, row: usize) -> impl Iterator<Item = usize> + '_ {
    layout::COMPONENT_COLUMNS.filter(move |&column| MarkerClass::Any.matches(grid.cell(row, column)))
}

/// Display name for a component column, skipping blanks and marker text
#[inline]
pub(crate) fn display_name(grid: &Grid, column: usize) -> Option<&str> {
    layout::component_name(grid, column).filter(|name| !is_marker_text(name))
}

/// Components marked on the `sub_assembly` row, in column order
///
/// An unknown sub-assembly yields an empty list. Names are not
/// deduplicated here; the same name on two columns appears twice.
#[must_use]
pub fn resolve_components(grid: &Grid, sub_assembly: &str) -> Vec<String> {
    let Some(row) = find_sub_assembly_row(grid, sub_assembly) else {
        tracing::debug!(sub_assembly, "sub-assembly row not found");
        return Vec::new();
    };

    let components: Vec<String> = linked_component_columns(grid, row)
        .filter_map(|column| display_name(grid, column))
        .map(str::to_string)
        .collect();

    tracing::debug!(sub_assembly, row, count = components.len(), "resolved components");
    components
}
