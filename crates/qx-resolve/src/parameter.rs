//! Sub-assembly to parameter resolution
//!
//! A parameter row belongs to a sub-assembly when it carries `è` or `ê` on
//! at least one column the sub-assembly itself marks. The link list keeps
//! the component names of those columns, in column order.

use crate::component::{display_name, find_sub_assembly_row, linked_component_columns};
use qx_matrix::{is_marker_text, layout, Grid, MarkerClass};
use serde::{Deserialize, Serialize};

/// Corrective-action parameter linked to one or more components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Corrective action; empty when the value cell is blank
    pub value: String,
    /// Linked component names, column order
    pub components: Vec<String>,
}

impl Parameter {
    /// Create a parameter
    #[inline]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        components: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// Copy keeping only links accepted by `keep`; `None` when nothing survives
    #[must_use]
    pub fn restricted_to<F>(&self, mut keep: F) -> Option<Self>
    where
        F: FnMut(&str) -> bool,
    {
        let components: Vec<String> = self
            .components
            .iter()
            .filter(|name| keep(name))
            .cloned()
            .collect();

        if components.is_empty() {
            return None;
        }
        Some(Self {
            name: self.name.clone(),
            value: self.value.clone(),
            components,
        })
    }
}

/// Parameters reachable from `sub_assembly`, in row order
///
/// At most one [`Parameter`] per row. Rows with a blank name, or a name that
/// is itself a marker, are skipped. An unknown sub-assembly yields nothing.
#[must_use]
pub fn resolve_parameters(grid: &Grid, sub_assembly: &str) -> Vec<Parameter> {
    let Some(row) = find_sub_assembly_row(grid, sub_assembly) else {
        return Vec::new();
    };
    let columns: Vec<usize> = linked_component_columns(grid, row).collect();
    if columns.is_empty() {
        return Vec::new();
    }

    let mut parameters = Vec::new();
    for param_row in layout::parameter_rows(grid) {
        let Some(name) = layout::parameter_name(grid, param_row) else {
            continue;
        };
        if is_marker_text(name) {
            continue;
        }

        let components: Vec<String> = columns
            .iter()
            .filter(|&&column| MarkerClass::ComponentParameter.matches(grid.cell(param_row, column)))
            .filter_map(|&column| display_name(grid, column))
            .map(str::to_string)
            .collect();
        if components.is_empty() {
            continue;
        }

        parameters.push(Parameter {
            name: name.to_string(),
            value: layout::parameter_value(grid, param_row)
                .unwrap_or_default()
                .to_string(),
            components,
        });
    }

    tracing::debug!(sub_assembly, count = parameters.len(), "resolved parameters");
    parameters
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qx_matrix::Marker;
    use qx_test_utils::{scenario_grid, MatrixFixture};

    #[test]
    fn housing_parameters() {
        let grid = scenario_grid();
        assert_eq!(
            resolve_parameters(&grid, "Housing"),
            vec![
                Parameter::new("Torque", "Retighten to 10Nm", ["Bolt"]),
                Parameter::new("Seal check", "Replace gasket", ["Gasket"]),
                Parameter::new("Washer swap", "Replace washer", ["Washer"]),
            ]
        );
    }

    #[test]
    fn cover_parameters_with_blank_value() {
        let grid = scenario_grid();
        assert_eq!(
            resolve_parameters(&grid, "Cover"),
            vec![
                Parameter::new("Seal check", "Replace gasket", ["Gasket"]),
                Parameter::new("Hinge play", "", ["Hinge", "Bolt"]),
            ]
        );
    }

    #[test]
    fn ordinal_and_cedilla_do_not_link_parameters() {
        let grid = MatrixFixture::new()
            .sub_assembly(5, "Housing")
            .component(1, "Pin")
            .mark(5, 1, Marker::EGrave)
            .parameter(18, "Check", "Look")
            .mark(18, 1, Marker::Ordinal)
            .parameter(19, "Probe", "Measure")
            .mark(19, 1, Marker::CCedilla)
            .build();
        assert!(resolve_parameters(&grid, "Housing").is_empty());
    }

    #[test]
    fn marker_named_rows_are_skipped() {
        let grid = MatrixFixture::new()
            .sub_assembly(5, "Housing")
            .component(1, "Pin")
            .mark(5, 1, Marker::EGrave)
            .parameter(18, "ê", "Look")
            .mark(18, 1, Marker::EGrave)
            .build();
        assert!(resolve_parameters(&grid, "Housing").is_empty());
    }

    #[test]
    fn unknown_or_unmarked_sub_assembly_is_empty() {
        let grid = scenario_grid();
        assert!(resolve_parameters(&grid, "Chassis").is_empty());

        let bare = MatrixFixture::new()
            .sub_assembly(5, "Housing")
            .component(1, "Pin")
            .parameter(18, "Check", "Look")
            .mark(18, 1, Marker::EGrave)
            .build();
        assert!(resolve_parameters(&bare, "Housing").is_empty());
    }

    #[test]
    fn restriction_drops_empty_parameters() {
        let param = Parameter::new("Hinge play", "", ["Hinge", "Bolt"]);
        assert_eq!(
            param.restricted_to(|name| name == "Bolt"),
            Some(Parameter::new("Hinge play", "", ["Bolt"]))
        );
        assert_eq!(param.restricted_to(|_| false), None);
    }
}
