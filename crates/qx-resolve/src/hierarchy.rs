//! Hierarchy assembly
//!
//! Ties the resolvers together for one defect query. [`analyze`] gives the
//! unfiltered picture, [`filtered_hierarchy`] the colour-validated one, and
//! [`report`] both at once together with the colour status, so an empty
//! validated list can be told apart from missing colour information.

use crate::color_filter::{filter_validated_components, ColorMemo};
use crate::component::resolve_components;
use crate::error::{ResolveError, ResolveResult};
use crate::locator::locate;
use crate::parameter::{resolve_parameters, Parameter};
use crate::sub_assembly::resolve_sub_assemblies;
use indexmap::IndexSet;
use qx_matrix::{layout, ColorSource, Grid};
use serde::{Deserialize, Serialize};

/// Unfiltered resolution of one defect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectAnalysis {
    /// Name as queried
    pub defect_name: String,
    /// Defect-row text of the matched column
    pub matched_name: String,
    /// Matched column
    pub defect_column: usize,
    /// Linked sub-assemblies, row order
    pub sub_assemblies: Vec<String>,
    /// Components of every sub-assembly, first-seen order, no duplicates
    pub components: Vec<String>,
    /// Parameters of every sub-assembly, concatenated in sub-assembly order
    pub parameters: Vec<Parameter>,
}

/// Colour-validated resolution of one defect
///
/// A defect that is not in the matrix yields the empty value: no column and
/// no entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredHierarchy {
    /// Name as queried
    pub defect_name: String,
    /// Matched column, `None` when the defect was not found
    pub defect_column: Option<usize>,
    /// Linked sub-assemblies, row order
    pub sub_assemblies: Vec<String>,
    /// Components validated by colour, first-seen order
    pub validated_components: Vec<String>,
    /// Parameters restricted to validated components
    pub parameters: Vec<Parameter>,
}

impl FilteredHierarchy {
    /// Empty hierarchy for a defect that was not found
    #[must_use]
    pub fn empty(defect_name: impl Into<String>) -> Self {
        Self {
            defect_name: defect_name.into(),
            defect_column: None,
            sub_assemblies: Vec::new(),
            validated_components: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Check if nothing was resolved
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sub_assemblies.is_empty()
            && self.validated_components.is_empty()
            && self.parameters.is_empty()
    }

    /// Whether the defect was located
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.defect_column.is_some()
    }
}

/// How colour validation went for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorStatus {
    /// At least one sub-assembly had a known reference colour
    Applied,
    /// Sub-assemblies existed but no reference colour was known
    Degraded,
    /// Nothing to validate (defect not found or no sub-assembly)
    NotApplicable,
}

/// Filtered and unfiltered results of one query, kept together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyReport {
    /// Unfiltered analysis, `None` when the defect was not found
    pub analysis: Option<DefectAnalysis>,
    /// Colour-validated hierarchy
    pub filtered: FilteredHierarchy,
    /// Colour validation status
    pub color: ColorStatus,
}

impl HierarchyReport {
    /// Whether colour information was missing for every sub-assembly
    #[inline]
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.color == ColorStatus::Degraded
    }
}

/// Unfiltered analysis of `defect_name`
///
/// # Errors
///
/// [`ResolveError::DefectNotFound`] when no defect-row cell contains the name.
pub fn analyze(grid: &Grid, defect_name: &str) -> ResolveResult<DefectAnalysis> {
    let defect_column =
        locate(grid, defect_name).ok_or_else(|| ResolveError::defect_not_found(defect_name))?;
    Ok(analyze_at(grid, defect_name, defect_column))
}

/// Colour-validated hierarchy of `defect_name`, empty when not found
#[must_use]
pub fn filtered_hierarchy(
    grid: &Grid,
    defect_name: &str,
    colors: &dyn ColorSource,
) -> FilteredHierarchy {
    report(grid, defect_name, colors).filtered
}

/// Both results of one query plus the colour status
#[must_use]
pub fn report(grid: &Grid, defect_name: &str, colors: &dyn ColorSource) -> HierarchyReport {
    let analysis = match analyze(grid, defect_name) {
        Ok(analysis) => analysis,
        Err(err) => {
            tracing::info!(defect = defect_name, error = %err, "defect not found");
            return HierarchyReport {
                analysis: None,
                filtered: FilteredHierarchy::empty(defect_name),
                color: ColorStatus::NotApplicable,
            };
        }
    };

    let mut memo = ColorMemo::new(colors);
    let outcome = filter_validated_components(
        grid,
        &analysis.sub_assemblies,
        &analysis.components,
        analysis.defect_column,
        &mut memo,
    );

    let validated: IndexSet<&str> = outcome.validated.iter().map(String::as_str).collect();
    let parameters: Vec<Parameter> = analysis
        .parameters
        .iter()
        .filter_map(|param| param.restricted_to(|name| validated.contains(name)))
        .collect();

    let color = if analysis.sub_assemblies.is_empty() {
        ColorStatus::NotApplicable
    } else if outcome.degraded {
        ColorStatus::Degraded
    } else {
        ColorStatus::Applied
    };

    tracing::info!(
        defect = defect_name,
        column = analysis.defect_column,
        validated = outcome.validated.len(),
        parameters = parameters.len(),
        color = ?color,
        "hierarchy assembled"
    );

    let filtered = FilteredHierarchy {
        defect_name: defect_name.to_string(),
        defect_column: Some(analysis.defect_column),
        sub_assemblies: analysis.sub_assemblies.clone(),
        validated_components: outcome.validated,
        parameters,
    };

    HierarchyReport {
        analysis: Some(analysis),
        filtered,
        color,
    }
}

fn analyze_at(grid: &Grid, defect_name: &str, defect_column: usize) -> DefectAnalysis {
    let sub_assemblies = resolve_sub_assemblies(grid, defect_column);

    let mut components: IndexSet<String> = IndexSet::new();
    let mut parameters = Vec::new();
    for sub_assembly in &sub_assemblies {
        components.extend(resolve_components(grid, sub_assembly));
        parameters.extend(resolve_parameters(grid, sub_assembly));
    }

    let matched_name = grid
        .cell(layout::DEFECT_ROW, defect_column)
        .unwrap_or(defect_name)
        .to_string();

    DefectAnalysis {
        defect_name: defect_name.to_string(),
        matched_name,
        defect_column,
        sub_assemblies,
        components: components.into_iter().collect(),
        parameters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qx_matrix::NoColor;
    use qx_test_utils::scenario_grid;

    #[test]
    fn analysis_dedups_components_but_not_parameters() {
        let analysis = analyze(&scenario_grid(), "crack").unwrap();
        assert_eq!(analysis.matched_name, "Crack");
        assert_eq!(analysis.defect_name, "crack");
        assert_eq!(analysis.components, vec!["Bolt", "Gasket", "Washer", "Hinge"]);
        let names: Vec<_> = analysis.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Torque", "Seal check", "Washer swap", "Seal check", "Hinge play"]
        );
    }

    #[test]
    fn not_found_is_a_value() {
        let grid = scenario_grid();
        let err = analyze(&grid, "Corrosion").unwrap_err();
        assert!(err.is_not_found());

        let report = report(&grid, "Corrosion", &NoColor);
        assert_eq!(report.analysis, None);
        assert_eq!(report.filtered, FilteredHierarchy::empty("Corrosion"));
        assert_eq!(report.color, ColorStatus::NotApplicable);
        assert!(!report.filtered.is_found());
    }

    #[test]
    fn degraded_keeps_unfiltered_analysis() {
        let report = report(&scenario_grid(), "Crack", &NoColor);
        assert!(report.is_degraded());
        assert!(report.filtered.validated_components.is_empty());
        assert!(report.filtered.parameters.is_empty());
        assert_eq!(report.filtered.sub_assemblies, vec!["Housing", "Cover"]);
        assert_eq!(report.analysis.unwrap().components.len(), 4);
    }

    #[test]
    fn defect_without_sub_assemblies() {
        let grid = qx_test_utils::MatrixFixture::new().defect(80, "Crack").build();
        let report = report(&grid, "Crack", &NoColor);
        assert_eq!(report.color, ColorStatus::NotApplicable);
        assert!(report.filtered.is_found());
        assert!(report.filtered.is_empty());
    }
}
