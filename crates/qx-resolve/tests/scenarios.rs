//! End-to-end resolution over hand-built matrices

use pretty_assertions::assert_eq;
use qx_matrix::{ColorKey, ColorLookup, FnColorSource, LabelledColorSource, Marker, NoColor};
use qx_resolve::{
    analyze, filtered_hierarchy, locate, report, resolve_components, resolve_parameters,
    resolve_sub_assemblies, ColorStatus, FilteredHierarchy, MatrixSession, Parameter,
};
use qx_test_utils::{
    colors, fallback_grid, scenario_colors, scenario_grid, MatrixFixture, CRACK_COLUMN,
    HOUSING_ROW,
};
use std::sync::Arc;

fn housing_fixture() -> MatrixFixture {
    MatrixFixture::new()
        .defect(CRACK_COLUMN, "Crack")
        .sub_assembly(HOUSING_ROW, "Housing")
        .mark(HOUSING_ROW, CRACK_COLUMN, Marker::CCedilla)
        .component(10, "Bolt")
        .mark(HOUSING_ROW, 10, Marker::ECircumflex)
}

fn labelled(grid: qx_matrix::Grid, table: qx_matrix::CellColorTable) -> MatrixSession {
    let grid = Arc::new(grid);
    let source = LabelledColorSource::new(Arc::clone(&grid), table);
    MatrixSession::from_shared(grid).with_color_source(source)
}

#[test]
fn test_locate_and_link_single_sub_assembly() {
    let grid = housing_fixture().build();
    assert_eq!(locate(&grid, "crack"), Some(80));
    assert_eq!(resolve_sub_assemblies(&grid, 80), vec!["Housing"]);
}

#[test]
fn test_component_validated_only_when_colours_match() {
    let grid = housing_fixture().build();
    assert_eq!(resolve_components(&grid, "Housing"), vec!["Bolt"]);

    let matching = labelled(grid.clone(), colors(&[(5, 80, 7), (5, 10, 7)]));
    assert_eq!(
        matching.filtered_hierarchy("Crack").validated_components,
        vec!["Bolt"]
    );

    let differing = labelled(grid, colors(&[(5, 80, 7), (5, 10, 8)]));
    assert!(differing
        .filtered_hierarchy("Crack")
        .validated_components
        .is_empty());
}

#[test]
fn test_parameter_linked_by_grave_marker() {
    let grid = housing_fixture()
        .parameter(20, "Torque", "Retighten to 10Nm")
        .mark(20, 10, Marker::EGrave)
        .build();
    assert!(resolve_parameters(&grid, "Housing")
        .contains(&Parameter::new("Torque", "Retighten to 10Nm", ["Bolt"])));
}

#[test]
fn test_fallback_sub_assembly() {
    let grid = fallback_grid();
    assert_eq!(resolve_sub_assemblies(&grid, CRACK_COLUMN), vec!["Frame"]);

    // Leak in the scenario matrix has no link marker either
    let analysis = analyze(&scenario_grid(), "Leak").unwrap();
    assert_eq!(analysis.sub_assemblies, vec!["Frame"]);
    assert_eq!(analysis.components, vec!["Washer"]);
    assert_eq!(
        analysis.parameters,
        vec![Parameter::new("Washer swap", "Replace washer", ["Washer"])]
    );
}

#[test]
fn test_any_matching_column_validates_component() {
    let grid = housing_fixture()
        .component(40, "Bolt")
        .mark(HOUSING_ROW, 40, Marker::EGrave)
        .build();
    let session = labelled(grid, colors(&[(5, 80, 3), (5, 10, 9), (5, 40, 3)]));
    assert_eq!(
        session.filtered_hierarchy("Crack").validated_components,
        vec!["Bolt"]
    );
}

#[test]
fn test_full_crack_hierarchy() {
    let grid = Arc::new(scenario_grid());
    let source = LabelledColorSource::new(Arc::clone(&grid), scenario_colors());

    let hierarchy = filtered_hierarchy(&grid, "crack", &source);
    assert_eq!(
        hierarchy,
        FilteredHierarchy {
            defect_name: "crack".to_string(),
            defect_column: Some(80),
            sub_assemblies: vec!["Housing".to_string(), "Cover".to_string()],
            validated_components: vec!["Bolt".to_string(), "Hinge".to_string()],
            parameters: vec![
                Parameter::new("Torque", "Retighten to 10Nm", ["Bolt"]),
                Parameter::new("Hinge play", "", ["Hinge", "Bolt"]),
            ],
        }
    );
}

#[test]
fn test_full_crack_analysis() {
    let analysis = analyze(&scenario_grid(), "Crack").unwrap();
    assert_eq!(analysis.sub_assemblies, vec!["Housing", "Cover"]);
    assert_eq!(analysis.components, vec!["Bolt", "Gasket", "Washer", "Hinge"]);
    assert_eq!(
        analysis.parameters,
        vec![
            Parameter::new("Torque", "Retighten to 10Nm", ["Bolt"]),
            Parameter::new("Seal check", "Replace gasket", ["Gasket"]),
            Parameter::new("Washer swap", "Replace washer", ["Washer"]),
            Parameter::new("Seal check", "Replace gasket", ["Gasket"]),
            Parameter::new("Hinge play", "", ["Hinge", "Bolt"]),
        ]
    );
}

#[test]
fn test_scratch_hierarchy() {
    let grid = Arc::new(scenario_grid());
    let source = LabelledColorSource::new(Arc::clone(&grid), scenario_colors());
    let hierarchy = filtered_hierarchy(&grid, "SCRATCH", &source);

    assert_eq!(hierarchy.defect_column, Some(81));
    assert_eq!(hierarchy.sub_assemblies, vec!["Cover"]);
    assert_eq!(hierarchy.validated_components, vec!["Gasket"]);
    assert_eq!(
        hierarchy.parameters,
        vec![Parameter::new("Seal check", "Replace gasket", ["Gasket"])]
    );
}

#[test]
fn test_uncoloured_fallback_is_degraded() {
    let grid = Arc::new(scenario_grid());
    let source = LabelledColorSource::new(Arc::clone(&grid), scenario_colors());
    let report = report(&grid, "Leak", &source);

    assert_eq!(report.color, ColorStatus::Degraded);
    assert!(report.filtered.validated_components.is_empty());
    assert_eq!(report.analysis.map(|a| a.components), Some(vec!["Washer".to_string()]));
}

#[test]
fn test_unknown_defect_yields_empty_hierarchy() {
    let grid = scenario_grid();
    assert!(analyze(&grid, "Corrosion").unwrap_err().is_not_found());

    let hierarchy = filtered_hierarchy(&grid, "Corrosion", &NoColor);
    assert_eq!(hierarchy, FilteredHierarchy::empty("Corrosion"));
    assert!(hierarchy.is_empty());
}

#[test]
fn test_filtered_hierarchy_is_idempotent() {
    let grid = Arc::new(scenario_grid());
    let source = LabelledColorSource::new(Arc::clone(&grid), scenario_colors());
    for name in ["Crack", "scratch", "Leak", "Corrosion"] {
        assert_eq!(
            filtered_hierarchy(&grid, name, &source),
            filtered_hierarchy(&grid, name, &source)
        );
    }
}

#[test]
fn test_all_unknown_colour_leaves_unfiltered_intact() {
    let grid = scenario_grid();
    let unknown = FnColorSource(|_: &str, _: usize| ColorLookup::Unknown);

    let degraded = report(&grid, "Crack", &unknown);
    let unfiltered = analyze(&grid, "Crack").unwrap();

    assert!(degraded.filtered.validated_components.is_empty());
    assert_eq!(degraded.analysis, Some(unfiltered));
    assert!(degraded.is_degraded());
}

#[test]
fn test_colour_only_on_one_sub_assembly_is_not_degraded() {
    let grid = scenario_grid();
    let housing_only = FnColorSource(|label: &str, _: usize| {
        if label == "Housing" {
            ColorLookup::Known(ColorKey::new(1))
        } else {
            ColorLookup::Unknown
        }
    });
    let result = report(&grid, "Crack", &housing_only);

    assert_eq!(result.color, ColorStatus::Applied);
    // Every Housing cell reads the same colour, so each named column passes
    assert_eq!(
        result.filtered.validated_components,
        vec!["Bolt", "Gasket", "Washer", "Hinge"]
    );
}

#[test]
fn test_session_queries_match_free_functions() {
    let grid = scenario_grid();
    let session = labelled(grid.clone(), scenario_colors());

    assert_eq!(session.list_defects().len(), 3);
    assert_eq!(session.search_defects("ea").len(), 1);
    assert_eq!(session.locate("leak"), Some(83));
    assert_eq!(session.sub_assemblies(80), resolve_sub_assemblies(&grid, 80));
    assert_eq!(session.components("Cover"), resolve_components(&grid, "Cover"));
    assert_eq!(session.parameters("Cover"), resolve_parameters(&grid, "Cover"));
    assert_eq!(session.analyze("Crack"), analyze(&grid, "Crack"));
}
