//! Plain-text hierarchy report

use qx_resolve::FilteredHierarchy;
use std::fmt::Write;

/// Four-section report: defect type, sub-assemblies, validated components,
/// component parameters
///
/// Empty sections get a placeholder line instead of disappearing.
#[must_use]
pub fn render_text_report(hierarchy: &FilteredHierarchy) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, hierarchy);
    out
}

fn write_report(out: &mut String, h: &FilteredHierarchy) -> std::fmt::Result {
    writeln!(out, "Hierarchy for: {}", h.defect_name)?;
    writeln!(out)?;

    writeln!(out, "1 - Defect type")?;
    writeln!(out, "  Name: {}", h.defect_name)?;
    match h.defect_column {
        Some(column) => writeln!(out, "  Column: {column}")?,
        None => writeln!(out, "  (defect not found)")?,
    }
    writeln!(out)?;

    writeln!(out, "2 - Sub-assemblies")?;
    if h.sub_assemblies.is_empty() {
        writeln!(out, "  Not found")?;
    }
    for sub_assembly in &h.sub_assemblies {
        writeln!(out, "  - {sub_assembly}")?;
    }
    writeln!(out)?;

    writeln!(out, "3 - Validated components ({})", h.validated_components.len())?;
    if h.validated_components.is_empty() {
        writeln!(out, "  (no component found)")?;
    }
    for (i, component) in h.validated_components.iter().enumerate() {
        writeln!(out, "  {}. {component}", i + 1)?;
    }
    writeln!(out)?;

    writeln!(out, "4 - Component parameters ({})", h.parameters.len())?;
    if h.parameters.is_empty() {
        writeln!(out, "  (no parameter found)")?;
    }
    for param in &h.parameters {
        writeln!(out, "  * {}", param.name)?;
        if !param.value.is_empty() {
            writeln!(out, "    Action: {}", param.value)?;
        }
        writeln!(out, "    Linked components: {}", param.components.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qx_resolve::Parameter;

    #[test]
    fn full_report() {
        let hierarchy = FilteredHierarchy {
            defect_name: "Crack".into(),
            defect_column: Some(80),
            sub_assemblies: vec!["Housing".into(), "Cover".into()],
            validated_components: vec!["Bolt".into(), "Hinge".into()],
            parameters: vec![
                Parameter::new("Torque", "Retighten to 10Nm", ["Bolt"]),
                Parameter::new("Hinge play", "", ["Hinge", "Bolt"]),
            ],
        };
        let expected = "\
Hierarchy for: Crack

1 - Defect type
  Name: Crack
  Column: 80

2 - Sub-assemblies
  - Housing
  - Cover

3 - Validated components (2)
  1. Bolt
  2. Hinge

4 - Component parameters (2)
  * Torque
    Action: Retighten to 10Nm
    Linked components: Bolt
  * Hinge play
    Linked components: Hinge, Bolt
";
        assert_eq!(render_text_report(&hierarchy), expected);
    }

    #[test]
    fn empty_sections_have_placeholders() {
        let report = render_text_report(&FilteredHierarchy::empty("Corrosion"));
        assert!(report.contains("(defect not found)"));
        assert!(report.contains("  Not found"));
        assert!(report.contains("(no component found)"));
        assert!(report.contains("(no parameter found)"));
    }
}
