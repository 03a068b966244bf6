//! CSV rendering

use crate::error::ExportResult;
use qx_resolve::{DefectEntry, FilteredHierarchy};
use std::io::Write;

/// Header of the defect-list CSV
pub const DEFECTS_HEADER: &str = "Type de défaut";

const COMPONENT_SEPARATOR: &str = "; ";

/// Write defect names, one per row, under [`DEFECTS_HEADER`]
///
/// # Errors
///
/// Fails when the writer fails.
pub fn write_defects_csv<W: Write>(entries: &[DefectEntry], writer: W) -> ExportResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([DEFECTS_HEADER])?;
    for entry in entries {
        out.write_record([entry.name.as_str()])?;
    }
    out.flush()?;
    Ok(())
}

/// Defect list as a CSV string
///
/// # Errors
///
/// See [`write_defects_csv`].
pub fn defects_to_csv(entries: &[DefectEntry]) -> ExportResult<String> {
    let mut buf = Vec::new();
    write_defects_csv(entries, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Write a filtered hierarchy as `section,name,value,components` rows
///
/// Sections are `defect` (value is the column, empty when not found),
/// `sub_assembly`, `component` and `parameter` (value is the corrective
/// action, components joined with `"; "`).
///
/// # Errors
///
/// Fails when the writer fails.
pub fn write_hierarchy_csv<W: Write>(hierarchy: &FilteredHierarchy, writer: W) -> ExportResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["section", "name", "value", "components"])?;

    let column = hierarchy
        .defect_column
        .map(|c| c.to_string())
        .unwrap_or_default();
    out.write_record(["defect", hierarchy.defect_name.as_str(), column.as_str(), ""])?;

    for sub_assembly in &hierarchy.sub_assemblies {
        out.write_record(["sub_assembly", sub_assembly.as_str(), "", ""])?;
    }
    for component in &hierarchy.validated_components {
        out.write_record(["component", component.as_str(), "", ""])?;
    }
    for param in &hierarchy.parameters {
        let components = param.components.join(COMPONENT_SEPARATOR);
        out.write_record([
            "parameter",
            param.name.as_str(),
            param.value.as_str(),
            components.as_str(),
        ])?;
    }

    out.flush()?;
    Ok(())
}

/// Filtered hierarchy as a CSV string
///
/// # Errors
///
/// See [`write_hierarchy_csv`].
pub fn hierarchy_to_csv(hierarchy: &FilteredHierarchy) -> ExportResult<String> {
    let mut buf = Vec::new();
    write_hierarchy_csv(hierarchy, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
