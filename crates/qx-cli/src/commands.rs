//! Command execution

use crate::config::AnalyzerConfig;
use anyhow::{bail, Context, Result};
use qx_export::{hierarchy_to_csv, render_text_report, to_json, write_defects_csv};
use qx_matrix::LabelledColorSource;
use qx_resolve::{DefectEntry, MatrixSession};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Output format of `analyze`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Four-section text report
    #[default]
    Text,
    /// Filtered hierarchy as JSON
    Json,
    /// Filtered hierarchy as CSV rows
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => bail!("unsupported output format: {other}"),
        }
    }
}

/// Load the workbook (and optional colour table) into a session
///
/// # Errors
///
/// Fails when either file cannot be decoded.
pub fn open_session(
    file: &Path,
    colors: Option<&Path>,
    config: &AnalyzerConfig,
) -> Result<MatrixSession> {
    let grid = qx_ingest::load_grid(file, &config.import)
        .with_context(|| format!("loading matrix {}", file.display()))?;
    let session = MatrixSession::from_shared(Arc::new(grid)).with_options(config.session.clone());

    let Some(colors) = colors else {
        return Ok(session);
    };
    let table = qx_ingest::load_color_table(colors)
        .with_context(|| format!("loading colour table {}", colors.display()))?;
    let source = LabelledColorSource::new(session.shared_grid(), table);
    Ok(session.with_color_source(source))
}

/// `list`: every defect, as text lines or CSV
///
/// # Errors
///
/// Fails only when writing to `out` fails.
pub fn list(session: &MatrixSession, csv: bool, out: &mut dyn Write) -> Result<()> {
    let defects = session.list_defects();
    if csv {
        write_defects_csv(&defects, out)?;
    } else {
        write_entries(&defects, out)?;
    }
    Ok(())
}

/// `search`: defects whose name contains `keyword`
///
/// # Errors
///
/// Fails only when writing to `out` fails.
pub fn search(session: &MatrixSession, keyword: &str, out: &mut dyn Write) -> Result<()> {
    let found = session.search_defects(keyword);
    if found.is_empty() {
        writeln!(out, "No defect matches '{keyword}'")?;
        return Ok(());
    }
    write_entries(&found, out)
}

/// `analyze`: filtered hierarchy of one defect
///
/// An unknown defect prints the empty hierarchy and still succeeds. With
/// `raw`, the whole report is printed as JSON regardless of `format`.
///
/// # Errors
///
/// Fails only when rendering or writing fails.
pub fn analyze(
    session: &MatrixSession,
    defect: &str,
    format: OutputFormat,
    raw: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let report = session.report(defect);
    if report.is_degraded() {
        tracing::warn!(defect, "no colour information for this defect; validated list is empty");
    }

    let rendered = if raw {
        to_json(&report, true)?
    } else {
        match format {
            OutputFormat::Text => render_text_report(&report.filtered),
            OutputFormat::Json => to_json(&report.filtered, true)?,
            OutputFormat::Csv => hierarchy_to_csv(&report.filtered)?,
        }
    };

    out.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

fn write_entries(entries: &[DefectEntry], out: &mut dyn Write) -> Result<()> {
    for entry in entries {
        writeln!(out, "{:>5}  {}", entry.column, entry.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qx_test_utils::{scenario_colors, scenario_grid};

    fn session() -> MatrixSession {
        let grid = Arc::new(scenario_grid());
        let colors = LabelledColorSource::new(Arc::clone(&grid), scenario_colors());
        MatrixSession::from_shared(grid).with_color_source(colors)
    }

    fn capture(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn format_parsing() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn list_text_and_csv() {
        let session = session();
        assert_eq!(
            capture(|out| list(&session, false, out)),
            "   80  Crack\n   81  Surface scratch\n   83  Leak\n"
        );
        assert_eq!(
            capture(|out| list(&session, true, out)),
            "Type de défaut\nCrack\nSurface scratch\nLeak\n"
        );
    }

    #[test]
    fn search_reports_misses() {
        let session = session();
        assert_eq!(capture(|out| search(&session, "LEAK", out)), "   83  Leak\n");
        assert_eq!(
            capture(|out| search(&session, "rust", out)),
            "No defect matches 'rust'\n"
        );
    }

    #[test]
    fn analyze_unknown_defect_prints_empty_hierarchy() {
        let session = session();
        let text = capture(|out| analyze(&session, "Corrosion", OutputFormat::Text, false, out));
        assert!(text.contains("(defect not found)"));

        let csv = capture(|out| analyze(&session, "Corrosion", OutputFormat::Csv, false, out));
        assert_eq!(csv, "section,name,value,components\ndefect,Corrosion,,\n");
    }

    #[test]
    fn analyze_raw_includes_unfiltered_analysis() {
        let session = session();
        let json = capture(|out| analyze(&session, "Leak", OutputFormat::Text, true, out));
        assert!(json.contains("\"analysis\""));
        assert!(json.contains("\"color\": \"degraded\""));
        assert!(json.ends_with("}\n"));
    }
}
