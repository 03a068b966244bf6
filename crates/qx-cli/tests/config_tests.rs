use qx_cli::{commands, AnalyzerConfig, ConfigError};
use qx_ingest::SheetSelector;
use std::io::Write;
use std::path::Path;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[import]\nsheet = {{ name = \"Matrice QX\" }}\n\n[session]\ncolor_cache_capacity = 64").unwrap();

    let config = AnalyzerConfig::load(file.path()).unwrap();
    assert_eq!(config.import.sheet, SheetSelector::Name("Matrice QX".into()));
    assert_eq!(config.session.color_cache_capacity, 64);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AnalyzerConfig::load(dir.path().join("qx.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[session]\ncolor_cache_capacity = \"lots\"").unwrap();
    assert!(matches!(
        AnalyzerConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_open_session_reports_matrix_path() {
    let err = commands::open_session(
        Path::new("/nonexistent/matrix.xls"),
        None,
        &AnalyzerConfig::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("loading matrix /nonexistent/matrix.xls"));
}
