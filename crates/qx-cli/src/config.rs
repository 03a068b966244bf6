//! Analyzer configuration
//!
//! ```toml
//! [import]
//! sheet = { name = "QX" }
//! max_rows = 2000
//!
//! [session]
//! color_cache_capacity = 0
//! ```
//!
//! Every section and key is optional.

use qx_ingest::ImportOptions;
use qx_resolve::SessionOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Config path
        path: PathBuf,
        /// I/O error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid configuration TOML
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Workbook import options
    pub import: ImportOptions,
    /// Session options
    pub session: SessionOptions,
}

impl AnalyzerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set import options
    #[inline]
    #[must_use]
    pub fn with_import(mut self, import: ImportOptions) -> Self {
        self.import = import;
        self
    }

    /// Set session options
    #[inline]
    #[must_use]
    pub fn with_session(mut self, session: SessionOptions) -> Self {
        self.session = session;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed TOML or unknown sections.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qx_ingest::SheetSelector;

    #[test]
    fn empty_text_is_default() {
        assert_eq!(AnalyzerConfig::from_toml_str("").unwrap(), AnalyzerConfig::default());
    }

    #[test]
    fn parses_all_sections() {
        let config = AnalyzerConfig::from_toml_str(
            r#"
            [import]
            sheet = { name = "QX" }
            max_rows = 2000
            max_cols = 120

            [session]
            color_cache_capacity = 0
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            AnalyzerConfig::new()
                .with_import(
                    ImportOptions::new()
                        .with_sheet_name("QX")
                        .with_max_rows(2000)
                        .with_max_cols(120)
                )
                .with_session(SessionOptions::new().with_color_cache_capacity(0))
        );
    }

    #[test]
    fn sheet_by_index() {
        let config = AnalyzerConfig::from_toml_str("[import]\nsheet = { index = 2 }\n").unwrap();
        assert_eq!(config.import.sheet, SheetSelector::Index(2));
        assert_eq!(config.session, SessionOptions::default());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = AnalyzerConfig::from_toml_str("[layout]\ndefect_row = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
