//! Batch run configuration.
//!
//! Paths and entity rules are external configuration: a JSON file can
//! override the defaults, and CLI flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::annotate::EntityRule;
use crate::error::{Error, Result};

/// Default directory scanned for `.pdf` files.
pub const DEFAULT_INPUT_DIR: &str = "input/resumes";

/// Default directory receiving one `.json` per document.
pub const DEFAULT_OUTPUT_DIR: &str = "output/processed";

/// Configuration for a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    /// Directory of input PDF files
    pub input_dir: PathBuf,

    /// Directory for the output JSON records
    pub output_dir: PathBuf,

    /// Directory for the daily report log; the output directory if unset
    pub report_dir: Option<PathBuf>,

    /// Entity rules replacing the built-in rule sets, if present
    pub rules: Option<Vec<EntityRule>>,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            report_dir: None,
            rules: None,
        }
    }
}

impl SiftConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw).map_err(|e| Error::Config(e.to_string()))
    }

    /// The directory the report log is written to.
    pub fn report_dir(&self) -> &Path {
        self.report_dir.as_deref().unwrap_or(&self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SiftConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("input/resumes"));
        assert_eq!(config.output_dir, PathBuf::from("output/processed"));
        assert_eq!(config.report_dir(), Path::new("output/processed"));
        assert!(config.rules.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"input_dir": "cv/in"}}"#).unwrap();

        let config = SiftConfig::load(file.path()).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("cv/in"));
        assert_eq!(config.output_dir, PathBuf::from("output/processed"));
    }

    #[test]
    fn test_rules_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "input_dir": "in",
                "output_dir": "out",
                "report_dir": "logs",
                "rules": [{{"label": "TECH", "pattern": [{{"lower_in": ["rust"]}}]}}]
            }}"#
        )
        .unwrap();

        let config = SiftConfig::load(file.path()).unwrap();
        assert_eq!(config.report_dir(), Path::new("logs"));
        assert_eq!(config.rules.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = SiftConfig::load("no/such/config.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            SiftConfig::load(file.path()),
            Err(Error::Config(_))
        ));
    }
}
