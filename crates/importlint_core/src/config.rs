//! Configuration-file discovery and parsing.

use std::fs;
use std::path::Path;

use jsonc_parser::ParseOptions;
use tracing::debug;

use importlint_engine::SortConfig;

use crate::error::CheckError;

/// Well-known configuration filenames, probed in order within each
/// directory.
pub const CONFIG_FILENAMES: &[&str] = &[
    ".importlint.jsonc",
    ".importlint.json",
    "importlint.json",
];

/// Locates and parses engine configuration files.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Searches for a configuration file from `start_dir` upward.
    ///
    /// Each ancestor directory is probed for the well-known filenames in
    /// order; the first hit wins. `Ok(None)` means the walk exhausted
    /// every ancestor without finding one.
    pub fn discover(start_dir: &Path) -> Result<Option<SortConfig>, CheckError> {
        for dir in start_dir.ancestors() {
            for filename in CONFIG_FILENAMES {
                let candidate = dir.join(filename);
                if candidate.is_file() {
                    debug!("using configuration from {}", candidate.display());
                    return Self::load(&candidate).map(Some);
                }
            }
        }
        Ok(None)
    }

    /// Loads configuration from a file, capturing its parent directory.
    pub fn load(path: &Path) -> Result<SortConfig, CheckError> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }
        Ok(config)
    }

    /// Parses configuration from a JSON-with-comments string.
    pub fn parse(content: &str) -> Result<SortConfig, CheckError> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| CheckError::config(format!("Invalid config: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value)
            .map_err(|e| CheckError::config(format!("Invalid config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_with_comments() {
        let config = ConfigResolver::parse(
            r#"{
                // Always require the annotations future-import.
                "add_imports": ["from __future__ import annotations"],
                "line_length": 79
            }"#,
        )
        .unwrap();

        assert_eq!(config.add_imports.len(), 1);
        assert_eq!(config.line_length, Some(79));
        assert_eq!(config.profile, None);
    }

    #[test]
    fn test_parse_empty_document_is_default() {
        let config = ConfigResolver::parse("").unwrap();
        assert_eq!(config, SortConfig::default());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        let result = ConfigResolver::parse("{ add_imports: [ }");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid config"));
    }

    #[test]
    fn test_discover_ascends_to_parent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("src").join("app");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join(".importlint.json"),
            r#"{"profile": "black"}"#,
        )
        .unwrap();

        let config = ConfigResolver::discover(&nested).unwrap().unwrap();
        assert_eq!(config.profile.as_deref(), Some("black"));
        assert_eq!(config.base_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_discover_prefers_jsonc_in_same_directory() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(".importlint.jsonc"),
            r#"{"line_length": 100}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(".importlint.json"),
            r#"{"line_length": 79}"#,
        )
        .unwrap();

        let config = ConfigResolver::discover(dir.path()).unwrap().unwrap();
        assert_eq!(config.line_length, Some(100));
    }

    #[test]
    fn test_discover_prefers_nearest_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("pkg");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("importlint.json"), r#"{"line_length": 79}"#).unwrap();
        fs::write(nested.join("importlint.json"), r#"{"line_length": 120}"#).unwrap();

        let config = ConfigResolver::discover(&nested).unwrap().unwrap();
        assert_eq!(config.line_length, Some(120));
    }

    #[test]
    fn test_discover_nothing_found() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("empty");
        fs::create_dir_all(&nested).unwrap();

        // The walk may leave that tempdir and reach the filesystem root;
        // absence anywhere on the path still has to come back clean.
        let result = ConfigResolver::discover(&nested);
        assert!(result.is_ok());
    }
}
