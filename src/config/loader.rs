//! Configuration file loading.

use crate::config::schema::ScanConfig;
use crate::error::{MyReposError, Result};
use std::fs;
use std::path::Path;

/// Load a single config file and parse it into ScanConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ScanConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MyReposError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MyReposError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into ScanConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ScanConfig> {
    if content.trim().is_empty() {
        return Ok(ScanConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| MyReposError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config from an optional path; without one, use the defaults.
pub fn load_config(config_path: Option<&Path>) -> Result<ScanConfig> {
    match config_path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)
        }
        None => Ok(ScanConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
jobs: 3
skip_dirs: [node_modules, target]
log:
  author: dev@example.com
  since: 2024-01-01
"#;
        let config = parse_config(yaml, Path::new("config.yml")).unwrap();

        assert_eq!(config.jobs, Some(3));
        assert_eq!(config.skip_dirs, vec!["node_modules", "target"]);
        assert_eq!(config.log.author, "dev@example.com");
        assert_eq!(config.log.since, "2024-01-01");
    }

    #[test]
    fn partial_log_section_keeps_defaults() {
        let config = parse_config("log:\n  since: 2025-02-01\n", Path::new("c.yml")).unwrap();
        assert_eq!(config.log.author, "user1@email.com");
        assert_eq!(config.log.since, "2025-02-01");
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse_config("\n", Path::new("c.yml")).unwrap();
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let err = parse_config("workers: 3\n", Path::new("/etc/c.yml")).unwrap_err();
        match err {
            MyReposError::ConfigParseError { path, message } => {
                assert_eq!(path, Path::new("/etc/c.yml"));
                assert!(message.contains("workers"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, MyReposError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_config_reads_given_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("my-repos.yml");
        fs::write(&path, "jobs: 5\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.jobs, Some(5));
    }

    #[test]
    fn load_config_without_path_is_default() {
        assert_eq!(load_config(None).unwrap(), ScanConfig::default());
    }
}
