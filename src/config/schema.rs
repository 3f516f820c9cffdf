//! Configuration schema.

use serde::Deserialize;

use crate::error::{MyReposError, Result};
use crate::scan::default_jobs;

/// Scan settings, as read from a YAML config file.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Number of concurrent workers (defaults to the available parallelism).
    pub jobs: Option<usize>,

    /// Directory names never descended into while looking for repositories.
    pub skip_dirs: Vec<String>,

    /// Filter for the `log` mode.
    pub log: LogConfig,
}

/// Author and date filter for `git log`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Passed to `git log --author`.
    pub author: String,

    /// Passed to `git log --since`.
    pub since: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            author: "user1@email.com".to_string(),
            since: "2023-01-01".to_string(),
        }
    }
}

impl ScanConfig {
    /// Apply command-line and environment overrides on top of file values.
    pub fn with_overrides(
        mut self,
        jobs: Option<usize>,
        author: Option<String>,
        since: Option<String>,
    ) -> Self {
        if jobs.is_some() {
            self.jobs = jobs;
        }
        if let Some(author) = author {
            self.log.author = author;
        }
        if let Some(since) = since {
            self.log.since = since;
        }
        self
    }

    /// Worker count to use.
    pub fn effective_jobs(&self) -> usize {
        self.jobs.unwrap_or_else(default_jobs)
    }

    /// Check values that parse fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.jobs == Some(0) {
            return Err(MyReposError::ConfigValidationError {
                message: "jobs must be at least 1".to_string(),
            });
        }

        if self.log.author.trim().is_empty() {
            return Err(MyReposError::ConfigValidationError {
                message: "log.author must not be empty".to_string(),
            });
        }

        if self.log.since.trim().is_empty() {
            return Err(MyReposError::ConfigValidationError {
                message: "log.since must not be empty".to_string(),
            });
        }

        if let Some(bad) = self
            .skip_dirs
            .iter()
            .find(|d| d.is_empty() || d.contains('/') || d.contains('\\'))
        {
            return Err(MyReposError::ConfigValidationError {
                message: format!("skip_dirs entry '{}' must be a plain directory name", bad),
            });
        }

        Ok(())
    }
}
