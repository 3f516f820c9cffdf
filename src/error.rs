//! Error types for my-repos operations.
//!
//! This module defines [`MyReposError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Startup problems (missing `git`, bad config) are fatal and end the
//!   process before any scanning
//! - An unreadable scan root ends the walk early but still reports counts
//! - Per-repository command failures are reported inline and never abort a scan

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for my-repos operations.
#[derive(Debug, Error)]
pub enum MyReposError {
    /// A required executable is not on the search path.
    #[error("Required tool '{tool}' was not found on PATH")]
    ToolNotFound { tool: String },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// External command could not be started.
    #[error("Failed to spawn {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// One or more worker threads panicked while running repository actions.
    #[error("{count} worker thread(s) panicked")]
    WorkerPanicked { count: usize },

    /// IO error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for my-repos operations.
pub type Result<T> = std::result::Result<T, MyReposError>;
