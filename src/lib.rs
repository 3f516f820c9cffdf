//! my-repos - find Git repositories and run a git command in each of them.
//!
//! The walk is sequential; every repository it finds is handed to a bounded
//! pool of workers that run `git` concurrently. Results that outlive a single
//! repository (the `summary` mode) go into a shared [`scan::ResultStore`].
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and result aliases
//! - [`mode`] - What runs against each repository
//! - [`scan`] - Repository discovery, worker pool and result store
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use my_repos::scan::Locator;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join("app/.git")).unwrap();
//!
//! let mut roots = Vec::new();
//! let counters = Locator::new()
//!     .walk(temp.path(), |repo| roots.push(repo.root().to_path_buf()))
//!     .unwrap();
//! assert_eq!(counters.matched, 1);
//! assert_eq!(roots, vec![temp.path().join("app")]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mode;
pub mod scan;
pub mod shell;
pub mod ui;

pub use error::{MyReposError, Result};
