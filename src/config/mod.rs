//! Configuration loading and validation.
//!
//! Settings come from, in increasing priority: built-in defaults, an optional
//! YAML file (`--config` / `MY_REPOS_CONFIG`), environment variables, and
//! command-line flags.
//!
//! # Example
//!
//! ```
//! use my_repos::config::{parse_config, ScanConfig};
//! use std::path::Path;
//!
//! let config = parse_config("jobs: 2\nskip_dirs: [node_modules]", Path::new("my-repos.yml"))
//!     .unwrap()
//!     .with_overrides(None, Some("me@example.com".into()), None);
//! config.validate().unwrap();
//! assert_eq!(config.effective_jobs(), 2);
//! assert_eq!(config.log.author, "me@example.com");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::{LogConfig, ScanConfig};
