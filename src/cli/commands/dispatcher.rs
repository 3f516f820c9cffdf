//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for turning parsed arguments into a command

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::config::load_config;
use crate::error::Result;
use crate::mode::Mode;
use crate::ui::Output;

use super::help::HelpCommand;
use super::scan::ScanCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing to `output`.
    fn execute(&self, output: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// What the positional arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage and exit without scanning.
    Help,
    /// Scan `root` with `mode`.
    Scan { root: PathBuf, mode: Mode },
}

impl Invocation {
    /// Interpret `[ROOT] [MODE]`.
    ///
    /// No arguments scans `cwd` in `status` mode. A root without a mode, or a
    /// mode that is not recognized, asks for help.
    pub fn from_args(root: Option<&Path>, mode: Option<&str>, cwd: &Path) -> Self {
        match (root, mode) {
            (None, None) => Self::Scan {
                root: cwd.to_path_buf(),
                mode: Mode::default(),
            },
            (Some(_), None) => Self::Help,
            (root, Some(name)) => match name.parse::<Mode>() {
                Ok(mode) => Self::Scan {
                    root: root.map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf()),
                    mode,
                },
                Err(e) => {
                    tracing::debug!("{}", e);
                    Self::Help
                }
            },
        }
    }
}

/// Dispatches the parsed command line to a command.
pub struct CommandDispatcher {
    cwd: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher; relative roots resolve against `cwd`.
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, output: &Output) -> Result<CommandResult> {
        match Invocation::from_args(cli.root.as_deref(), cli.mode.as_deref(), &self.cwd) {
            Invocation::Help => HelpCommand::new().execute(output),
            Invocation::Scan { root, mode } => {
                let config = load_config(cli.config.as_deref())?.with_overrides(
                    cli.jobs,
                    cli.author.clone(),
                    cli.since.clone(),
                );
                config.validate()?;

                let root = if root.is_absolute() {
                    root
                } else {
                    self.cwd.join(root)
                };
                let mode = mode.with_log_filter(&config.log);
                tracing::debug!("Scanning {} in {} mode", root.display(), mode);

                ScanCommand::new(root, mode, config).execute(output)
            }
        }
    }
}
