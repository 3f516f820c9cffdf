//! Command-line interface for my-repos.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{
    Command, CommandDispatcher, CommandResult, HelpCommand, Invocation, ScanCommand,
};
