//! Usage help, shown for a missing or unrecognized mode.

use clap::CommandFactory;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// Prints the usage text; never scans.
#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    /// Create a new help command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let help = Cli::command().render_help().to_string();
        output.report(help.trim_end());
        Ok(CommandResult::success())
    }
}
