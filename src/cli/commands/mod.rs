//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait. [`CommandDispatcher`]
//! decides between printing usage and running a scan.

pub mod dispatcher;
pub mod help;
pub mod scan;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, Invocation};
pub use help::HelpCommand;
pub use scan::ScanCommand;
