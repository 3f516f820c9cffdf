//! External command execution and executable lookup.

pub mod command;
pub mod probe;

pub use command::{disk_usage, execute, CommandResult, GitTool, DU, GIT};
pub use probe::{is_executable, parse_system_path, resolve_tool_path};
