//! External command execution.

use crate::error::{MyReposError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use super::probe::{parse_system_path, resolve_tool_path};

/// Name of the version-control executable looked up on PATH.
pub const GIT: &str = "git";

/// Name of the disk-usage executable used for size reporting.
pub const DU: &str = "du";

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output followed by standard error.
    pub output: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(output: String) -> Self {
        Self {
            exit_code: Some(0),
            output,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, output: String) -> Self {
        Self {
            exit_code,
            output,
            success: false,
        }
    }

    /// First line of the captured output.
    pub fn first_line(&self) -> &str {
        self.output.lines().next().unwrap_or("")
    }
}

/// Render a program and its arguments for messages and logs.
fn display_command<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    let mut rendered = program.display().to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&arg.as_ref().to_string_lossy());
    }
    rendered
}

/// Execute `program` with `args`, capturing stdout and stderr.
///
/// A non-zero exit is not an error: it comes back as a failed
/// [`CommandResult`] with whatever the process printed. Only a failure to
/// spawn the process is returned as `Err`.
pub fn execute<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    cwd: Option<&Path>,
) -> Result<CommandResult> {
    let start = Instant::now();
    let rendered = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|source| {
        tracing::debug!("Failed to spawn {}: {}", rendered, source);
        MyReposError::SpawnFailed {
            command: rendered.clone(),
            source,
        }
    })?;

    let elapsed = start.elapsed();

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    tracing::debug!(
        command = %rendered,
        code = ?output.status.code(),
        elapsed_ms = elapsed.as_millis() as u64,
        "command finished"
    );

    if output.status.success() {
        Ok(CommandResult::success(combined))
    } else {
        Ok(CommandResult::failure(output.status.code(), combined))
    }
}

/// The `git` executable resolved at startup.
#[derive(Debug, Clone)]
pub struct GitTool {
    path: PathBuf,
}

impl GitTool {
    /// Resolve `git` on the system PATH.
    ///
    /// # Errors
    ///
    /// Returns `ToolNotFound` when no executable `git` is on PATH.
    pub fn locate() -> Result<Self> {
        Self::locate_in(&parse_system_path())
    }

    /// Resolve `git` in an explicit list of directories.
    pub fn locate_in(path_entries: &[PathBuf]) -> Result<Self> {
        resolve_tool_path(GIT, path_entries)
            .map(Self::from_path)
            .ok_or_else(|| MyReposError::ToolNotFound {
                tool: GIT.to_string(),
            })
    }

    /// Use a known `git` binary.
    pub fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path to the resolved executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `git --git-dir <git_dir> <args...>` from `work_tree`.
    pub fn run(&self, git_dir: &Path, work_tree: &Path, args: &[&str]) -> Result<CommandResult> {
        let mut full_args: Vec<&OsStr> = Vec::with_capacity(args.len() + 2);
        full_args.push(OsStr::new("--git-dir"));
        full_args.push(git_dir.as_os_str());
        full_args.extend(args.iter().map(OsStr::new));

        execute(&self.path, &full_args, Some(work_tree))
    }
}

/// Size of `path` on disk as reported by `du -hs`.
///
/// Best effort: any failure yields an empty string.
pub fn disk_usage(path: &Path) -> String {
    let Some(du) = resolve_tool_path(DU, &parse_system_path()) else {
        tracing::debug!("du not found on PATH; size unavailable");
        return String::new();
    };

    let args = [OsStr::new("-hs"), path.as_os_str()];
    match execute(&du, &args, None) {
        Ok(result) if result.success => first_field(&result.output).to_string(),
        Ok(result) => {
            tracing::debug!("du exited with {:?} for {}", result.exit_code, path.display());
            String::new()
        }
        Err(_) => String::new(),
    }
}

/// First tab-separated field of `du` output.
fn first_field(output: &str) -> &str {
    output.split('\t').next().unwrap_or("").trim()
}
