//! Scan modes.
//!
//! A [`Mode`] decides what happens to every discovered repository and what
//! happens once the scan is over. Each variant carries its own `git`
//! arguments; [`Mode::run`] is the single dispatch point.

use std::fmt;
use std::str::FromStr;

use crate::config::LogConfig;
use crate::scan::{RepositoryRecord, ResultStore};
use crate::shell::{disk_usage, CommandResult, GitTool};
use crate::ui::Output;

/// Names accepted on the command line, in help order.
pub const MODE_NAMES: [&str; 6] = ["status", "log", "pull", "fetch", "nop", "summary"];

/// The action run against each repository.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// `git status`
    #[default]
    Status,
    /// `git log --oneline` filtered by author and date
    Log { author: String, since: String },
    /// `git pull`
    Pull,
    /// `git fetch`
    Fetch,
    /// Report the repository without running anything.
    Nop,
    /// Collect branch, remote and size; print them after the scan.
    Summary,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Self::Status),
            "log" => {
                let defaults = LogConfig::default();
                Ok(Self::Log {
                    author: defaults.author,
                    since: defaults.since,
                })
            }
            "pull" => Ok(Self::Pull),
            "fetch" => Ok(Self::Fetch),
            "nop" => Ok(Self::Nop),
            "summary" => Ok(Self::Summary),
            _ => Err(format!("unknown mode: {}", s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a repository action produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Captured text.
    pub text: String,
    /// Failure description, if the action failed.
    pub failure: Option<String>,
}

impl ActionOutcome {
    /// An outcome with text and no failure.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failure: None,
        }
    }

    /// An outcome with nothing to report.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Whether there is anything to show the operator.
    pub fn is_reportable(&self) -> bool {
        !self.text.is_empty() || self.failure.is_some()
    }
}

impl From<crate::Result<CommandResult>> for ActionOutcome {
    fn from(result: crate::Result<CommandResult>) -> Self {
        match result {
            Ok(r) if r.success => Self::text(r.output),
            Ok(r) => Self {
                failure: Some(match r.exit_code {
                    Some(code) => format!("exit status {}", code),
                    None => "terminated by signal".to_string(),
                }),
                text: r.output,
            },
            Err(e) => Self {
                text: String::new(),
                failure: Some(e.to_string()),
            },
        }
    }
}

/// Everything an action may use besides the repository itself.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    pub git: &'a GitTool,
    pub store: &'a ResultStore,
}

impl Mode {
    /// The identifier used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Log { .. } => "log",
            Self::Pull => "pull",
            Self::Fetch => "fetch",
            Self::Nop => "nop",
            Self::Summary => "summary",
        }
    }

    /// Apply the configured log filter (only affects [`Mode::Log`]).
    pub fn with_log_filter(self, log: &LogConfig) -> Self {
        match self {
            Self::Log { .. } => Self::Log {
                author: log.author.clone(),
                since: log.since.clone(),
            },
            other => other,
        }
    }

    /// `git` arguments for modes that run a single command.
    pub fn git_args(&self) -> Option<Vec<&str>> {
        match self {
            Self::Status => Some(vec!["status"]),
            Self::Log { author, since } => Some(vec![
                "log",
                "--oneline",
                "--author",
                author.as_str(),
                "--since",
                since.as_str(),
            ]),
            Self::Pull => Some(vec!["pull"]),
            Self::Fetch => Some(vec!["fetch"]),
            Self::Nop | Self::Summary => None,
        }
    }

    /// Whether [`Mode::post_scan`] prints anything.
    pub fn has_post_scan(&self) -> bool {
        matches!(self, Self::Summary)
    }

    /// Run this mode against one repository.
    pub fn run(&self, ctx: &ActionContext<'_>, record: &RepositoryRecord) -> ActionOutcome {
        match self {
            Self::Nop => ActionOutcome::text(format!("NOP: {}", record.marker().display())),
            Self::Summary => {
                let summary = summarize(ctx.git, record);
                ctx.store.insert(record.root().to_path_buf(), summary);
                ActionOutcome::silent()
            }
            _ => {
                let args = self.git_args().unwrap_or_default();
                ctx.git.run(record.marker(), record.root(), &args).into()
            }
        }
    }

    /// Run once after every repository has been processed.
    pub fn post_scan(&self, store: &ResultStore, output: &Output) {
        if !self.has_post_scan() {
            return;
        }

        output.report("");
        for (root, payload) in store.entries() {
            output.report(&format!(
                "{}:\n{}\n",
                output.theme().path.apply_to(root.display()),
                payload
            ));
        }
    }
}

/// Build the summary text for one repository.
///
/// Git parts are left out when their command fails; the size line is always
/// present but may be empty.
fn summarize(git: &GitTool, record: &RepositoryRecord) -> String {
    let mut lines = Vec::with_capacity(3);

    if let Some(branch) = current_branch(git, record) {
        lines.push(format!("Branch: {}", branch));
    }

    if let Ok(remotes) = git.run(record.marker(), record.root(), &["remote", "-v"]) {
        if remotes.success {
            lines.push(format!("remote: {}", remotes.first_line()));
        }
    }

    lines.push(format!("Size: {}", disk_usage(record.marker())));
    lines.join("\n")
}

/// Current branch name; falls back to `symbolic-ref` for repositories
/// without commits, where `rev-parse HEAD` fails.
fn current_branch(git: &GitTool, record: &RepositoryRecord) -> Option<String> {
    let attempts: [&[&str]; 2] = [
        &["rev-parse", "--abbrev-ref", "HEAD"],
        &["symbolic-ref", "--short", "HEAD"],
    ];

    attempts.iter().find_map(|args| {
        let result = git.run(record.marker(), record.root(), args).ok()?;
        let line = result.first_line().trim();
        (result.success && !line.is_empty()).then(|| line.to_string())
    })
}
