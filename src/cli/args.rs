//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
MODES:
    status    run `git status` in every repository (default)
    log       run `git log --oneline` filtered by --author and --since
    pull      run `git pull` in every repository
    fetch     run `git fetch` in every repository
    nop       list repositories without running git
    summary   show branch, first remote and size of every repository

Example: my-repos ~/dev fetch";

/// Find Git repositories under a directory and run a git command in each.
#[derive(Debug, Parser)]
#[command(name = "my-repos")]
#[command(author, version, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// What to run against each repository
    pub mode: Option<String>,

    /// Maximum number of repositories processed at once
    #[arg(short, long, env = "MY_REPOS_JOBS", value_name = "N")]
    pub jobs: Option<usize>,

    /// Author filter for the `log` mode
    #[arg(long, env = "MY_REPOS_AUTHOR", value_name = "EMAIL")]
    pub author: Option<String>,

    /// Date filter for the `log` mode
    #[arg(long, env = "MY_REPOS_SINCE", value_name = "DATE")]
    pub since: Option<String>,

    /// Path to a YAML config file
    #[arg(short, long, env = "MY_REPOS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print the final report
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn about_comes_from_doc_comment() {
        let about = Cli::command().get_about().map(|a| a.to_string());
        assert_eq!(
            about.as_deref(),
            Some("Find Git repositories under a directory and run a git command in each.")
        );
    }

    #[test]
    fn parses_root_and_mode() {
        let cli = Cli::parse_from(["my-repos", "/src", "fetch"]);
        assert_eq!(cli.root, Some(PathBuf::from("/src")));
        assert_eq!(cli.mode.as_deref(), Some("fetch"));
    }

    #[test]
    fn positionals_are_optional() {
        let cli = Cli::parse_from(["my-repos"]);
        assert!(cli.root.is_none());
        assert!(cli.mode.is_none());
    }

    #[test]
    fn unknown_mode_still_parses() {
        let cli = Cli::parse_from(["my-repos", "/src", "bogus"]);
        assert_eq!(cli.mode.as_deref(), Some("bogus"));
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "my-repos", "-j", "3", "--author", "a@b.c", "--since", "2024-01-01", "-q",
            "--no-color", "/src", "log",
        ]);
        assert_eq!(cli.jobs, Some(3));
        assert_eq!(cli.author.as_deref(), Some("a@b.c"));
        assert_eq!(cli.since.as_deref(), Some("2024-01-01"));
        assert!(cli.quiet);
        assert!(cli.no_color);
    }

    #[test]
    fn help_lists_modes() {
        let help = Cli::command().render_help().to_string();
        for mode in crate::mode::MODE_NAMES {
            assert!(help.contains(mode), "help is missing {mode}");
        }
    }
}
