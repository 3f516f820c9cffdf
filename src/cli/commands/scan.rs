//! Scan command implementation.
//!
//! Resolves `git`, walks the root, runs the mode for every repository, then
//! prints the post-scan report and the folder/repository counts.

use std::path::PathBuf;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::mode::{ActionContext, Mode};
use crate::scan::{resolve_root, run_scan, Locator, ResultStore};
use crate::shell::GitTool;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    root: PathBuf,
    mode: Mode,
    config: ScanConfig,
    git: Option<GitTool>,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(root: PathBuf, mode: Mode, config: ScanConfig) -> Self {
        Self {
            root,
            mode,
            config,
            git: None,
        }
    }

    /// Use this `git` instead of looking it up on PATH.
    pub fn with_git(mut self, git: GitTool) -> Self {
        self.git = Some(git);
        self
    }
}

impl Command for ScanCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        // A missing git aborts before anything is printed.
        let git = match &self.git {
            Some(git) => git.clone(),
            None => GitTool::locate()?,
        };
        tracing::debug!("Using git at {}", git.path().display());
        let root = resolve_root(&self.root)?;

        output.message(&format!(
            "{} {}",
            output.theme().dim.apply_to("Scanning from"),
            root.display()
        ));

        let store = ResultStore::new();
        let ctx = ActionContext {
            git: &git,
            store: &store,
        };
        let locator = Locator::new().with_skip_dirs(self.config.skip_dirs.clone());

        let counters = run_scan(
            &root,
            &locator,
            &self.mode,
            &ctx,
            self.config.effective_jobs(),
            output,
        )?;

        self.mode.post_scan(&store, output);
        output.report(&format!(
            "Scanned folders: {}, git repos: {}",
            counters.visited, counters.matched
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use std::fs;
    use tempfile::TempDir;

    fn fake_git() -> GitTool {
        GitTool::from_path(PathBuf::from("/no/such/git"))
    }

    #[test]
    fn empty_root_reports_one_folder() {
        let temp = TempDir::new().unwrap();
        let output = Output::buffered(OutputMode::Normal);

        let result = ScanCommand::new(temp.path().to_path_buf(), Mode::Nop, ScanConfig::default())
            .with_git(fake_git())
            .execute(&output)
            .unwrap();

        assert!(result.success);
        let contents = output.contents().unwrap();
        assert!(contents.starts_with("Scanning from "));
        assert!(contents.ends_with("Scanned folders: 1, git repos: 0\n"));
    }

    #[test]
    fn counts_are_printed_last() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/.git")).unwrap();
        fs::create_dir_all(temp.path().join("b/.git")).unwrap();
        let output = Output::buffered(OutputMode::Normal);

        ScanCommand::new(temp.path().to_path_buf(), Mode::Nop, ScanConfig::default())
            .with_git(fake_git())
            .execute(&output)
            .unwrap();

        let contents = output.contents().unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "Scanned folders: 5, git repos: 2");
    }

    #[test]
    fn quiet_mode_prints_only_counts() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/.git")).unwrap();
        let output = Output::buffered(OutputMode::Quiet);

        ScanCommand::new(temp.path().to_path_buf(), Mode::Nop, ScanConfig::default())
            .with_git(fake_git())
            .execute(&output)
            .unwrap();

        assert_eq!(
            output.contents().unwrap(),
            "Scanned folders: 3, git repos: 1\n"
        );
    }

    #[test]
    fn skip_dirs_from_config_are_honored() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("vendor/x/.git")).unwrap();
        fs::create_dir_all(temp.path().join("y/.git")).unwrap();
        let output = Output::buffered(OutputMode::Quiet);
        let config = ScanConfig {
            skip_dirs: vec!["vendor".into()],
            ..Default::default()
        };

        ScanCommand::new(temp.path().to_path_buf(), Mode::Nop, config)
            .with_git(fake_git())
            .execute(&output)
            .unwrap();

        assert!(output.contents().unwrap().contains("git repos: 1"));
    }

    #[test]
    fn missing_root_still_reports_counts() {
        let temp = TempDir::new().unwrap();
        let output = Output::buffered(OutputMode::Normal);

        let result = ScanCommand::new(temp.path().join("missing"), Mode::Nop, ScanConfig::default())
            .with_git(fake_git())
            .execute(&output)
            .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(output
            .contents()
            .unwrap()
            .ends_with("Scanned folders: 0, git repos: 0\n"));
    }

    #[test]
    fn banner_shows_normalized_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("app/.git")).unwrap();
        let output = Output::buffered(OutputMode::Normal);

        ScanCommand::new(temp.path().join("."), Mode::Nop, ScanConfig::default())
            .with_git(fake_git())
            .execute(&output)
            .unwrap();

        let contents = output.contents().unwrap();
        assert!(contents.starts_with(&format!("Scanning from {}\n", temp.path().display())));
        assert!(!contents.contains("/./"));
        assert!(contents.contains(&format!("{}: NOP: ", temp.path().join("app").display())));
    }
}
