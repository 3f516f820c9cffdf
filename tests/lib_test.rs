//! Library integration tests.

use my_repos::config::ScanConfig;
use my_repos::mode::{ActionContext, Mode};
use my_repos::scan::{run_scan, Locator, ResultStore};
use my_repos::shell::GitTool;
use my_repos::ui::{Output, OutputMode};
use my_repos::MyReposError;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Real `git`, or `None` when it is not installed.
fn real_git() -> Option<GitTool> {
    GitTool::locate().ok()
}

fn git_init(git: &GitTool, dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    let status = Command::new(git.path())
        .args(["init", "-q"])
        .current_dir(dir)
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn error_types_are_public() {
    let err = MyReposError::ToolNotFound { tool: "git".into() };
    assert!(err.to_string().contains("git"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> my_repos::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use my_repos::cli::{Cli, Invocation};

    let cli = Cli::parse_from(["my-repos", "/src", "summary"]);
    let invocation =
        Invocation::from_args(cli.root.as_deref(), cli.mode.as_deref(), Path::new("/"));
    assert!(matches!(
        invocation,
        Invocation::Scan {
            mode: Mode::Summary,
            ..
        }
    ));
}

#[test]
fn summary_on_three_real_repositories() {
    let Some(git) = real_git() else {
        eprintln!("git not installed; skipping");
        return;
    };

    let temp = TempDir::new().unwrap();
    for name in ["one", "nested/two", "nested/deep/three"] {
        git_init(&git, &temp.path().join(name));
    }

    let store = ResultStore::new();
    let output = Output::buffered(OutputMode::Normal);
    let ctx = ActionContext {
        git: &git,
        store: &store,
    };
    let config = ScanConfig::default();

    let counters = run_scan(
        temp.path(),
        &Locator::new(),
        &Mode::Summary,
        &ctx,
        config.effective_jobs(),
        &output,
    )
    .unwrap();

    assert_eq!(counters.matched, 3);
    assert_eq!(store.len(), 3);
    for (root, payload) in store.entries() {
        assert!(root.starts_with(temp.path()));
        let branch = payload
            .lines()
            .find_map(|l| l.strip_prefix("Branch: "))
            .unwrap_or_else(|| panic!("no branch line for {}: {payload}", root.display()));
        assert!(!branch.trim().is_empty());
    }

    Mode::Summary.post_scan(&store, &output);
    assert_eq!(output.contents().unwrap().matches("Branch: ").count(), 3);
}

#[test]
fn status_on_many_real_repositories() {
    let Some(git) = real_git() else {
        eprintln!("git not installed; skipping");
        return;
    };

    let temp = TempDir::new().unwrap();
    for i in 0..50 {
        git_init(&git, &temp.path().join(format!("r{:02}", i)));
    }

    let run = || {
        let store = ResultStore::new();
        let output = Output::buffered(OutputMode::Normal);
        let ctx = ActionContext {
            git: &git,
            store: &store,
        };
        let counters =
            run_scan(temp.path(), &Locator::new(), &Mode::Status, &ctx, 8, &output).unwrap();
        (counters, output.contents().unwrap())
    };

    let (first, contents) = run();
    let (second, _) = run();

    assert_eq!(first.matched, 50);
    assert_eq!(first, second);
    for i in 0..50 {
        let root = temp.path().join(format!("r{:02}", i));
        assert!(contents.contains(&format!("{}: ", root.display())));
    }
}
