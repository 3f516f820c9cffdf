//! Repository discovery.
//!
//! The walk is sequential and depth-first in file-name order. When a `.git`
//! directory is seen, its parent becomes a repository root and is claimed:
//! the marker is not descended into, and any later directory whose parent is
//! a claimed root is skipped with its whole subtree.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Name of the repository marker directory.
pub const MARKER: &str = ".git";

/// A discovered repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRecord {
    root: PathBuf,
    marker: PathBuf,
}

impl RepositoryRecord {
    /// Build a record from the path of a marker directory.
    ///
    /// Returns `None` when the marker has no parent.
    pub fn from_marker(marker: PathBuf) -> Option<Self> {
        let root = marker.parent()?.to_path_buf();
        Some(Self { root, marker })
    }

    /// Working-tree root (the directory containing the marker).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The marker directory itself.
    pub fn marker(&self) -> &Path {
        &self.marker
    }
}

/// Counters kept by the walker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanCounters {
    /// Directories considered, including the root and matched markers.
    pub visited: usize,
    /// Repositories found.
    pub matched: usize,
}

/// Make `root` absolute and drop its `.` and `..` components.
///
/// Purely lexical: symlinks are not resolved and the path need not exist.
///
/// # Errors
///
/// Fails only when the current directory is needed and cannot be read.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(root)?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Walks a directory tree looking for repositories.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    skip_dirs: Vec<String>,
}

impl Locator {
    /// Create a locator that descends into every directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Never descend into directories with these names (the root is exempt).
    pub fn with_skip_dirs(mut self, skip_dirs: Vec<String>) -> Self {
        self.skip_dirs = skip_dirs;
        self
    }

    fn is_skipped(&self, name: &std::ffi::OsStr) -> bool {
        self.skip_dirs.iter().any(|s| name == s.as_str())
    }

    /// Walk `root`, handing each repository to `on_repo` as soon as its
    /// marker is seen.
    ///
    /// Unreadable entries below the root are logged and skipped. A failure
    /// to read the root itself is logged and ends the walk; the counters
    /// gathered up to that point are returned.
    pub fn walk<F>(&self, root: &Path, mut on_repo: F) -> Result<ScanCounters>
    where
        F: FnMut(RepositoryRecord),
    {
        let root = resolve_root(root)?;
        let mut claimed: HashSet<PathBuf> = HashSet::new();
        let mut counters = ScanCounters::default();

        let mut entries = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(next) = entries.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    tracing::warn!("Cannot read scan root: {}", err);
                    break;
                }
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            if entry.depth() > 0 && path.parent().is_some_and(|p| claimed.contains(p)) {
                entries.skip_current_dir();
                continue;
            }

            counters.visited += 1;

            if entry.file_name() == MARKER {
                if let Some(record) = RepositoryRecord::from_marker(path.to_path_buf()) {
                    tracing::debug!("Found repository at {}", record.root().display());
                    claimed.insert(record.root().to_path_buf());
                    counters.matched += 1;
                    on_repo(record);
                }
                entries.skip_current_dir();
                continue;
            }

            if entry.depth() > 0 && self.is_skipped(entry.file_name()) {
                tracing::debug!("Not descending into {}", path.display());
                entries.skip_current_dir();
            }
        }

        Ok(counters)
    }
}
