//! Shared result store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Durable per-repository results, keyed by repository root.
///
/// Built once per scan and handed to every worker by reference. Every read
/// and write takes the lock.
#[derive(Debug, Default)]
pub struct ResultStore {
    entries: Mutex<HashMap<PathBuf, String>>,
}

impl ResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, String>> {
        // Every mutation is a single map call; poisoning leaves it consistent.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record `payload` for `root`, returning the previous value if any.
    pub fn insert(&self, root: PathBuf, payload: String) -> Option<String> {
        self.lock().insert(root, payload)
    }

    /// Look up the payload stored for `root`.
    pub fn get(&self, root: &Path) -> Option<String> {
        self.lock().get(root).cloned()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of all entries, sorted by root path.
    pub fn entries(&self) -> Vec<(PathBuf, String)> {
        let mut entries: Vec<_> = self
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
