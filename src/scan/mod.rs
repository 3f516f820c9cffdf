//! Repository discovery and concurrent dispatch.
//!
//! - [`locator`] - sequential walk that finds repository roots
//! - [`dispatch`] - bounded worker pool that runs the mode per repository
//! - [`store`] - mutex-guarded map of per-repository results

pub mod dispatch;
pub mod locator;
pub mod store;

pub use dispatch::{default_jobs, WorkerPool};
pub use locator::{resolve_root, Locator, RepositoryRecord, ScanCounters, MARKER};
pub use store::ResultStore;

use std::path::Path;

use crate::error::Result;
use crate::mode::{ActionContext, Mode};
use crate::ui::Output;

/// Walk `root` and run `mode` for every repository found, using at most
/// `jobs` concurrent workers.
///
/// Returns once the walk is over and every worker has finished.
pub fn run_scan(
    root: &Path,
    locator: &Locator,
    mode: &Mode,
    ctx: &ActionContext<'_>,
    jobs: usize,
    output: &Output,
) -> Result<ScanCounters> {
    let work = |record: RepositoryRecord| {
        let outcome = mode.run(ctx, &record);
        if outcome.is_reportable() {
            output.repo_block(
                &record.root().display().to_string(),
                &outcome.text,
                outcome.failure.as_deref(),
            );
        }
    };

    std::thread::scope(|s| -> Result<ScanCounters> {
        let pool = WorkerPool::start(s, jobs, &work);
        let walked = locator.walk(root, |record| pool.submit(record));
        let finished = pool.finish();

        let counters = walked?;
        let processed = finished?;
        tracing::debug!(
            visited = counters.visited,
            matched = counters.matched,
            processed,
            "scan complete"
        );
        Ok(counters)
    })
}
