//! Bounded worker pool for per-repository actions.
//!
//! The walker submits records onto an unbounded queue, so discovery never
//! waits on a running `git`. A fixed number of workers drain the queue, which
//! caps how many external processes run at once.

use std::thread::{Scope, ScopedJoinHandle};

use crossbeam_channel::{unbounded, Sender};

use super::locator::RepositoryRecord;
use crate::error::{MyReposError, Result};

/// Default number of workers: the available parallelism, or 4 if unknown.
pub fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// A fixed set of scoped worker threads fed by a work queue.
pub struct WorkerPool<'scope> {
    sender: Option<Sender<RepositoryRecord>>,
    handles: Vec<ScopedJoinHandle<'scope, usize>>,
}

impl<'scope> WorkerPool<'scope> {
    /// Spawn `workers` threads (at least one) in `scope`, each running `work`
    /// for the records it receives.
    pub fn start<'env, F>(scope: &'scope Scope<'scope, 'env>, workers: usize, work: &'scope F) -> Self
    where
        F: Fn(RepositoryRecord) + Sync,
    {
        let workers = workers.max(1);
        let (sender, receiver) = unbounded::<RepositoryRecord>();

        let handles = (0..workers)
            .map(|id| {
                let receiver = receiver.clone();
                scope.spawn(move || {
                    let mut processed = 0;
                    for record in receiver.iter() {
                        work(record);
                        processed += 1;
                    }
                    tracing::debug!(worker = id, processed, "worker drained");
                    processed
                })
            })
            .collect();

        tracing::debug!("Started {} workers", workers);
        Self {
            sender: Some(sender),
            handles,
        }
    }

    /// Queue a repository for processing.
    pub fn submit(&self, record: RepositoryRecord) {
        if let Some(sender) = &self.sender {
            if sender.send(record).is_err() {
                tracing::warn!("All workers have exited; dropping repository");
            }
        }
    }

    /// Close the queue and wait for every worker.
    ///
    /// Returns the number of records processed.
    ///
    /// # Errors
    ///
    /// Returns `WorkerPanicked` if any worker panicked.
    pub fn finish(mut self) -> Result<usize> {
        drop(self.sender.take());

        let mut processed = 0;
        let mut panicked = 0;
        for handle in self.handles.drain(..) {
            match handle.join() {
                Ok(count) => processed += count,
                Err(_) => panicked += 1,
            }
        }

        if panicked > 0 {
            return Err(MyReposError::WorkerPanicked { count: panicked });
        }
        Ok(processed)
    }
}
