use std::sync::Arc;

use futures::future::BoxFuture;
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::node::NodeRef;

/// Default upper bound on concurrently active branch visits.
pub const DEFAULT_MAX_WORKERS: usize = 5;

/// Aggregated traversal result: total byte size and number of files counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeSummary {
    pub size: u64,
    pub count: u64,
}

/// Shared aggregation state for one traversal call. All merges and error
/// recordings go through the mutex; once `first_err` is set it is never
/// overwritten.
#[derive(Default)]
struct Aggregate {
    total: SizeSummary,
    first_err: Option<anyhow::Error>,
}

impl Aggregate {
    fn record_err(&mut self, err: anyhow::Error) {
        if self.first_err.is_none() {
            self.first_err = Some(err);
        }
    }
}

/// Concurrent directory-tree sizer.
///
/// Visiting a directory lists its children, accumulates its own files into a
/// branch-local summary, merges that into the shared aggregate, then fans out
/// one spawned visit per subdirectory. A semaphore bounds how many visits are
/// active at once, the root visit included.
#[derive(Debug, Clone)]
pub struct Sizer {
    max_workers: usize,
}

impl Default for Sizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sizer {
    /// Creates a sizer with the default worker budget of
    /// [`DEFAULT_MAX_WORKERS`].
    pub fn new() -> Self {
        Self::with_max_workers(DEFAULT_MAX_WORKERS)
    }

    /// Creates a sizer with an explicit worker budget. A budget of zero is
    /// clamped to one.
    pub fn with_max_workers(max_workers: usize) -> Self {
        Self { max_workers: max_workers.max(1) }
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Computes the total size and file count of the tree rooted at `root`.
    ///
    /// On success returns the sum of all reachable file sizes and the number
    /// of files visited. If any `list_children` or `size` call fails, the
    /// first error recorded wins: the call still waits for in-flight visits
    /// to wind down, then returns that error alone — any size or count
    /// accumulated before the failure is discarded.
    ///
    /// Cancellation is cooperative and is not itself an error: when `cancel`
    /// fires and no collaborator error was recorded, the call returns `Ok`
    /// with whatever had been merged up to that point (possibly the zero
    /// summary). Callers that need to distinguish a cancelled run check
    /// `cancel.is_cancelled()` themselves.
    pub async fn size(
        &self,
        cancel: CancellationToken,
        root: NodeRef,
    ) -> anyhow::Result<SizeSummary> {
        debug!(max_workers = self.max_workers, "starting tree traversal");

        let sem = Arc::new(Semaphore::new(self.max_workers));
        let agg = Arc::new(Mutex::new(Aggregate::default()));

        visit(root, sem, agg.clone(), cancel).await;

        let mut state = agg.lock();
        if let Some(err) = state.first_err.take() {
            return Err(err);
        }
        Ok(state.total)
    }
}

/// One branch visit. Returns a boxed future because the recursion goes
/// through `tokio::spawn` and needs a nameable, `'static` future type.
fn visit(
    node: NodeRef,
    sem: Arc<Semaphore>,
    agg: Arc<Mutex<Aggregate>>,
    cancel: CancellationToken,
) -> BoxFuture<'static, ()> {
    Box::pin(async move {
        // The permit is acquired by the visit itself, not by the parent that
        // spawned it. A parent holding its own slot while waiting for a
        // child's would deadlock at max_workers = 1.
        let permit = match sem.clone().acquire_owned().await {
            Ok(p) => p,
            // Semaphore is never closed during a traversal.
            Err(_) => return,
        };

        if cancel.is_cancelled() {
            return;
        }

        let (subdirs, files) = match node.list_children(&cancel).await {
            Ok(children) => children,
            Err(err) => {
                agg.lock().record_err(err);
                return;
            }
        };

        // Files of this directory are accumulated branch-locally and merged
        // once, so sibling branches never observe a half-merged directory.
        let mut local = SizeSummary::default();
        for file in files {
            if cancel.is_cancelled() {
                return;
            }
            match file.size(&cancel).await {
                Ok(size) => {
                    local.size = local.size.saturating_add(size);
                    local.count += 1;
                }
                Err(err) => {
                    agg.lock().record_err(err);
                    return;
                }
            }
        }

        {
            let mut state = agg.lock();
            state.total.size = state.total.size.saturating_add(local.size);
            state.total.count += local.count;
        }

        let mut children: Vec<JoinHandle<()>> = Vec::with_capacity(subdirs.len());
        for subdir in subdirs {
            if cancel.is_cancelled() {
                break;
            }
            // Fail fast: once any worker recorded an error, stop descending
            // into branches we have not entered yet.
            if agg.lock().first_err.is_some() {
                break;
            }
            children.push(tokio::spawn(visit(
                subdir,
                sem.clone(),
                agg.clone(),
                cancel.clone(),
            )));
        }

        // This visit's own work is done; free the slot before waiting so
        // queued child visits can run.
        drop(permit);

        for child in children {
            let _ = child.await;
        }
    })
}
