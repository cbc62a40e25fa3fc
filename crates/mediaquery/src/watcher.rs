//! Async driver for a mounted classifier.
//!
//! ```text
//! resize source ─▸ mpsc<ResizeNotice> ─▸ watcher task ─▸ watch<Arc<ViewportSnapshot>>
//!                                           │
//!                                     sleep_until(deadline)
//! ```
//!
//! The task owns the classifier, so nothing else writes its state. Shutdown
//! tears the classifier down inside the task, which drops any pending
//! deadline before the task exits.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::classifier::ViewportClassifier;
use crate::host::ViewportHost;
use crate::snapshot::ViewportSnapshot;

/// A "viewport size changed" notification. The classifier re-measures the
/// host itself, so the notice carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeNotice;

/// Spawns watcher tasks.
pub struct ViewportWatcher;

impl ViewportWatcher {
    /// Move `classifier` onto a tokio task fed by `notices`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<H>(
        classifier: ViewportClassifier<H>,
        notices: mpsc::Receiver<ResizeNotice>,
    ) -> WatcherHandle
    where
        H: ViewportHost + Send + 'static,
    {
        let (snapshot_tx, snapshot_rx) = watch::channel(classifier.snapshot());
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let task = tokio::spawn(run(classifier, notices, shutdown_rx, snapshot_tx));

        WatcherHandle {
            snapshots: snapshot_rx,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }
}

/// Owner-side handle to a running watcher.
///
/// Dropping the handle aborts the task.
pub struct WatcherHandle {
    snapshots: watch::Receiver<Arc<ViewportSnapshot>>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl WatcherHandle {
    /// Latest applied snapshot.
    pub fn snapshot(&self) -> Arc<ViewportSnapshot> {
        Arc::clone(&self.snapshots.borrow())
    }

    /// An independent receiver for other consumers.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ViewportSnapshot>> {
        self.snapshots.clone()
    }

    /// Wait for the next applied change. `None` once the watcher has stopped.
    pub async fn changed(&mut self) -> Option<Arc<ViewportSnapshot>> {
        self.snapshots.changed().await.ok()?;
        Some(Arc::clone(&self.snapshots.borrow_and_update()))
    }

    /// Whether a change has been published since the last `changed()`.
    pub fn has_changed(&self) -> bool {
        self.snapshots.has_changed().unwrap_or(false)
    }

    /// Tear down the classifier and wait for the task to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "viewport watcher task failed");
            }
        }
    }
}

impl Drop for WatcherHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run<H: ViewportHost>(
    mut classifier: ViewportClassifier<H>,
    mut notices: mpsc::Receiver<ResizeNotice>,
    mut shutdown: oneshot::Receiver<()>,
    snapshots: watch::Sender<Arc<ViewportSnapshot>>,
) {
    loop {
        let deadline = classifier.next_deadline();

        tokio::select! {
            biased;

            _ = &mut shutdown => break,

            notice = notices.recv() => match notice {
                Some(ResizeNotice) => classifier.notify_resize(Instant::now().into_std()),
                None => {
                    tracing::debug!("resize source closed");
                    break;
                }
            },

            _ = sleep_until(deadline) => {
                if classifier.poll(Instant::now().into_std()) {
                    snapshots.send_replace(classifier.snapshot());
                }
            }
        }
    }

    classifier.teardown();
}

/// Sleep until `deadline`, or forever when nothing is pending.
async fn sleep_until(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
