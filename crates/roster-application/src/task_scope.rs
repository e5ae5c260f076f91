//! Fire-and-forget task dispatch bound to a cancellable scope.

use roster_core::error::{Result, RosterError};
use std::future::Future;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// A caller-owned scope that background operations are launched onto.
///
/// Tasks run on the given runtime and are tracked so callers can wait for
/// the scope to go idle. Cancelling the scope aborts every in-flight task at
/// its next suspension point and turns further `spawn` calls into no-ops.
///
/// Cloning yields another handle to the same scope.
#[derive(Debug, Clone)]
pub struct TaskScope {
    handle: Handle,
    tracker: TaskTracker,
    token: CancellationToken,
}

impl TaskScope {
    /// Creates a scope that spawns onto `handle`.
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            tracker: TaskTracker::new(),
            token: CancellationToken::new(),
        }
    }

    /// Creates a scope on the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn current() -> Result<Self> {
        let handle = Handle::try_current()
            .map_err(|e| RosterError::internal(format!("no tokio runtime: {}", e)))?;
        Ok(Self::new(handle))
    }

    /// Launches `future` without waiting for it.
    pub fn spawn<F>(&self, name: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.token.is_cancelled() {
            tracing::debug!(task = name, "Scope cancelled, task not started");
            return;
        }

        let token = self.token.clone();
        self.tracker.spawn_on(
            async move {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!(task = name, "Task cancelled with its scope");
                    }
                    _ = future => {}
                }
            },
            &self.handle,
        );
    }

    /// Cancels the scope. In-flight tasks stop at their next await.
    pub fn cancel(&self) {
        self.token.cancel();
        self.tracker.close();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token that fires when the scope is cancelled.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Number of tasks that have not finished yet.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Waits until every task spawned so far, and every task those tasks
    /// spawn before finishing, has completed.
    pub async fn wait_idle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        if !self.token.is_cancelled() {
            self.tracker.reopen();
        }
    }
}
