//! Observable view-state of the session list.

use roster_core::session::{PagedResult, SessionSummary};
use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Everything the presentation layer renders for the session list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionListState {
    /// The current page; `None` until the first load succeeds
    pub paged_result: Option<PagedResult>,
    /// True while the latest page load is in flight
    pub is_loading: bool,
    /// The single channel for user-visible failures
    pub error_message: Option<String>,
    /// Most recent sessions for the sidebar, bounded in size
    pub recent_sessions: Vec<SessionSummary>,
    /// Number of sessions in the store as of the last sidebar refresh
    pub total_session_count: usize,
}

impl SessionListState {
    /// Page number of the loaded page, if any.
    pub fn current_page(&self) -> Option<u32> {
        self.paged_result.as_ref().map(|paged| paged.current_page)
    }
}

/// Holds the state and publishes every change to subscribers.
///
/// Writes stop taking effect once `token` is cancelled. The check runs while
/// the channel's write lock is held, so no write can land after a
/// cancellation has been observed by `seal`.
pub(crate) struct ViewStore {
    sender: watch::Sender<SessionListState>,
    token: CancellationToken,
}

impl ViewStore {
    pub(crate) fn new(token: CancellationToken) -> Self {
        let (sender, _receiver) = watch::channel(SessionListState::default());
        Self { sender, token }
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<SessionListState> {
        self.sender.subscribe()
    }

    pub(crate) fn snapshot(&self) -> SessionListState {
        self.sender.borrow().clone()
    }

    /// Reads from the current state without cloning it.
    ///
    /// The read lock is released before this returns, so callers may update
    /// right after.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&SessionListState) -> R) -> R {
        f(&self.sender.borrow())
    }

    /// Applies `modify`, notifying subscribers when it reports a change.
    ///
    /// Returns false without touching the state once cancelled.
    pub(crate) fn update(&self, modify: impl FnOnce(&mut SessionListState) -> bool) -> bool {
        let token = &self.token;
        self.sender
            .send_if_modified(|state| !token.is_cancelled() && modify(state))
    }

    /// Waits out any write in progress. Call after cancelling the token.
    pub(crate) fn seal(&self) {
        self.sender.send_if_modified(|_| false);
    }
}
