//! Session list controller.
//!
//! Mediates between a `SessionStore` and a presentation layer. Every public
//! method returns immediately; the store call runs on the controller's
//! `TaskScope` and its outcome lands in the observable `SessionListState`.

use crate::state::{SessionListState, ViewStore};
use crate::task_scope::TaskScope;
use roster_core::RosterError;
use roster_core::config::ListConfig;
use roster_core::error::Result;
use roster_core::i18n::{ErrorTranslator, Localizer, keys};
use roster_core::session::SessionStore;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

const LOADING_CONTEXT: &str = "loading sessions";

/// A store mutation issued by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Delete,
    UpdateStarred,
    Rename,
}

impl Mutation {
    fn task_name(self) -> &'static str {
        match self {
            Mutation::Delete => "delete_session",
            Mutation::UpdateStarred => "update_session_starred",
            Mutation::Rename => "rename_session",
        }
    }

    /// Label handed to the translator when the store raises.
    fn context(self) -> &'static str {
        match self {
            Mutation::Delete => "deleting session",
            Mutation::UpdateStarred => "updating session",
            Mutation::Rename => "renaming session",
        }
    }

    /// Message key shown when the store reports no matching session.
    fn not_found_key(self) -> &'static str {
        match self {
            Mutation::Delete | Mutation::UpdateStarred => keys::SESSIONS_ERROR_NOT_FOUND,
            Mutation::Rename => keys::SESSIONS_ERROR_RENAME_FAILED,
        }
    }

    /// Fallback message key when the store raises.
    fn failure_key(self) -> &'static str {
        match self {
            Mutation::Delete => keys::SESSIONS_ERROR_DELETING,
            Mutation::UpdateStarred => keys::SESSIONS_ERROR_UPDATING,
            Mutation::Rename => keys::SESSIONS_ERROR_RENAMING,
        }
    }
}

/// Paginated session list state controller.
///
/// Construction schedules a load of page 1 and of the sidebar cache.
/// Failures never escape a method: store errors become a translated
/// `error_message`, sidebar failures are dropped.
///
/// Overlapping page loads are sequenced: only the most recently dispatched
/// load may publish its page, its error, or clear `is_loading`. Results of
/// superseded loads are discarded. Sidebar refreshes follow the same rule
/// among themselves. The ticket is compared inside the state write, so a
/// load superseded mid-write cannot land.
///
/// Cloning yields another handle to the same controller.
#[derive(Clone)]
pub struct SessionListController {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn SessionStore>,
    localizer: Arc<dyn Localizer>,
    translator: Arc<dyn ErrorTranslator>,
    scope: TaskScope,
    view: ViewStore,
    sessions_per_page: u32,
    max_sidebar_sessions: usize,
    latest_page_load: AtomicU64,
    latest_recent_load: AtomicU64,
}

impl SessionListController {
    /// Creates a controller bound to `scope` and starts the initial loads.
    ///
    /// Zero sizes in `config` are raised to one.
    pub fn new(
        scope: TaskScope,
        store: Arc<dyn SessionStore>,
        localizer: Arc<dyn Localizer>,
        translator: Arc<dyn ErrorTranslator>,
        config: ListConfig,
    ) -> Self {
        let inner = Arc::new(Inner {
            store,
            localizer,
            translator,
            view: ViewStore::new(scope.token()),
            scope,
            sessions_per_page: config.sessions_per_page.max(1),
            max_sidebar_sessions: config.max_sidebar_sessions.max(1),
            latest_page_load: AtomicU64::new(0),
            latest_recent_load: AtomicU64::new(0),
        });

        inner.load_sessions(1);
        inner.load_recent_sessions();

        Self { inner }
    }

    /// Snapshot of the current view-state.
    pub fn state(&self) -> SessionListState {
        self.inner.view.snapshot()
    }

    /// Subscribes to view-state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionListState> {
        self.inner.view.subscribe()
    }

    /// The scope this controller dispatches onto.
    pub fn scope(&self) -> &TaskScope {
        &self.inner.scope
    }

    /// Loads `page` (1-based; zero means 1) into the paged view.
    ///
    /// `is_loading` is set and the error cleared before this returns.
    pub fn load_sessions(&self, page: u32) {
        self.inner.load_sessions(page);
    }

    /// Refreshes the sidebar cache and total count. Failures are silent.
    pub fn load_recent_sessions(&self) {
        self.inner.load_recent_sessions();
    }

    /// Reloads the current page (or page 1) and the sidebar cache.
    pub fn refresh(&self) {
        self.inner.refresh();
    }

    /// Loads the following page if there is one.
    pub fn next_page(&self) {
        let target = self.inner.view.read(|state| match &state.paged_result {
            Some(paged) if paged.has_next_page => Some(paged.current_page + 1),
            _ => None,
        });
        if let Some(page) = target {
            self.inner.load_sessions(page);
        }
    }

    /// Loads the preceding page if there is one.
    pub fn previous_page(&self) {
        let target = self.inner.view.read(|state| match &state.paged_result {
            Some(paged) if paged.has_previous_page => {
                Some(paged.current_page.saturating_sub(1))
            }
            _ => None,
        });
        if let Some(page) = target {
            self.inner.load_sessions(page);
        }
    }

    /// Dismisses the current error message.
    pub fn clear_error(&self) {
        self.inner.view.update(|state| state.error_message.take().is_some());
    }

    /// Deletes a session, then refreshes on success.
    pub fn delete_session(&self, session_id: impl Into<String>) {
        let session_id = session_id.into();
        let store = Arc::clone(&self.inner.store);
        let id = session_id.clone();
        self.inner.run_mutation(Mutation::Delete, session_id, async move {
            store.delete_session(&id).await
        });
    }

    /// Sets or clears a session's starred flag, then refreshes on success.
    pub fn update_session_starred(&self, session_id: impl Into<String>, is_starred: bool) {
        let session_id = session_id.into();
        let store = Arc::clone(&self.inner.store);
        let id = session_id.clone();
        self.inner
            .run_mutation(Mutation::UpdateStarred, session_id, async move {
                store.update_session_starred(&id, is_starred).await
            });
    }

    /// Renames a session, then refreshes on success.
    pub fn rename_session(&self, session_id: impl Into<String>, new_title: impl Into<String>) {
        let session_id = session_id.into();
        let new_title = new_title.into();
        let store = Arc::clone(&self.inner.store);
        let id = session_id.clone();
        self.inner.run_mutation(Mutation::Rename, session_id, async move {
            store.rename_title(&id, &new_title).await
        });
    }

    /// Cancels the scope. Once this returns, no in-flight operation will
    /// touch the view-state again.
    pub fn dispose(&self) {
        self.inner.scope.cancel();
        self.inner.view.seal();
        tracing::debug!("Session list controller disposed");
    }
}

impl Inner {
    fn load_sessions(self: &Arc<Self>, page: u32) {
        let page = page.max(1);
        let ticket = self.latest_page_load.fetch_add(1, Ordering::SeqCst) + 1;

        self.view.update(|state| {
            state.is_loading = true;
            state.error_message = None;
            true
        });
        tracing::debug!(page, ticket, "Dispatching page load");

        let this = Arc::clone(self);
        self.scope.spawn("load_sessions", async move {
            let _loading = LoadingGuard {
                inner: Arc::clone(&this),
                ticket,
            };

            let result = this
                .store
                .get_sessions_paged(page, this.sessions_per_page)
                .await;

            let published = match result {
                Ok(paged) => {
                    let count = paged.sessions.len();
                    let published = this.view.update(|state| {
                        if !this.is_latest_page_load(ticket) {
                            return false;
                        }
                        state.paged_result = Some(paged);
                        true
                    });
                    if published {
                        tracing::debug!(page, count, "Page loaded");
                    }
                    published
                }
                Err(_) if !this.is_latest_page_load(ticket) => false,
                Err(error) => {
                    let message =
                        this.translate(&error, LOADING_CONTEXT, keys::SESSIONS_ERROR_LOADING);
                    this.view.update(|state| {
                        if !this.is_latest_page_load(ticket) {
                            return false;
                        }
                        state.error_message = Some(message);
                        true
                    })
                }
            };

            if !published {
                tracing::debug!(page, ticket, "Discarding superseded page load");
            }
        });
    }

    fn load_recent_sessions(self: &Arc<Self>) {
        let ticket = self.latest_recent_load.fetch_add(1, Ordering::SeqCst) + 1;

        let this = Arc::clone(self);
        self.scope.spawn("load_recent_sessions", async move {
            match this.store.get_all_sessions_sorted().await {
                Ok(sessions) => {
                    let total = sessions.len();
                    let recent: Vec<_> = sessions
                        .into_iter()
                        .take(this.max_sidebar_sessions)
                        .collect();
                    let published = this.view.update(|state| {
                        if this.latest_recent_load.load(Ordering::SeqCst) != ticket {
                            return false;
                        }
                        state.recent_sessions = recent;
                        state.total_session_count = total;
                        true
                    });
                    if !published {
                        tracing::debug!(ticket, "Discarding superseded sidebar refresh");
                    }
                }
                Err(error) => {
                    tracing::debug!(error = %error, "Sidebar refresh failed, keeping previous cache");
                }
            }
        });
    }

    fn refresh(self: &Arc<Self>) {
        let page = self.view.read(|state| state.current_page()).unwrap_or(1);
        self.load_sessions(page);
        self.load_recent_sessions();
    }

    fn run_mutation<F>(self: &Arc<Self>, mutation: Mutation, session_id: String, operation: F)
    where
        F: Future<Output = Result<bool>> + Send + 'static,
    {
        tracing::debug!(?mutation, session_id = %session_id, "Dispatching mutation");

        let this = Arc::clone(self);
        self.scope.spawn(mutation.task_name(), async move {
            match operation.await {
                Ok(true) => {
                    tracing::debug!(?mutation, session_id = %session_id, "Mutation applied");
                    this.refresh();
                }
                Ok(false) => {
                    tracing::debug!(?mutation, session_id = %session_id, "Session not found");
                    let message = this.localizer.get_string(mutation.not_found_key());
                    this.set_error(message);
                }
                Err(error) => {
                    let message =
                        this.translate(&error, mutation.context(), mutation.failure_key());
                    this.set_error(message);
                }
            }
        });
    }

    fn is_latest_page_load(&self, ticket: u64) -> bool {
        self.latest_page_load.load(Ordering::SeqCst) == ticket
    }

    fn translate(&self, error: &RosterError, context: &str, fallback_key: &str) -> String {
        let fallback = self.localizer.get_string(fallback_key);
        self.translator.user_friendly_error(error, context, &fallback)
    }

    fn set_error(&self, message: String) {
        self.view.update(|state| {
            state.error_message = Some(message);
            true
        });
    }
}

/// Clears `is_loading` when a page load ends, however it ends, unless a
/// newer load has been dispatched since.
struct LoadingGuard {
    inner: Arc<Inner>,
    ticket: u64,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let inner = &self.inner;
        let ticket = self.ticket;
        inner.view.update(|state| {
            inner.is_latest_page_load(ticket) && std::mem::replace(&mut state.is_loading, false)
        });
    }
}
