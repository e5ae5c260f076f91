//! In-memory SessionStore implementation

use async_trait::async_trait;
use chrono::Utc;
use roster_core::error::Result;
use roster_core::session::{
    PagedResult, SessionStore, SessionSummary, paginate, sort_by_recency,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A process-local session store.
///
/// Same ordering and not-found semantics as `TomlSessionStore`, without any
/// persistence. Handy for embedding and tests.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionSummary>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `sessions`.
    pub fn with_sessions(sessions: impl IntoIterator<Item = SessionSummary>) -> Self {
        Self {
            sessions: RwLock::new(
                sessions
                    .into_iter()
                    .map(|session| (session.id.clone(), session))
                    .collect(),
            ),
        }
    }

    /// Inserts or replaces a session.
    pub async fn insert(&self, session: SessionSummary) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session);
    }

    /// Returns a copy of one session.
    pub async fn get(&self, session_id: &str) -> Option<SessionSummary> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn update<F>(&self, session_id: &str, updater: F) -> bool
    where
        F: FnOnce(&mut SessionSummary),
    {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(session_id) {
            Some(session) => {
                updater(session);
                session.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_sessions_paged(&self, page: u32, page_size: u32) -> Result<PagedResult> {
        let sessions = self.get_all_sessions_sorted().await?;
        Ok(paginate(&sessions, page, page_size))
    }

    async fn get_all_sessions_sorted(&self) -> Result<Vec<SessionSummary>> {
        let mut sessions: Vec<SessionSummary> =
            self.sessions.read().await.values().cloned().collect();
        sort_by_recency(&mut sessions);
        Ok(sessions)
    }

    async fn delete_session(&self, session_id: &str) -> Result<bool> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(session_id).is_some())
    }

    async fn update_session_starred(&self, session_id: &str, is_starred: bool) -> Result<bool> {
        Ok(self
            .update(session_id, |session| session.is_starred = is_starred)
            .await)
    }

    async fn rename_title(&self, session_id: &str, new_title: &str) -> Result<bool> {
        Ok(self
            .update(session_id, |session| session.title = new_title.to_string())
            .await)
    }
}
