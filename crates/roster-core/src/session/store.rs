//! Session store trait.
//!
//! Defines the interface the list controller consumes for querying and
//! mutating persisted sessions.

use super::model::SessionSummary;
use super::paged::PagedResult;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store of persisted sessions.
///
/// Implementations must be safe to call from several tasks at once; the
/// list controller issues page loads, sidebar refreshes and mutations
/// concurrently against the same store.
///
/// The mutation methods report whether a matching session existed. A
/// missing session is an `Ok(false)`, not an error.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns one page of sessions in descending recency order.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number
    /// * `page_size` - Number of sessions per page
    async fn get_sessions_paged(&self, page: u32, page_size: u32) -> Result<PagedResult>;

    /// Returns every session in descending recency order.
    async fn get_all_sessions_sorted(&self) -> Result<Vec<SessionSummary>>;

    /// Deletes a session.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Session found and deleted
    /// - `Ok(false)`: No session with that ID
    /// - `Err(_)`: Error occurred during deletion
    async fn delete_session(&self, session_id: &str) -> Result<bool>;

    /// Sets or clears the starred flag of a session.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Session found and updated
    /// - `Ok(false)`: No session with that ID
    /// - `Err(_)`: Error occurred during the update
    async fn update_session_starred(&self, session_id: &str, is_starred: bool) -> Result<bool>;

    /// Replaces the title of a session.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Session found and renamed
    /// - `Ok(false)`: No session with that ID
    /// - `Err(_)`: Error occurred during the rename
    async fn rename_title(&self, session_id: &str, new_title: &str) -> Result<bool>;
}
