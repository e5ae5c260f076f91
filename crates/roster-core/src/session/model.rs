//! Session summary domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lightweight view of a stored session, as shown in session lists.
///
/// The store owns the underlying session; list components only hold
/// read-only copies of this summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Unique session identifier
    pub id: String,
    /// Human-readable session title
    pub title: String,
    /// Whether the user starred this session
    #[serde(default)]
    pub is_starred: bool,
    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last change; lists are ordered by this, newest first
    pub updated_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Creates a summary whose creation and update times are both `at`.
    pub fn new(id: impl Into<String>, title: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_starred: false,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Sorts summaries into descending recency order.
///
/// Ties on `updated_at` fall back to ascending id so the order is
/// deterministic across calls.
pub fn sort_by_recency(sessions: &mut [SessionSummary]) {
    sessions.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
