//! One page of the session list.

use super::model::SessionSummary;
use serde::{Deserialize, Serialize};

/// A single page of sessions plus its navigation flags.
///
/// Every load produces a fresh value; holders replace it wholesale rather
/// than editing it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResult {
    /// Sessions on this page, in descending recency order
    pub sessions: Vec<SessionSummary>,
    /// 1-based page number
    pub current_page: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PagedResult {
    /// An empty first page.
    pub fn empty() -> Self {
        Self {
            sessions: Vec::new(),
            current_page: 1,
            has_next_page: false,
            has_previous_page: false,
        }
    }

    /// Returns true if the page contains a session with the given id.
    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.iter().any(|s| s.id == session_id)
    }
}

/// Cuts one page out of an already sorted session list.
///
/// `page` is 1-based; zero is treated as the first page. A page past the end
/// yields no sessions but still reports a previous page.
pub fn paginate(sorted: &[SessionSummary], page: u32, page_size: u32) -> PagedResult {
    let page = page.max(1);
    let page_size = page_size.max(1) as usize;
    let start = (page as usize - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(sorted.len());

    let sessions = if start < sorted.len() {
        sorted[start..end].to_vec()
    } else {
        Vec::new()
    };

    PagedResult {
        sessions,
        current_page: page,
        has_next_page: end < sorted.len(),
        has_previous_page: page > 1,
    }
}
