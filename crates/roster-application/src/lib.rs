//! Application layer for Roster.
//!
//! Provides the `SessionListController`, which keeps the paged session view,
//! the sidebar cache and the error channel consistent while store operations
//! run concurrently on a caller-owned `TaskScope`.

pub mod controller;
pub mod state;
pub mod task_scope;

pub use controller::SessionListController;
pub use state::SessionListState;
pub use task_scope::TaskScope;
