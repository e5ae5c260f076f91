//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: Session summary (`SessionSummary`) and recency ordering
//! - `paged`: One page of the list (`PagedResult`) and `paginate`
//! - `store`: Store trait consumed by the list controller (`SessionStore`)

mod model;
mod paged;
mod store;

// Re-export public API
pub use model::{SessionSummary, sort_by_recency};
pub use paged::{PagedResult, paginate};
pub use store::SessionStore;
