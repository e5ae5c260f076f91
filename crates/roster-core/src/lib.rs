//! Domain layer for Roster.
//!
//! Holds the session list model, the store and localization traits the list
//! controller consumes, configuration, and the shared error type.

pub mod config;
pub mod error;
pub mod i18n;
pub mod session;

// Re-export common error type
pub use error::RosterError;
