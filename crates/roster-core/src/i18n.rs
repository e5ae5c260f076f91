//! Localized string lookup and user-facing error translation.

use crate::error::RosterError;

/// Keys of every localized string Roster looks up.
pub mod keys {
    pub const SESSIONS_ERROR_LOADING: &str = "sessions.error.loading";
    pub const SESSIONS_ERROR_NOT_FOUND: &str = "sessions.error.not.found";
    pub const SESSIONS_ERROR_DELETING: &str = "sessions.error.deleting";
    pub const SESSIONS_ERROR_UPDATING: &str = "sessions.error.updating";
    pub const SESSIONS_ERROR_RENAME_FAILED: &str = "sessions.error.rename.failed";
    pub const SESSIONS_ERROR_RENAMING: &str = "sessions.error.renaming";
    pub const ERRORS_STORAGE_UNAVAILABLE: &str = "errors.storage.unavailable";
    pub const ERRORS_DATA_CORRUPTED: &str = "errors.data.corrupted";
}

/// Looks up display strings by key.
///
/// Lookups never fail. What an implementation returns for an unknown key is
/// its own concern.
pub trait Localizer: Send + Sync {
    fn get_string(&self, key: &str) -> String;
}

/// Turns a raised failure into a message fit for display.
pub trait ErrorTranslator: Send + Sync {
    /// Builds a displayable message for `error`.
    ///
    /// # Arguments
    ///
    /// * `error` - The failure raised by the store
    /// * `context` - What was being attempted, e.g. "loading sessions"
    /// * `fallback` - Localized message to use when nothing more specific applies
    fn user_friendly_error(&self, error: &RosterError, context: &str, fallback: &str) -> String;
}
