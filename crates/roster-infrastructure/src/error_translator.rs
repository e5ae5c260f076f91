//! Default ErrorTranslator implementation.

use roster_core::RosterError;
use roster_core::i18n::{ErrorTranslator, Localizer, keys};
use std::sync::Arc;

/// Maps store failures onto a handful of user-facing categories.
///
/// | Failure           | Message                                   |
/// |-------------------|-------------------------------------------|
/// | `Io`              | `<fallback>: <errors.storage.unavailable>` |
/// | `Serialization`   | `<fallback>: <errors.data.corrupted>`      |
/// | `NotFound`        | `<sessions.error.not.found>`               |
/// | anything else     | `<fallback>`                               |
pub struct DefaultErrorTranslator {
    localizer: Arc<dyn Localizer>,
}

impl DefaultErrorTranslator {
    pub fn new(localizer: Arc<dyn Localizer>) -> Self {
        Self { localizer }
    }
}

impl ErrorTranslator for DefaultErrorTranslator {
    fn user_friendly_error(&self, error: &RosterError, context: &str, fallback: &str) -> String {
        tracing::warn!(context, error = %error, "Store operation failed");

        match error {
            RosterError::Io { .. } => format!(
                "{}: {}",
                fallback,
                self.localizer.get_string(keys::ERRORS_STORAGE_UNAVAILABLE)
            ),
            RosterError::Serialization { .. } => format!(
                "{}: {}",
                fallback,
                self.localizer.get_string(keys::ERRORS_DATA_CORRUPTED)
            ),
            RosterError::NotFound { .. } => {
                self.localizer.get_string(keys::SESSIONS_ERROR_NOT_FOUND)
            }
            _ => fallback.to_string(),
        }
    }
}
