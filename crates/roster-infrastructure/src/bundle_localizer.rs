//! String-table Localizer implementation.

use roster_core::error::Result;
use roster_core::i18n::{Localizer, keys};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_STRINGS: &[(&str, &str)] = &[
    (keys::SESSIONS_ERROR_LOADING, "Failed to load sessions"),
    (keys::SESSIONS_ERROR_NOT_FOUND, "Session not found"),
    (keys::SESSIONS_ERROR_DELETING, "Failed to delete session"),
    (keys::SESSIONS_ERROR_UPDATING, "Failed to update session"),
    (keys::SESSIONS_ERROR_RENAME_FAILED, "Could not rename session"),
    (keys::SESSIONS_ERROR_RENAMING, "Failed to rename session"),
    (keys::ERRORS_STORAGE_UNAVAILABLE, "storage is unavailable"),
    (keys::ERRORS_DATA_CORRUPTED, "session data is corrupted"),
];

#[derive(Debug, Deserialize)]
struct StringsFile {
    #[serde(default)]
    strings: HashMap<String, String>,
}

/// A localizer backed by an in-memory key/value table.
///
/// Starts from the built-in English strings. An override file is a TOML
/// document with a `[strings]` table whose keys are quoted message keys:
///
/// ```toml
/// [strings]
/// "sessions.error.loading" = "Sitzungen konnten nicht geladen werden"
/// ```
///
/// Unknown keys resolve to the key itself.
#[derive(Debug, Clone)]
pub struct BundleLocalizer {
    strings: HashMap<String, String>,
}

impl BundleLocalizer {
    /// Creates a localizer with the built-in English strings only.
    pub fn english() -> Self {
        Self {
            strings: BUILTIN_STRINGS
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Overlays entries parsed from a TOML `[strings]` document.
    pub fn with_overrides_from_str(mut self, content: &str) -> Result<Self> {
        let file: StringsFile = toml::from_str(content)?;
        self.strings.extend(file.strings);
        Ok(self)
    }

    /// Overlays entries from a TOML `[strings]` file on disk.
    pub fn with_overrides_from_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loading string overrides from {:?}", path);
        self.with_overrides_from_str(&content)
    }
}

impl Default for BundleLocalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for BundleLocalizer {
    fn get_string(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_key() {
        let localizer = BundleLocalizer::english();
        assert_eq!(
            localizer.get_string(keys::SESSIONS_ERROR_NOT_FOUND),
            "Session not found"
        );
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let localizer = BundleLocalizer::english();
        assert_eq!(localizer.get_string("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_overrides_replace_builtin() {
        let localizer = BundleLocalizer::english()
            .with_overrides_from_str(
                "[strings]\n\"sessions.error.loading\" = \"Chargement impossible\"\n",
            )
            .unwrap();

        assert_eq!(
            localizer.get_string(keys::SESSIONS_ERROR_LOADING),
            "Chargement impossible"
        );
        assert_eq!(
            localizer.get_string(keys::SESSIONS_ERROR_DELETING),
            "Failed to delete session"
        );
    }
}
