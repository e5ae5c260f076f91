//! Root configuration model.

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of sessions on one page of the list.
pub const DEFAULT_SESSIONS_PER_PAGE: u32 = 10;

/// Default upper bound on the sidebar's recent-sessions cache.
pub const MAX_SIDEBAR_SESSIONS: usize = 50;

/// Contents of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RootConfig {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
}

impl RootConfig {
    /// Checks values that would make the list unusable.
    pub fn validate(&self) -> Result<()> {
        self.list.validate()
    }
}

/// Sizing of the paged list and the sidebar cache.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    #[serde(default = "default_sessions_per_page")]
    pub sessions_per_page: u32,
    #[serde(default = "default_max_sidebar_sessions")]
    pub max_sidebar_sessions: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            sessions_per_page: DEFAULT_SESSIONS_PER_PAGE,
            max_sidebar_sessions: MAX_SIDEBAR_SESSIONS,
        }
    }
}

impl ListConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sessions_per_page == 0 {
            return Err(RosterError::config("list.sessions_per_page must be positive"));
        }
        if self.max_sidebar_sessions == 0 {
            return Err(RosterError::config(
                "list.max_sidebar_sessions must be positive",
            ));
        }
        Ok(())
    }
}

fn default_sessions_per_page() -> u32 {
    DEFAULT_SESSIONS_PER_PAGE
}

fn default_max_sidebar_sessions() -> usize {
    MAX_SIDEBAR_SESSIONS
}

/// Where session files live.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StorageConfig {
    /// Overrides the platform data directory when set
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Localized string overrides.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct LocaleConfig {
    /// TOML file with a `[strings]` table overlaying the built-in strings
    #[serde(default)]
    pub strings_file: Option<PathBuf>,
}
