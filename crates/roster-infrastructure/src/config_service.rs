//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` (by default
//! `~/.config/roster/config.toml`) and caches it.

use crate::paths::RosterPaths;
use roster_core::config::RootConfig;
use roster_core::error::{Result, RosterError};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading the platform default `config.toml`.
    pub fn new() -> Self {
        Self {
            path: RosterPaths::config_file().ok(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing or empty file yields the defaults. A file that exists but
    /// does not parse, or holds invalid values, is an error.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let cached = self
                .config
                .read()
                .map_err(|_| RosterError::internal("config cache lock poisoned"))?;
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = match &self.path {
            Some(path) => Self::load_from(path)?,
            None => {
                tracing::debug!("No config directory available, using defaults");
                RootConfig::default()
            }
        };

        let mut cached = self
            .config
            .write()
            .map_err(|_| RosterError::internal("config cache lock poisoned"))?;
        *cached = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut cached) = self.config.write() {
            *cached = None;
        }
    }

    fn load_from(path: &Path) -> Result<RootConfig> {
        if !path.exists() {
            tracing::debug!("Config file {:?} not found, using defaults", path);
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        let config: RootConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);

        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
