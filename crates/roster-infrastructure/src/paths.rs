//! Unified path management for roster files.
//!
//! ```text
//! ~/.config/roster/            # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/roster/       # Data directory
//! └── sessions/                # One TOML file per session (AsyncDirStorage)
//! ```

use std::path::PathBuf;
use version_migrate::AppPaths;

const APP_NAME: &str = "roster";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for roster.
///
/// Resolved through `AppPaths`, the same resolver the session storage uses.
pub struct RosterPaths;

impl RosterPaths {
    /// Platform paths for roster (XDG on Linux/macOS).
    pub fn app_paths() -> AppPaths {
        AppPaths::new(APP_NAME)
    }

    /// Returns the roster configuration directory (e.g. `~/.config/roster/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .config_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    /// Returns the roster data directory (e.g. `~/.local/share/roster/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .data_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    /// Returns the path of `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_config_dir() {
        if let (Ok(dir), Ok(file)) = (RosterPaths::config_dir(), RosterPaths::config_file()) {
            assert_eq!(file.parent(), Some(dir.as_path()));
            assert!(dir.ends_with("roster"));
        }
    }
}
