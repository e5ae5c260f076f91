pub mod render;
pub mod sessions;

use anyhow::{Context, Result};
use roster_application::{SessionListController, TaskScope};
use roster_core::config::RootConfig;
use roster_infrastructure::{
    BundleLocalizer, ConfigService, DefaultErrorTranslator, RosterPaths, TomlSessionStore,
};
use std::path::PathBuf;
use std::sync::Arc;

/// How results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

/// Everything a command needs: resolved config, the store and the
/// localization collaborators.
pub struct AppContext {
    pub config: RootConfig,
    pub store: Arc<TomlSessionStore>,
    pub localizer: Arc<BundleLocalizer>,
}

impl AppContext {
    /// Resolves configuration and opens the session store.
    ///
    /// `data_dir` wins over `storage.data_dir` from the config file, which
    /// wins over the platform data directory.
    pub async fn load(config_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config_service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new(),
        };
        let config = config_service
            .get_config()
            .context("Failed to load configuration")?;

        let data_dir = match data_dir.or_else(|| config.storage.data_dir.clone()) {
            Some(dir) => dir,
            None => RosterPaths::data_dir().context("Failed to resolve data directory")?,
        };
        let store = TomlSessionStore::new(&data_dir)
            .await
            .with_context(|| format!("Failed to open session store at {:?}", data_dir))?;

        let localizer = match &config.locale.strings_file {
            Some(path) => BundleLocalizer::english()
                .with_overrides_from_file(path)
                .with_context(|| format!("Failed to load strings from {:?}", path))?,
            None => BundleLocalizer::english(),
        };

        Ok(Self {
            config,
            store: Arc::new(store),
            localizer: Arc::new(localizer),
        })
    }

    /// Builds a controller on the current runtime. Its initial loads start
    /// immediately.
    pub fn controller(&self) -> Result<SessionListController> {
        let scope = TaskScope::current()?;
        let translator = DefaultErrorTranslator::new(self.localizer.clone());
        Ok(SessionListController::new(
            scope,
            self.store.clone(),
            self.localizer.clone(),
            Arc::new(translator),
            self.config.list,
        ))
    }
}
