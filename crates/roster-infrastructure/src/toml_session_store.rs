//! AsyncDirStorage-based SessionStore implementation

use crate::dto::{SESSION_ENTITY, create_session_migrator};
use crate::paths::RosterPaths;
use async_trait::async_trait;
use chrono::Utc;
use roster_core::error::{Result, RosterError};
use roster_core::session::{
    PagedResult, SessionStore, SessionSummary, paginate, sort_by_recency,
};
use std::path::Path;
use tokio::fs;
use tokio::sync::Mutex;
use version_migrate::{
    AsyncDirStorage, DirStorageStrategy, FilenameEncoding, FormatStrategy, MigrationError,
    PathStrategy,
};

const SESSIONS_DIR: &str = "sessions";

/// A store keeping each session in its own versioned TOML file.
///
/// Directory structure:
/// ```text
/// data_dir/
/// └── sessions/
///     ├── session-id-1.toml
///     └── session-id-2.toml
/// ```
///
/// Writes go through `AsyncDirStorage`, which replaces files atomically.
/// Read-modify-write updates are serialized through an internal lock.
pub struct TomlSessionStore {
    storage: AsyncDirStorage,
    write_lock: Mutex<()>,
}

impl TomlSessionStore {
    /// Creates a store rooted at `data_dir`, creating `data_dir/sessions`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created or the storage
    /// cannot be initialized.
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).await?;

        let paths = RosterPaths::app_paths().data_strategy(PathStrategy::CustomBase(data_dir));
        let migrator = create_session_migrator()?;
        let strategy = DirStorageStrategy::default()
            .with_format(FormatStrategy::Toml)
            .with_filename_encoding(FilenameEncoding::Direct);

        let storage = AsyncDirStorage::new(paths, SESSIONS_DIR, migrator, strategy).await?;
        fs::create_dir_all(storage.base_path()).await?;
        tracing::info!("Session store ready at {:?}", storage.base_path());

        Ok(Self {
            storage,
            write_lock: Mutex::new(()),
        })
    }

    /// Creates a store at the platform data directory (~/.local/share/roster).
    pub async fn default_location() -> Result<Self> {
        let data_dir = RosterPaths::data_dir()
            .map_err(|e| RosterError::config(format!("Failed to get data directory: {}", e)))?;
        Self::new(data_dir).await
    }

    /// Returns the directory holding the session files.
    pub fn sessions_dir(&self) -> &Path {
        self.storage.base_path()
    }

    /// Creates and persists a new session with a fresh UUID.
    pub async fn create_session(&self, title: impl Into<String>) -> Result<SessionSummary> {
        let session = SessionSummary::new(uuid::Uuid::new_v4().to_string(), title, Utc::now());
        let _guard = self.write_lock.lock().await;
        self.storage
            .save(SESSION_ENTITY, &session.id, &session)
            .await?;
        tracing::debug!("Created session {}", session.id);
        Ok(session)
    }

    /// Writes a session as-is, replacing any file with the same id.
    pub async fn save(&self, session: &SessionSummary) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.storage
            .save(SESSION_ENTITY, &session.id, session)
            .await?;
        Ok(())
    }

    /// Loads one session, `None` if no file exists for it.
    pub async fn find(&self, session_id: &str) -> Result<Option<SessionSummary>> {
        match self
            .storage
            .load::<SessionSummary>(SESSION_ENTITY, session_id)
            .await
        {
            Ok(session) => Ok(Some(session)),
            Err(e) if is_missing(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Loads, modifies and saves one session. Returns false if it does not exist.
    async fn update<F>(&self, session_id: &str, updater: F) -> Result<bool>
    where
        F: FnOnce(&mut SessionSummary),
    {
        let _guard = self.write_lock.lock().await;
        let Some(mut session) = self.find(session_id).await? else {
            return Ok(false);
        };

        updater(&mut session);
        session.updated_at = Utc::now();
        self.storage
            .save(SESSION_ENTITY, &session.id, &session)
            .await?;

        Ok(true)
    }

    /// Ids of every `.toml` file in the sessions directory.
    async fn list_ids(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(self.sessions_dir()).await?;
        let mut ids = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                ids.push(stem.to_string());
            }
        }

        Ok(ids)
    }
}

/// Whether a storage error means the session file does not exist.
fn is_missing(error: &MigrationError) -> bool {
    let message = error.to_string();
    message.contains("No such file or directory")
        || message.contains("not found")
        || message.contains("cannot find")
}

#[async_trait]
impl SessionStore for TomlSessionStore {
    async fn get_sessions_paged(&self, page: u32, page_size: u32) -> Result<PagedResult> {
        let sessions = self.get_all_sessions_sorted().await?;
        Ok(paginate(&sessions, page, page_size))
    }

    async fn get_all_sessions_sorted(&self) -> Result<Vec<SessionSummary>> {
        let mut sessions = Vec::new();

        for id in self.list_ids().await? {
            match self
                .storage
                .load::<SessionSummary>(SESSION_ENTITY, &id)
                .await
            {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    tracing::warn!("Skipping unreadable session '{}': {}", id, e);
                    // Continue loading other sessions
                }
            }
        }

        sort_by_recency(&mut sessions);
        Ok(sessions)
    }

    async fn delete_session(&self, session_id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        if self.find(session_id).await?.is_none() {
            return Ok(false);
        }

        self.storage.delete(session_id).await?;
        Ok(true)
    }

    async fn update_session_starred(&self, session_id: &str, is_starred: bool) -> Result<bool> {
        self.update(session_id, |session| session.is_starred = is_starred)
            .await
    }

    async fn rename_title(&self, session_id: &str, new_title: &str) -> Result<bool> {
        self.update(session_id, |session| session.title = new_title.to_string())
            .await
    }
}
