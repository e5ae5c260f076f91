//! Session DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: id, title, starred flag, created/updated timestamps

use chrono::{DateTime, Utc};
use roster_core::RosterError;
use roster_core::session::SessionSummary;
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

/// Entity name the session migration path is registered under.
pub const SESSION_ENTITY: &str = "session";

/// Session DTO V1.0.0, the on-disk shape of one session file.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct SessionSummaryV1_0_0 {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_starred: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IntoDomain<SessionSummary> for SessionSummaryV1_0_0 {
    fn into_domain(self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            title: self.title,
            is_starred: self.is_starred,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl FromDomain<SessionSummary> for SessionSummaryV1_0_0 {
    fn from_domain(session: SessionSummary) -> Self {
        SessionSummaryV1_0_0 {
            id: session.id,
            title: session.title,
            is_starred: session.is_starred,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for session entities.
pub fn create_session_migrator() -> Result<version_migrate::Migrator, RosterError> {
    // Expansion of `migrator!("session" => [SessionSummaryV1_0_0, SessionSummary], save = true)`;
    // the macro is not available in version-migrate 0.15.
    let mut migrator = version_migrate::Migrator::new();
    let path = version_migrate::Migrator::define("session")
        .from::<SessionSummaryV1_0_0>()
        .into_with_save::<SessionSummary>();
    migrator
        .register(path)
        .map(|_| migrator)
        .map_err(|e| RosterError::internal(format!("Failed to create session migrator: {}", e)))
}
