//! Infrastructure layer for Roster.
//!
//! Concrete session stores, configuration loading, path resolution and the
//! default localization/translation collaborators.

pub mod bundle_localizer;
pub mod config_service;
pub mod dto;
pub mod error_translator;
pub mod memory_session_store;
pub mod paths;
pub mod toml_session_store;

pub use bundle_localizer::BundleLocalizer;
pub use config_service::ConfigService;
pub use error_translator::DefaultErrorTranslator;
pub use memory_session_store::InMemorySessionStore;
pub use paths::RosterPaths;
pub use toml_session_store::TomlSessionStore;
