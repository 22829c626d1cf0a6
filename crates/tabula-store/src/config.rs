//! Store configuration
//!
//! Layered lowest to highest: built-in defaults, an optional TOML file,
//! then `TABULA_STORE__*` environment variables
//! (e.g. `TABULA_STORE__PATH=/var/lib/app.db`).

use crate::errors::{from_config, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment prefix read by `StoreConfig::load`
pub const ENV_PREFIX: &str = "TABULA_STORE";

/// SQLite journal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    #[default]
    Wal,
    Delete,
    Memory,
}

impl JournalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JournalMode::Wal => "WAL",
            JournalMode::Delete => "DELETE",
            JournalMode::Memory => "MEMORY",
        }
    }
}

/// How to open and tune the SQLite connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Database file; `None` opens an in-memory database
    pub path: Option<PathBuf>,
    pub foreign_keys: bool,
    /// Ignored for in-memory databases
    pub journal_mode: JournalMode,
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            foreign_keys: true,
            journal_mode: JournalMode::Wal,
            busy_timeout_ms: 5000,
        }
    }
}

impl StoreConfig {
    /// In-memory database with default settings
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// On-disk database at `path` with default settings
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Load from defaults, `file` (if given) and `TABULA_STORE__*` variables
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_from(file, ENV_PREFIX)
    }

    /// Same as `load` with a custom environment prefix
    pub fn load_from(file: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(file) = file {
            builder = builder.add_source(::config::File::from(file).required(true));
        }

        builder
            .add_source(::config::Environment::with_prefix(env_prefix).separator("__"))
            .build()
            .and_then(|settings| settings.try_deserialize::<StoreConfig>())
            .map_err(from_config)
    }

    pub fn is_in_memory(&self) -> bool {
        self.path.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = StoreConfig::default();
        assert!(cfg.is_in_memory());
        assert!(cfg.foreign_keys);
        assert_eq!(cfg.journal_mode, JournalMode::Wal);
        assert_eq!(cfg.busy_timeout_ms, 5000);
    }

    #[test]
    fn test_at_path() {
        let cfg = StoreConfig::at_path("/tmp/x.db");
        assert!(!cfg.is_in_memory());
        assert_eq!(JournalMode::Delete.as_str(), "DELETE");
    }
}
