//! Database connection management
//!
//! Provides utilities for opening and tuning SQLite connections

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Open the database described by `cfg` and apply its settings
pub fn open_with(cfg: &StoreConfig) -> Result<Connection> {
    let conn = match &cfg.path {
        Some(path) => open(path)?,
        None => open_in_memory()?,
    };
    configure(&conn, cfg)?;
    Ok(conn)
}

/// Apply pragmas and timeouts from `cfg` to an open connection
pub fn configure(conn: &Connection, cfg: &StoreConfig) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", cfg.foreign_keys)
        .map_err(from_rusqlite)?;

    conn.busy_timeout(Duration::from_millis(cfg.busy_timeout_ms))
        .map_err(from_rusqlite)?;

    // In-memory databases always report "memory"
    if !cfg.is_in_memory() {
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", cfg.journal_mode.as_str(), |row| {
                row.get(0)
            })
            .map_err(from_rusqlite)?;
        tracing::debug!(journal_mode = %mode, "configured sqlite journal mode");
    }

    Ok(())
}
