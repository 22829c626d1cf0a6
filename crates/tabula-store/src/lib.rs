//! Tabula Store - SQLite handle for the Tabula repository
//!
//! Provides:
//! - `SqliteDatabase`, a `Database` implementation over rusqlite
//! - Connection helpers (`db::open`, `db::configure`)
//! - `StoreConfig`, layered from defaults, a TOML file and the environment

pub mod config;
pub mod db;
pub mod errors;
pub mod sqlite_db;

// Re-export key types
pub use crate::config::{JournalMode, StoreConfig};
pub use errors::Result;
pub use sqlite_db::SqliteDatabase;
