//! Tabula Core - generic SQL repository helper
//!
//! This crate builds parameterized statements for common per-table
//! operations and delegates execution to a `Database` handle:
//! - `Repository`: count, get by id or attributes, list, delete, partial update
//! - `ListOptions`: SELECT shape with filter, ordering and paging
//! - `Row` / `FromRow`: binding of result rows into caller types
//! - Structured error and logging facilities
//!
//! The handle itself (connections, pooling, transactions) is supplied by the
//! caller; `tabula-store` provides one for SQLite.

pub mod database;
pub mod errors;
pub mod list_options;
pub mod logging_facility;
pub mod record;
pub mod repository;
pub mod row;

pub use tabula_core_types as types;

// Re-export commonly used types
pub use database::{affected_rows, Database, Dialect, ExecResult};
pub use errors::{RepoError, Result, TbError, TbErrorKind};
pub use list_options::{parse_order, ListOptions};
pub use record::{Record, TableInfo};
pub use repository::Repository;
pub use row::{FromRow, FromValue, Row};
pub use tabula_core_types::{Attrs, Schema, Value, ValueKind};
