//! Database handle abstraction
//!
//! The repository never talks to a driver directly. It hands SQL text and
//! positional arguments to a `Database`, which executes them and binds the
//! result rows.

use crate::errors::Result;
use crate::row::FromRow;
use tabula_core_types::Value;

/// SQL dialect spoken by a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    MySql,
    Sqlite,
}

impl Dialect {
    /// Whether `DELETE ... LIMIT n` is accepted
    pub fn supports_delete_limit(&self) -> bool {
        matches!(self, Dialect::MySql)
    }
}

/// Outcome of an UPDATE or DELETE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecResult {
    pub rows_affected: u64,
}

impl ExecResult {
    pub fn new(rows_affected: u64) -> Self {
        Self { rows_affected }
    }
}

/// Affected-row count of an optional exec result; a missing result counts
/// as zero rows.
pub fn affected_rows(result: Option<&ExecResult>) -> u64 {
    result.map(|r| r.rows_affected).unwrap_or(0)
}

/// A handle able to run parameterized statements
///
/// Placeholders are `?`, bound in order from `args`.
pub trait Database {
    /// Run a query and bind every result row
    fn select<T: FromRow>(&self, sql: &str, args: &[Value]) -> Result<Vec<T>>;

    /// Run a query and bind its first row.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error when the query yields no row.
    fn get<T: FromRow>(&self, sql: &str, args: &[Value]) -> Result<T>;

    /// Run a statement that does not return rows
    fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecResult>;

    fn dialect(&self) -> Dialect {
        Dialect::default()
    }
}

impl<D: Database> Database for &D {
    fn select<T: FromRow>(&self, sql: &str, args: &[Value]) -> Result<Vec<T>> {
        (**self).select(sql, args)
    }

    fn get<T: FromRow>(&self, sql: &str, args: &[Value]) -> Result<T> {
        (**self).get(sql, args)
    }

    fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecResult> {
        (**self).exec(sql, args)
    }

    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }
}
