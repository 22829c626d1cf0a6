//! SQLite implementation of the repository handle
//!
//! Binds `Value` arguments as SQLite parameters and converts result rows
//! into `tabula_core::Row`.

use crate::config::StoreConfig;
use crate::db;
use crate::errors::{from_rusqlite, Result};
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{params_from_iter, Connection, ToSql};
use tabula_core::{Database, Dialect, ExecResult, FromRow, Row, TbError};
use tabula_core_types::Value;

/// `Database` handle over a single rusqlite connection
pub struct SqliteDatabase {
    conn: Connection,
}

impl SqliteDatabase {
    /// Wrap an already opened and configured connection
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open and configure a connection from `cfg`
    pub fn from_config(cfg: &StoreConfig) -> Result<Self> {
        db::open_with(cfg).map(Self::new)
    }

    /// In-memory database with default settings
    pub fn open_in_memory() -> Result<Self> {
        Self::from_config(&StoreConfig::in_memory())
    }

    /// Direct access for schema setup and anything outside the repository
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn into_connection(self) -> Connection {
        self.conn
    }

    /// Run a query and hand each converted row to `bind`, stopping after
    /// `max` rows when given
    fn query_rows<T>(
        &self,
        sql: &str,
        args: &[Value],
        max: Option<usize>,
        mut bind: impl FnMut(&Row) -> Result<T>,
    ) -> Result<Vec<T>> {
        tracing::debug!(sql = sql, arg_count = args.len(), "sqlite query");

        let mut stmt = self.conn.prepare(sql).map_err(from_rusqlite)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = stmt
            .query(params_from_iter(args.iter().map(SqlArg)))
            .map_err(from_rusqlite)?;

        let mut out = Vec::new();
        while let Some(raw) = rows.next().map_err(from_rusqlite)? {
            let mut row = Row::new();
            for (idx, column) in columns.iter().enumerate() {
                let value = raw.get_ref(idx).map_err(from_rusqlite)?;
                row.push(column.as_str(), from_value_ref(value));
            }
            out.push(bind(&row)?);
            if max.is_some_and(|m| out.len() >= m) {
                break;
            }
        }
        Ok(out)
    }
}

impl Database for SqliteDatabase {
    fn select<T: FromRow>(&self, sql: &str, args: &[Value]) -> Result<Vec<T>> {
        self.query_rows(sql, args, None, T::from_row)
    }

    fn get<T: FromRow>(&self, sql: &str, args: &[Value]) -> Result<T> {
        self.query_rows(sql, args, Some(1), T::from_row)?
            .pop()
            .ok_or_else(|| TbError::no_rows().with_op("sqlite"))
    }

    fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecResult> {
        tracing::debug!(sql = sql, arg_count = args.len(), "sqlite exec");

        let n = self
            .conn
            .execute(sql, params_from_iter(args.iter().map(SqlArg)))
            .map_err(from_rusqlite)?;
        Ok(ExecResult::new(n as u64))
    }

    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }
}

/// Borrowed `Value` as a SQLite parameter
struct SqlArg<'a>(&'a Value);

impl ToSql for SqlArg<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self.0 {
            Value::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            Value::Bool(b) => ToSqlOutput::from(i64::from(*b)),
            Value::Int(n) => ToSqlOutput::from(*n),
            Value::Float(x) => ToSqlOutput::from(*x),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

fn from_value_ref(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(n) => Value::Int(n),
        ValueRef::Real(x) => Value::Float(x),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Value::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
