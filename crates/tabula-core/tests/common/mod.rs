#![allow(dead_code)]

use std::cell::RefCell;
use tabula_core::{Database, Dialect, ExecResult, FromRow, Record, Result, Row, TbError, Value};

/// One statement seen by the fake handle
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub sql: String,
    pub args: Vec<Value>,
}

/// In-memory handle that records every statement and answers from a script
pub struct RecordingDatabase {
    calls: RefCell<Vec<Call>>,
    rows: Vec<Row>,
    get_error: Option<TbError>,
    exec_result: std::result::Result<ExecResult, TbError>,
    dialect: Dialect,
}

impl RecordingDatabase {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            rows: Vec::new(),
            get_error: None,
            exec_result: Ok(ExecResult::default()),
            dialect: Dialect::MySql,
        }
    }

    /// Rows returned by `select`, and the first one by `get`
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_get_error(mut self, err: TbError) -> Self {
        self.get_error = Some(err);
        self
    }

    pub fn with_exec(mut self, result: std::result::Result<ExecResult, TbError>) -> Self {
        self.exec_result = result;
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.borrow().last().cloned()
    }

    fn record(&self, method: &'static str, sql: &str, args: &[Value]) {
        self.calls.borrow_mut().push(Call {
            method,
            sql: sql.to_string(),
            args: args.to_vec(),
        });
    }
}

impl Database for RecordingDatabase {
    fn select<T: FromRow>(&self, sql: &str, args: &[Value]) -> Result<Vec<T>> {
        self.record("select", sql, args);
        self.rows.iter().map(T::from_row).collect()
    }

    fn get<T: FromRow>(&self, sql: &str, args: &[Value]) -> Result<T> {
        self.record("get", sql, args);
        if let Some(err) = &self.get_error {
            return Err(err.clone());
        }
        match self.rows.first() {
            Some(row) => T::from_row(row),
            None => Err(TbError::no_rows()),
        }
    }

    fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecResult> {
        self.record("exec", sql, args);
        self.exec_result.clone()
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}

/// `users(id, name, active)` descriptor without a default sort
pub struct Users;

impl Record for Users {
    fn table_name(&self) -> &str {
        "users"
    }

    fn primary_key(&self) -> &str {
        "id"
    }
}

/// `products(sku, ...)` descriptor sorted by price
pub struct Products;

impl Record for Products {
    fn table_name(&self) -> &str {
        "products"
    }

    fn primary_key(&self) -> &str {
        "sku"
    }

    fn sort_by(&self) -> Option<&str> {
        Some("price")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

impl FromRow for User {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            active: row.get("active")?,
        })
    }
}

pub fn user_row(id: i64, name: &str, active: bool) -> Row {
    Row::new()
        .with("id", id)
        .with("name", name)
        .with("active", active)
}
