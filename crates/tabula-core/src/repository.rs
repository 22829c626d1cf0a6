//! Generic repository over a `Database` handle
//!
//! `Repository` turns count/get/list/delete/partial-update intents into
//! parameterized SQL for the table described by its `Record`, runs them
//! through the handle and normalizes the results.
//!
//! ## Logging Ownership
//!
//! Each public operation logs its own boundary:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success, with `rows` or `rows_affected`
//! - `log_op_error!` on failure
//!
//! Errors are returned exactly as the handle produced them.

use crate::database::{Database, ExecResult};
use crate::errors::{RepoError, Result};
use crate::list_options::ListOptions;
use crate::record::Record;
use crate::row::FromRow;
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;
use tabula_core_types::{Attrs, Schema, Value};

/// Result size attached to an end event
enum Tally {
    Rows(u64),
    RowsAffected(u64),
}

/// Common queries for one entity table
///
/// Holds no mutable state; it is as thread-safe as its handle.
#[derive(Debug, Clone)]
pub struct Repository<D, R> {
    db: D,
    rec: R,
}

impl<D: Database, R: Record> Repository<D, R> {
    pub fn new(db: D, rec: R) -> Self {
        Self { db, rec }
    }

    /// The underlying handle
    pub fn db(&self) -> &D {
        &self.db
    }

    /// The record descriptor given at construction
    pub fn record(&self) -> &R {
        &self.rec
    }

    /// Total number of distinct primary keys in the table.
    ///
    /// A "no rows" answer from the handle counts as zero.
    pub fn count(&self) -> Result<i64> {
        self.boundary(
            "count",
            || self.count_impl(),
            |total| Tally::Rows(*total as u64),
        )
    }

    fn count_impl(&self) -> Result<i64> {
        let q = format!(
            "SELECT COUNT(DISTINCT {}) FROM {}",
            self.rec.primary_key(),
            self.rec.table_name()
        );
        match self.db.get::<i64>(&q, &[]) {
            Ok(total) => Ok(total),
            Err(err) if err.is_not_found() => Ok(0),
            Err(err) => Err(err),
        }
    }

    /// Fetch the row whose primary key equals `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` when no such row exists.
    pub fn get_by_id<T: FromRow>(&self, id: impl Into<Value>) -> Result<T> {
        let id = id.into();
        self.boundary(
            "get_by_id",
            || {
                let q = format!(
                    "SELECT * FROM {} WHERE {} = ? LIMIT 1",
                    self.rec.table_name(),
                    self.rec.primary_key()
                );
                self.db.get(&q, &[id])
            },
            |_| Tally::Rows(1),
        )
    }

    /// Fetch the first row matching every attribute by equality.
    ///
    /// An empty `attrs` issues no statement and yields `Ok(None)` (still
    /// logged as start and end), which stays distinguishable from a `NotFound` error for an unmatched filter.
    pub fn get_by_attrs<T: FromRow>(&self, attrs: &Attrs) -> Result<Option<T>> {
        self.boundary(
            "get_by_attrs",
            || {
                if attrs.is_empty() {
                    return Ok(None);
                }

                let (clauses, values): (Vec<_>, Vec<_>) = attrs
                    .iter()
                    .map(|(column, value)| (format!("{} = ?", column), value.clone()))
                    .unzip();

                let q = format!(
                    "SELECT * FROM {} WHERE {}",
                    self.rec.table_name(),
                    clauses.join(" AND ")
                );
                self.db.get(&q, &values).map(Some)
            },
            |found| Tally::Rows(u64::from(found.is_some())),
        )
    }

    /// Every row of the table, unfiltered
    pub fn get_all<T: FromRow>(&self) -> Result<Vec<T>> {
        self.boundary(
            "get_all",
            || {
                let q = format!("SELECT * FROM {}", self.rec.table_name());
                self.db.select(&q, &[])
            },
            |rows| Tally::Rows(rows.len() as u64),
        )
    }

    /// Delete the row whose primary key equals `id`, returning the
    /// handle's affected-row count.
    pub fn delete_by_id(&self, id: impl Into<Value>) -> Result<u64> {
        let id = id.into();
        let result = self.boundary(
            "delete_by_id",
            || {
                let mut q = format!(
                    "DELETE FROM {} WHERE {} = ?",
                    self.rec.table_name(),
                    self.rec.primary_key()
                );
                if self.db.dialect().supports_delete_limit() {
                    q.push_str(" LIMIT 1");
                }
                self.db.exec(&q, &[id])
            },
            |res| Tally::RowsAffected(res.rows_affected),
        )?;
        Ok(result.rows_affected)
    }

    /// Rows shaped by `opts`.
    ///
    /// An empty `opts.table` targets the record's table, and an empty
    /// `opts.order_by_column` falls back to the record's sort column.
    pub fn list<T: FromRow>(&self, mut opts: ListOptions) -> Result<Vec<T>> {
        if opts.table.is_empty() {
            opts.table = self.rec.table_name().to_string();
        }
        if opts.order_by_column.is_empty() {
            if let Some(column) = self.rec.sort_by() {
                opts.order_by_column = column.to_string();
            }
        }

        self.boundary(
            "list",
            || {
                let (q, args) = opts.build_query();
                self.db.select(&q, &args)
            },
            |rows| Tally::Rows(rows.len() as u64),
        )
    }

    /// Update the columns present in both `schema` and `attrs` on the row
    /// whose primary key equals `id`.
    ///
    /// Text, integer and boolean attributes must match their declared kind;
    /// the first mismatch rejects the whole update before any statement is
    /// built. Nothing to update yields `Ok(0)` without touching the handle.
    ///
    /// # Errors
    ///
    /// `Unprocessable` on a kind mismatch; handle errors otherwise.
    pub fn partial_update(
        &self,
        id: impl Into<Value>,
        schema: &Schema,
        attrs: &Attrs,
    ) -> Result<u64> {
        let id = id.into();
        let result = self.boundary(
            "partial_update",
            || {
                if schema.is_empty() || attrs.is_empty() {
                    return Ok(ExecResult::default());
                }
                let Some((q, args)) = self.update_statement(id, schema, attrs)? else {
                    return Ok(ExecResult::default());
                };
                self.db.exec(&q, &args)
            },
            |res| Tally::RowsAffected(res.rows_affected),
        )?;
        Ok(result.rows_affected)
    }

    /// `UPDATE ... SET` text and arguments, or `None` when no column
    /// survives validation
    fn update_statement(
        &self,
        id: Value,
        schema: &Schema,
        attrs: &Attrs,
    ) -> Result<Option<(String, Vec<Value>)>> {
        let mut assignments = Vec::new();
        let mut args = Vec::new();

        for (column, kind) in schema.iter() {
            let Some(value) = attrs.get(column) else {
                continue;
            };

            if !value.satisfies(*kind) {
                return Err(RepoError::Unprocessable {
                    column: column.to_string(),
                    expected: *kind,
                    actual: value
                        .kind()
                        .map(|k| k.to_string())
                        .unwrap_or_else(|| "null".to_string()),
                }
                .into());
            }

            assignments.push(format!("{} = ?", column));
            args.push(value.clone());
        }

        if args.is_empty() {
            return Ok(None);
        }

        args.push(id);
        let q = format!(
            "UPDATE {} SET {} WHERE {} = ?",
            self.rec.table_name(),
            assignments.join(", "),
            self.rec.primary_key()
        );
        Ok(Some((q, args)))
    }

    fn boundary<T>(
        &self,
        op: &'static str,
        run: impl FnOnce() -> Result<T>,
        tally: impl Fn(&T) -> Tally,
    ) -> Result<T> {
        let table = self.rec.table_name();
        log_op_start!(op, table = table);
        let start = Instant::now();

        let value = run().map_err(|e| {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                table = table
            );
            e
        })?;

        let duration_ms = start.elapsed().as_millis() as u64;
        match tally(&value) {
            Tally::Rows(n) => {
                log_op_end!(op, duration_ms = duration_ms, table = table, rows = n);
            }
            Tally::RowsAffected(n) => {
                log_op_end!(op, duration_ms = duration_ms, table = table, rows_affected = n);
            }
        }
        Ok(value)
    }
}
