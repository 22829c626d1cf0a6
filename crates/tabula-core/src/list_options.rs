//! List query shapes
//!
//! `ListOptions` describes a `SELECT *` over one table with at most one
//! equality filter, an optional ordering and limit/offset paging. Paging
//! values of 0 mean "unrestricted".

use std::fmt;
use tabula_core_types::Value;

pub const ASCENDING: &str = "ASC";
pub const DESCENDING: &str = "DESC";

/// Options for `Repository::list`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    /// Target table; empty means the repository record's table
    pub table: String,
    pub offset: u64,
    pub limit: u64,
    pub order_by_column: String,
    /// Free-form direction, resolved with `parse_order`
    pub order: String,
    pub where_column: String,
    pub where_value: Option<Value>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options targeting `table` explicitly
    pub fn for_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Set the single equality filter. A later call replaces an earlier one.
    pub fn where_eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_column = column.into();
        self.where_value = Some(value.into());
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, order: impl Into<String>) -> Self {
        self.order_by_column = column.into();
        self.order = order.into();
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    fn filter(&self) -> Option<(&str, &Value)> {
        match &self.where_value {
            Some(value) if !self.where_column.is_empty() && !value.is_null() => {
                Some((self.where_column.as_str(), value))
            }
            _ => None,
        }
    }

    /// Build the SELECT statement and its positional arguments.
    ///
    /// Clause order is fixed: table, filter, order, limit, offset.
    pub fn build_query(&self) -> (String, Vec<Value>) {
        let mut q = format!("SELECT * FROM {}", self.table);
        let mut args = Vec::new();

        if let Some((column, value)) = self.filter() {
            q.push_str(&format!(" WHERE {} = ?", column));
            args.push(value.clone());
        }

        if !self.order_by_column.is_empty() {
            q.push_str(&format!(
                " ORDER BY {} {}",
                self.order_by_column,
                parse_order(&self.order)
            ));
        }

        if self.limit > 0 {
            q.push_str(&format!(" LIMIT {}", self.limit));
        }

        // Emitted even without LIMIT
        if self.offset > 0 {
            q.push_str(&format!(" OFFSET {}", self.offset));
        }

        (q, args)
    }

    /// Read `offset`, `limit`, `order` and `by` from decoded query pairs.
    ///
    /// Unparsable numbers become 0. When a key repeats, the first value wins.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut offset = None;
        let mut limit = None;
        let mut order = None;
        let mut by = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "offset" => &mut offset,
                "limit" => &mut limit,
                "order" => &mut order,
                "by" => &mut by,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.as_ref().to_string());
            }
        }

        // Digits only: `str::parse` would also take a leading '+'
        let parse_u64 = |v: Option<String>| {
            v.filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(0)
        };

        Self {
            offset: parse_u64(offset),
            limit: parse_u64(limit),
            order: order.unwrap_or_default(),
            order_by_column: by.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Parse a raw query string such as `limit=10&order=desc&by=price`
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_query_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }
}

impl fmt::Display for ListOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (q, _) = self.build_query();
        f.write_str(&q)
    }
}

/// Resolve a free-form direction into `"ASC"` or `"DESC"`.
///
/// Trimmed input of at least four bytes whose uppercased form starts with
/// `DESC` yields `"DESC"`; everything else, including empty input, yields
/// `"ASC"`. Uppercasing is Unicode-aware, so `"deſc"` also means descending.
pub fn parse_order(order: &str) -> &'static str {
    let order = order.trim();
    if order.len() >= 4 && order.to_uppercase().starts_with(DESCENDING) {
        return DESCENDING;
    }
    ASCENDING
}
