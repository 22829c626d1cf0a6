//! Record descriptors
//!
//! A `Record` tells the repository which table an entity lives in and
//! which column identifies a row. Descriptors are fixed at construction.

/// Per-entity table metadata
pub trait Record {
    /// Table the entity is stored in
    fn table_name(&self) -> &str;

    /// Primary key column
    fn primary_key(&self) -> &str;

    /// Default sort column used by `Repository::list` when the caller
    /// gives none
    fn sort_by(&self) -> Option<&str> {
        None
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn table_name(&self) -> &str {
        (**self).table_name()
    }

    fn primary_key(&self) -> &str {
        (**self).primary_key()
    }

    fn sort_by(&self) -> Option<&str> {
        (**self).sort_by()
    }
}

/// Plain-data `Record` for callers that do not want a dedicated type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    table: String,
    primary_key: String,
    sort_by: Option<String>,
}

impl TableInfo {
    pub fn new(table: impl Into<String>, primary_key: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            primary_key: primary_key.into(),
            sort_by: None,
        }
    }

    /// Advertise a default sort column
    pub fn sorted_by(mut self, column: impl Into<String>) -> Self {
        self.sort_by = Some(column.into());
        self
    }
}

impl Record for TableInfo {
    fn table_name(&self) -> &str {
        &self.table
    }

    fn primary_key(&self) -> &str {
        &self.primary_key
    }

    fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }
}
