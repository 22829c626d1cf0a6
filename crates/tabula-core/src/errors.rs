use tabula_core_types::ValueKind;
use thiserror::Error;

/// Result type alias using TbError
pub type Result<T> = std::result::Result<T, TbError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling
/// and for external API responses (e.g. 404 for `NotFound`, 422 for
/// `Unprocessable`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TbErrorKind {
    /// Zero rows where one was expected
    NotFound,
    /// An attribute's value kind disagrees with its declared schema kind
    Unprocessable,
    InvalidInput,
    /// A result row could not be bound into the destination type
    Decode,

    // Integration/IO
    Persistence,
    Config,
    Io,

    // Internal
    Internal,
}

impl TbErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TbErrorKind::NotFound => "ERR_NOT_FOUND",
            TbErrorKind::Unprocessable => "ERR_UNPROCESSABLE",
            TbErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            TbErrorKind::Decode => "ERR_DECODE",
            TbErrorKind::Persistence => "ERR_PERSISTENCE",
            TbErrorKind::Config => "ERR_CONFIG",
            TbErrorKind::Io => "ERR_IO",
            TbErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional operation, table and column
/// context. Handle errors are wrapped once at the handle boundary and then
/// passed through the repository untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TbError {
    kind: TbErrorKind,
    op: Option<String>,
    table: Option<String>,
    column: Option<String>,
    message: String,
}

impl TbError {
    /// Create a new error with the specified kind
    pub fn new(kind: TbErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            column: None,
            message: String::new(),
        }
    }

    /// Shortcut for a `NotFound` error, the "no rows" signal of a handle
    pub fn no_rows() -> Self {
        Self::new(TbErrorKind::NotFound).with_message("no rows in result set")
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add column context
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> TbErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == TbErrorKind::NotFound
    }

    pub fn is_unprocessable(&self) -> bool {
        self.kind == TbErrorKind::Unprocessable
    }
}

impl std::fmt::Display for TbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = &self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(column) = &self.column {
            write!(f, " (column: {})", column)?;
        }
        Ok(())
    }
}

impl std::error::Error for TbError {}

// ========== End Error Facility ==========

/// Repository-level conditions, converted into `TbError` at the boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepoError {
    /// Partial update attribute does not match its declared kind
    #[error("Invalid entity: column {column} expects {expected}, got {actual}")]
    Unprocessable {
        column: String,
        expected: ValueKind,
        actual: String,
    },

    /// A destination asked for a column the row does not carry
    #[error("Missing column: {column}")]
    MissingColumn { column: String },

    /// A row value could not be converted into the destination type
    #[error("Column {column} holds {found}, expected {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        found: String,
    },
}

impl From<RepoError> for TbError {
    fn from(err: RepoError) -> Self {
        let message = err.to_string();
        match err {
            RepoError::Unprocessable { column, .. } => TbError::new(TbErrorKind::Unprocessable)
                .with_op("partial_update")
                .with_column(column)
                .with_message(message),

            RepoError::MissingColumn { column } => TbError::new(TbErrorKind::Decode)
                .with_column(column)
                .with_message(message),

            RepoError::ColumnType { column, .. } => TbError::new(TbErrorKind::Decode)
                .with_column(column)
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (TbErrorKind::NotFound, "ERR_NOT_FOUND"),
            (TbErrorKind::Unprocessable, "ERR_UNPROCESSABLE"),
            (TbErrorKind::Decode, "ERR_DECODE"),
            (TbErrorKind::Persistence, "ERR_PERSISTENCE"),
            (TbErrorKind::Config, "ERR_CONFIG"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = TbError::new(TbErrorKind::Persistence)
            .with_op("sqlite")
            .with_table("users")
            .with_message("disk I/O error");

        assert_eq!(
            err.to_string(),
            "[ERR_PERSISTENCE] in operation 'sqlite': disk I/O error (table: users)"
        );
    }

    #[test]
    fn test_no_rows_is_not_found() {
        assert!(TbError::no_rows().is_not_found());
        assert!(!TbError::no_rows().is_unprocessable());
    }
}
