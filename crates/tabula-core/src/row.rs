//! Result rows and destination binding
//!
//! A handle returns each result row as a `Row` of named `Value`s. Callers
//! bind rows into their own types through `FromRow`, usually by pulling
//! typed columns with `Row::get`.

use crate::errors::{RepoError, Result};
use tabula_core_types::Value;

/// One result row, columns in select order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((column.into(), value.into()));
    }

    /// Builder form of `push`
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    /// Raw value of a named column
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// Typed value of a named column
    pub fn get<T: FromValue>(&self, column: &str) -> Result<T> {
        let value = self.value(column).ok_or_else(|| RepoError::MissingColumn {
            column: column.to_string(),
        })?;
        convert(column, value)
    }

    /// Typed value of a column by position
    pub fn get_at<T: FromValue>(&self, index: usize) -> Result<T> {
        let (column, value) = self
            .columns
            .get(index)
            .ok_or_else(|| RepoError::MissingColumn {
                column: format!("#{}", index),
            })?;
        convert(column, value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn convert<T: FromValue>(column: &str, value: &Value) -> Result<T> {
    T::from_value(value).ok_or_else(|| {
        RepoError::ColumnType {
            column: column.to_string(),
            expected: T::EXPECTED,
            found: value
                .kind()
                .map(|k| k.to_string())
                .unwrap_or_else(|| "null".to_string()),
        }
        .into()
    })
}

/// Conversion from a single column value
pub trait FromValue: Sized {
    /// Type name used in decode errors
    const EXPECTED: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    const EXPECTED: &'static str = "any";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "text";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for i64 {
    const EXPECTED: &'static str = "int";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromValue for i32 {
    const EXPECTED: &'static str = "int";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|n| i32::try_from(n).ok())
    }
}

impl FromValue for u64 {
    const EXPECTED: &'static str = "unsigned int";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|n| u64::try_from(n).ok())
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "float";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// Destination binding for a whole row
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> Result<Self>;
}

impl FromRow for Row {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(row.clone())
    }
}

/// Scalar results such as `COUNT(...)` bind from the first column
impl FromRow for i64 {
    fn from_row(row: &Row) -> Result<Self> {
        row.get_at(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TbErrorKind;

    fn sample() -> Row {
        Row::new()
            .with("id", 7)
            .with("name", "ada")
            .with("active", 1)
            .with("nickname", Value::Null)
    }

    #[test]
    fn test_typed_get() {
        let row = sample();
        assert_eq!(row.get::<i64>("id").unwrap(), 7);
        assert_eq!(row.get::<String>("name").unwrap(), "ada");
        assert!(row.get::<bool>("active").unwrap());
        assert_eq!(row.get::<Option<String>>("nickname").unwrap(), None);
    }

    #[test]
    fn test_missing_column_is_decode_error() {
        let err = sample().get::<i64>("age").unwrap_err();
        assert_eq!(err.kind(), TbErrorKind::Decode);
        assert_eq!(err.column(), Some("age"));
    }

    #[test]
    fn test_type_mismatch_names_found_kind() {
        let err = sample().get::<i64>("name").unwrap_err();
        assert_eq!(err.kind(), TbErrorKind::Decode);
        assert!(err.message().contains("text"), "{}", err.message());
    }

    #[test]
    fn test_i64_binds_first_column() {
        let row = Row::new().with("COUNT(DISTINCT id)", 3);
        assert_eq!(i64::from_row(&row).unwrap(), 3);
        assert!(i64::from_row(&Row::new()).is_err());
    }
}
