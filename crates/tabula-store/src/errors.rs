//! Error handling for tabula-store
//!
//! Wraps driver and configuration failures into tabula-core's TbError

use tabula_core::errors::{TbError, TbErrorKind};

/// Result type alias using TbError
pub type Result<T> = std::result::Result<T, TbError>;

/// Create a database error from rusqlite::Error
///
/// A query that returned no row becomes `NotFound`; everything else is a
/// `Persistence` error carrying the driver message.
pub fn from_rusqlite(err: rusqlite::Error) -> TbError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => TbError::no_rows().with_op("sqlite"),
        other => TbError::new(TbErrorKind::Persistence)
            .with_op("sqlite")
            .with_message(other.to_string()),
    }
}

/// Create a configuration error
pub fn from_config(err: ::config::ConfigError) -> TbError {
    TbError::new(TbErrorKind::Config)
        .with_op("load_config")
        .with_message(err.to_string())
}
