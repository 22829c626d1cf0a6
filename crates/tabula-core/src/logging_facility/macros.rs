//! Boundary logging macros for repository operations
//!
//! Each macro stamps `component`, `op` and `event` (see
//! `tabula_core_types::schema`) and passes any trailing `key = value`
//! fields through. `Repository` attaches `table` to every event, `rows` to
//! the end of a read and `rows_affected` to the end of a delete or update.

/// Log entry into a repository operation
///
/// # Example
///
/// ```
/// # use tabula_core::log_op_start;
/// log_op_start!("count");
/// log_op_start!("get_all", table = "users");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of a repository operation
///
/// `duration_ms` comes first; result sizes follow as extra fields.
///
/// # Example
///
/// ```
/// # use tabula_core::log_op_end;
/// log_op_end!("count", duration_ms = 3);
/// log_op_end!("get_all", duration_ms = 3, table = "users", rows = 12u64);
/// log_op_end!("delete_by_id", duration_ms = 3, table = "users", rows_affected = 1u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed repository operation
///
/// `$err` is anything convertible into `TbError` (a `TbError` or a
/// `RepoError`); its kind and stable code become `err.kind` and `err.code`.
///
/// # Example
///
/// ```
/// # use tabula_core::{log_op_error, errors::TbError};
/// log_op_error!("get_by_id", TbError::no_rows(), duration_ms = 1, table = "users");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let tb_err: $crate::errors::TbError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?tb_err.kind(),
            err.code = tb_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let tb_err: $crate::errors::TbError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?tb_err.kind(),
            err.code = tb_err.code(),
            $($field)*
        );
    }};
}
