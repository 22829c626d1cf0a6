//! Canonical field keys and event names for structured logging
//!
//! Repository boundary events carry these keys so that captured events can
//! be asserted on without string drift.

// Boundary fields
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Table an operation targets
pub const FIELD_TABLE: &str = "table";

// Result sizes: reads end with `rows`, writes with `rows_affected`
pub const FIELD_ROWS: &str = "rows";
pub const FIELD_ROWS_AFFECTED: &str = "rows_affected";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
