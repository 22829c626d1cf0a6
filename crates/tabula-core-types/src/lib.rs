//! Core types shared across Tabula crates
//!
//! - **Values**: `Value`, `ValueKind` and the ordered `Attrs` / `Schema` maps
//! - **Schema constants**: canonical logging field keys and event names

pub mod schema;
pub mod value;

pub use value::{Attrs, ColumnMap, Schema, Value, ValueKind};
