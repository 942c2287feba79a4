//! # quill-model
//!
//! A generic relational-table abstraction layer.
//!
//! Given a table name and its column declarations, a [`Model`] exposes:
//!
//! - Polymorphic field resolution: declared column names, opaque
//!   computed expressions, and already-resolved fields all go through
//!   [`Model::resolve`]
//! - Query construction, delegated to [sea-query] builders bound to the
//!   table (select/insert/update/delete)
//! - Row materialization: [`scan()`] turns any [`Cursor`] into
//!   column-addressable [`Record`]s with deduplicated keys
//!
//! Models never execute queries and never own a connection; running the
//! statements and producing cursors is the surrounding driver layer's
//! job.
//!
//! [sea-query]: https://docs.rs/sea-query
//!
//! ## Example
//!
//! ```rust
//! use quill_model::{Model, ModelOption};
//! use sea_query::PostgresQueryBuilder;
//!
//! let users = Model::new("users", [ModelOption::columns(["id", "name"])]);
//!
//! let sql = users
//!     .select(["id", "name"])
//!     .unwrap()
//!     .to_string(PostgresQueryBuilder);
//! assert_eq!(sql, r#"SELECT "users"."id", "users"."name" FROM "users""#);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod field;
pub mod model;
pub mod scan;

pub use cursor::Cursor;
pub use field::{Field, FieldArg, SelectArg, TableField};
pub use model::{Model, ModelOption};
pub use scan::scan;

// Re-export the shared foundation so callers need only one import.
pub use quill_common::{CursorError, ModelError, ModelResult, Record, Value};
