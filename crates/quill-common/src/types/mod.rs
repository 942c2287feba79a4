//! Type definitions for quill.
//!
//! This module contains the loosely-typed data model shared across the
//! quill crates: the dynamic [`Value`] union and the string-keyed
//! [`Record`] produced when a result cursor is materialized.

mod record;
mod value;

pub use record::Record;
pub use value::Value;
