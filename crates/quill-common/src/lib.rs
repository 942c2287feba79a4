//! # quill-common
//!
//! Shared types and errors for the quill table-model layer.
//!
//! This crate provides the foundational types used across all quill
//! components. It includes:
//!
//! - **Types**: The dynamic [`Value`] union and the string-keyed [`Record`]
//! - **Errors**: Unified error handling with [`ModelError`]
//!
//! ## Example
//!
//! ```rust
//! use quill_common::{Record, Value};
//!
//! let mut record = Record::new();
//! record.insert("id".to_string(), Value::from(42));
//! record.insert("name".to_string(), Value::from("ada"));
//! assert_eq!(record.get("id"), Some(&Value::BigInt(42)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{CursorError, ModelError, ModelResult};
pub use types::{Record, Value};
