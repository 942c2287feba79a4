//! Error handling for quill.
//!
//! This module provides the unified error type and result alias used
//! across all quill components. Both error classes are fatal for the
//! call that raised them: nothing in this layer catches, retries, or
//! resumes after an error, and no partial result is observable once a
//! call has failed.

use thiserror::Error;

/// Boxed driver error produced by cursor implementations.
///
/// Cursor adapters propagate their native error types through this
/// alias, so no information is lost between the driver and the caller's
/// error boundary.
pub type CursorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for quill operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Errors produced by the table-model layer.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A field reference named a column that is not registered on the
    /// table it was resolved against.
    ///
    /// This is a programmer error: the fix is to declare the column on
    /// the model, not to handle the error at runtime.
    #[error(r#"column "{column}" does not exist on table "{table}""#)]
    UnknownColumn {
        /// The column name that failed to resolve.
        column: String,
        /// The table the lookup ran against.
        table: String,
    },

    /// The cursor failed while listing columns or scanning a row.
    #[error("cursor failure: {0}")]
    Cursor(#[source] CursorError),
}

impl ModelError {
    /// Creates an [`ModelError::UnknownColumn`] error.
    pub fn unknown_column(column: impl Into<String>, table: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
            table: table.into(),
        }
    }

    /// Wraps a driver error in [`ModelError::Cursor`].
    pub fn cursor(err: impl Into<CursorError>) -> Self {
        Self::Cursor(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_column_message() {
        let err = ModelError::unknown_column("nope", "users");
        assert_eq!(
            err.to_string(),
            r#"column "nope" does not exist on table "users""#
        );
    }

    #[test]
    fn test_cursor_error_preserves_source() {
        let err = ModelError::cursor("connection reset");
        assert_eq!(err.to_string(), "cursor failure: connection reset");
        assert!(std::error::Error::source(&err).is_some());
    }
}
