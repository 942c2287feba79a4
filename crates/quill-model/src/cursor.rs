//! The driver-side cursor abstraction.
//!
//! Query execution lives outside this crate. Whatever driver runs the
//! statements exposes its result handle through [`Cursor`], and
//! [`scan()`](crate::scan()) turns that handle into materialized records.

use quill_common::{CursorError, Value};

/// A handle over one query's result rows.
///
/// Cursors are single-reader resources owned by the caller: this layer
/// reads from them and never closes them. Both operations may fail with
/// the driver's native error.
pub trait Cursor {
    /// Returns the column names of the current result set.
    fn columns(&self) -> Result<Vec<String>, CursorError>;

    /// Advances to the next row and scans its values into `dest`.
    ///
    /// `dest` holds one slot per column, in `columns()` order. Returns
    /// `Ok(false)` once the result set is exhausted, in which case
    /// `dest` is left untouched.
    fn scan_row(&mut self, dest: &mut [Value]) -> Result<bool, CursorError>;
}
