//! Cursor scanning and column-name deduplication.
//!
//! [`scan`] consumes a result cursor and materializes every row as a
//! [`Record`]. Before any row is read, the cursor's column names are
//! made unique so that no value silently overwrites another inside a
//! record.

use quill_common::{ModelError, ModelResult, Record, Value};

use crate::cursor::Cursor;

/// Materializes every row of `cursor` into a record.
///
/// Column names are read once and deduplicated, then rows are scanned
/// to completion: each row gets one `Null`-initialized slot per column
/// for the cursor to fill, and becomes one record keyed by the
/// deduplicated names. Records come back in cursor emission order; an
/// empty result set yields an empty vec.
///
/// # Errors
///
/// [`ModelError::Cursor`] if listing columns or scanning any row fails.
/// The whole call aborts; no partial record list is ever returned.
pub fn scan<C: Cursor + ?Sized>(cursor: &mut C) -> ModelResult<Vec<Record>> {
    let mut columns = cursor.columns().map_err(ModelError::cursor)?;
    make_unique(&mut columns);

    let mut records = Vec::new();
    loop {
        let mut slots = vec![Value::Null; columns.len()];
        if !cursor.scan_row(&mut slots).map_err(ModelError::cursor)? {
            break;
        }
        records.push(columns.iter().cloned().zip(slots).collect::<Record>());
    }

    tracing::debug!(rows = records.len(), "materialized result set");
    Ok(records)
}

/// Rewrites `columns` in place so names are unique in the common case.
///
/// Empty names become `Column<i>`. For repeated names, the occurrence
/// at position `k > 0` of the match list becomes `<name>_<k>`. Each
/// iteration re-scans the current, partially-rewritten list, so a name
/// rewritten at an earlier index can still collide with one produced at
/// a later index (e.g. `["a","a","","a"]` yields `"a_1"` twice). That
/// legacy behavior is relied on downstream and must not change, so the
/// output is not formally guaranteed unique.
fn make_unique(columns: &mut [String]) {
    for i in 0..columns.len() {
        let original = columns[i].clone();
        if original.is_empty() {
            columns[i] = format!("Column{}", i);
        }

        let occurrences = indices_of(&original, columns);
        if occurrences.len() > 1 {
            for (k, &index) in occurrences.iter().enumerate() {
                if index == i && k != 0 {
                    columns[i] = format!("{}_{}", original, k);
                }
            }
        }
    }
}

/// Returns the indices of every column whose name equals `name`.
fn indices_of(name: &str, columns: &[String]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .filter(|(_, column)| *column == name)
        .map(|(index, _)| index)
        .collect()
}
