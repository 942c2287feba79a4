//! Materialized result rows.
//!
//! This module defines the `Record` type: one result row as a mapping
//! from column name to dynamic value. Records are produced fresh per
//! row when a cursor is scanned; key order within a record carries no
//! meaning, while the order of records follows cursor emission order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Value;

/// A single result row keyed by column name.
///
/// Column names are unique within a record. Serializes as a plain JSON
/// object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for the given column, if present.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Returns true if the record has a value for the given column.
    pub fn contains_column(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Inserts a value, returning the previous value for that column.
    pub fn insert(&mut self, column: String, value: Value) -> Option<Value> {
        self.values.insert(column, value)
    }

    /// Returns the number of columns in this record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record holds no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the (column, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Consumes the record, returning the underlying map.
    pub fn into_map(self) -> BTreeMap<String, Value> {
        self.values
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
