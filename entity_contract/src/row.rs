//! Row representation handed to the materializer
//!
//! A `ColumnRow` is the driver-agnostic view of one fetched row: column
//! names paired with either a plain decoded value or the raw shape of a
//! JSON-typed column, which the materializer routes through the codec.

use field_mapping::DecodedShape;
use serde_json::Value;

/// One column's value as read from the driver
#[derive(Debug)]
pub enum ColumnValue {
    /// A scalar or otherwise fully-decoded value
    Plain(Value),
    /// A JSON-typed column, still in its driver shape
    Json(DecodedShape),
}

/// An ordered set of named column values for a single row
#[derive(Debug, Default)]
pub struct ColumnRow {
    columns: Vec<(String, ColumnValue)>,
}

impl ColumnRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain column value
    pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
        self.columns.push((column.into(), ColumnValue::Plain(value)));
        self
    }

    /// Add a JSON-typed column in its raw driver shape
    pub fn with_json(mut self, column: impl Into<String>, shape: DecodedShape) -> Self {
        self.columns.push((column.into(), ColumnValue::Json(shape)));
        self
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl IntoIterator for ColumnRow {
    type Item = (String, ColumnValue);
    type IntoIter = std::vec::IntoIter<(String, ColumnValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}
