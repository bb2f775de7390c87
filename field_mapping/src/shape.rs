//! Column shape definitions
//!
//! This module models the database-side representation of a semi-structured
//! column and the set of runtime shapes a driver may hand back on read.

use std::any::Any;
use std::fmt;

use serde_json::Value;

use crate::mapping::FieldMapping;

/// Native semi-structured column types supported by PostgreSQL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Json,
    Jsonb,
}

impl ColumnType {
    /// The PostgreSQL type name used when binding with an explicit type label
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Json => "json",
            ColumnType::Jsonb => "jsonb",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database-side representation of a semi-structured column value.
///
/// `body` is `None` for SQL NULL; otherwise it holds the serialized JSON
/// document as text.
#[derive(Debug, Clone, PartialEq)]
pub struct SemiStructuredValue {
    type_label: ColumnType,
    body: Option<String>,
}

impl SemiStructuredValue {
    pub fn new(type_label: ColumnType, body: Option<String>) -> Self {
        Self { type_label, body }
    }

    /// A SQL NULL value for the given column type
    pub fn null(type_label: ColumnType) -> Self {
        Self { type_label, body: None }
    }

    pub fn type_label(&self) -> ColumnType {
        self.type_label
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn into_body(self) -> Option<String> {
        self.body
    }

    /// The value to hand to a driver's parameter-binding call.
    ///
    /// Parses the body back into a JSON value; SQL NULL binds as JSON `null`.
    /// The body invariant (valid JSON or absent) makes the parse infallible
    /// for values produced by the codec.
    pub fn body_json(&self) -> Value {
        match self.body.as_deref() {
            Some(text) => serde_json::from_str(text).unwrap_or(Value::Null),
            None => Value::Null,
        }
    }
}

/// The runtime forms the inbound read path may observe for a JSON-typed
/// column, reduced to a closed union so every decode branch is explicit.
///
/// Constructed transiently per row-column read and immediately reduced to a
/// [`FieldMapping`] by the codec. The `Other` arm is the mandatory fallback
/// for shapes no driver was known to produce.
pub enum DecodedShape {
    /// The column was SQL NULL
    Absent,
    /// A tagged wrapper carrying the column's type label and text body
    Wrapper(SemiStructuredValue),
    /// Raw JSON text with no wrapper
    Text(String),
    /// An already-parsed JSON value
    Structured(Value),
    /// Anything else; `type_name` identifies the concrete type when known
    Other {
        type_name: &'static str,
        value: Box<dyn Any + Send>,
    },
}

impl DecodedShape {
    /// Classify a concretely-typed value into its shape.
    ///
    /// Prefer this over building `Other` by hand: it recognizes the known
    /// shapes and records the runtime type name for diagnostics when the
    /// value falls through to the fallback arm.
    pub fn of<T: Any + Send>(value: T) -> Self {
        Self::classify_named(Box::new(value), std::any::type_name::<T>())
    }

    /// Classify an already-erased value. The type name is unavailable here,
    /// so `Other` diagnostics fall back to an opaque label.
    pub fn classify(value: Box<dyn Any + Send>) -> Self {
        Self::classify_named(value, "<opaque>")
    }

    fn classify_named(value: Box<dyn Any + Send>, type_name: &'static str) -> Self {
        let value = match value.downcast::<SemiStructuredValue>() {
            Ok(wrapper) => return DecodedShape::Wrapper(*wrapper),
            Err(value) => value,
        };
        let value = match value.downcast::<String>() {
            Ok(text) => return DecodedShape::Text(*text),
            Err(value) => value,
        };
        let value = match value.downcast::<&'static str>() {
            Ok(text) => return DecodedShape::Text((*text).to_string()),
            Err(value) => value,
        };
        let value = match value.downcast::<Value>() {
            Ok(json) => return DecodedShape::Structured(*json),
            Err(value) => value,
        };
        let value = match value.downcast::<FieldMapping>() {
            Ok(mapping) => return DecodedShape::Structured(mapping.into_value()),
            Err(value) => value,
        };
        DecodedShape::Other { type_name, value }
    }

    /// The shape's runtime type description, used in diagnostics
    pub fn type_description(&self) -> &'static str {
        match self {
            DecodedShape::Absent => "sql null",
            DecodedShape::Wrapper(_) => "semi-structured wrapper",
            DecodedShape::Text(_) => "raw text",
            DecodedShape::Structured(_) => "structured json",
            DecodedShape::Other { type_name, .. } => type_name,
        }
    }
}

impl fmt::Debug for DecodedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedShape::Absent => f.write_str("Absent"),
            DecodedShape::Wrapper(wrapper) => f.debug_tuple("Wrapper").field(wrapper).finish(),
            DecodedShape::Text(text) => f.debug_tuple("Text").field(text).finish(),
            DecodedShape::Structured(value) => f.debug_tuple("Structured").field(value).finish(),
            DecodedShape::Other { type_name, .. } => {
                f.debug_struct("Other").field("type_name", type_name).finish_non_exhaustive()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_column_type_labels() {
        assert_eq!(ColumnType::Json.as_str(), "json");
        assert_eq!(ColumnType::Jsonb.as_str(), "jsonb");
        assert_eq!(ColumnType::Jsonb.to_string(), "jsonb");
    }

    #[test]
    fn test_null_wrapper_has_no_body() {
        let value = SemiStructuredValue::null(ColumnType::Jsonb);
        assert_eq!(value.body(), None);
        assert_eq!(value.body_json(), Value::Null);
    }

    #[test]
    fn test_body_json_parses_body_text() {
        let value =
            SemiStructuredValue::new(ColumnType::Jsonb, Some(r#"{"k":1}"#.to_string()));
        assert_eq!(value.body_json(), json!({"k": 1}));
    }

    #[test]
    fn test_classify_recognizes_wrapper() {
        let wrapper = SemiStructuredValue::null(ColumnType::Jsonb);
        let shape = DecodedShape::of(wrapper.clone());
        match shape {
            DecodedShape::Wrapper(w) => assert_eq!(w, wrapper),
            other => panic!("expected Wrapper, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_recognizes_text_forms() {
        assert!(matches!(DecodedShape::of("{}".to_string()), DecodedShape::Text(_)));
        assert!(matches!(DecodedShape::of("{}"), DecodedShape::Text(_)));
    }

    #[test]
    fn test_classify_recognizes_structured_value() {
        let shape = DecodedShape::of(json!({"a": true}));
        assert!(matches!(shape, DecodedShape::Structured(_)));
    }

    #[test]
    fn test_classify_reduces_mapping_to_structured() {
        let mut mapping = FieldMapping::new();
        mapping.insert("k", json!("v"));
        let shape = DecodedShape::of(mapping);
        match shape {
            DecodedShape::Structured(value) => assert_eq!(value["k"], "v"),
            other => panic!("expected Structured, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_keeps_unknown_types_with_name() {
        #[derive(Debug)]
        struct Unrelated;

        let shape = DecodedShape::of(Unrelated);
        match shape {
            DecodedShape::Other { type_name, .. } => {
                assert!(type_name.contains("Unrelated"), "got {type_name}");
            }
            other => panic!("expected Other, got {other:?}"),
        }
    }
}
