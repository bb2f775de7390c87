//! Encode/decode logic for semi-structured attribute columns
//!
//! The codec is a stateless function pair over immutable configuration.
//! Encoding surfaces serialization failures to the caller; decoding never
//! lets a malformed or unexpected payload escape as an error.

use std::any::Any;

use field_mapping::{DecodedShape, FieldMapping, SemiStructuredValue};
use serde_json::Value;

use crate::errors::CodecError;
use crate::options::{CodecOptions, UnknownShapePolicy};
use crate::serializer::{JsonSerializer, MappingSerializer};

/// Bidirectional adapter between a [`FieldMapping`] and the database's
/// native JSON wire representation.
///
/// Safe to share across threads: options are immutable and the serializer
/// is stateless. Treat a configured codec as process-wide configuration,
/// built once at startup.
#[derive(Debug, Clone)]
pub struct ColumnCodec<S = JsonSerializer> {
    serializer: S,
    options: CodecOptions,
}

impl ColumnCodec<JsonSerializer> {
    pub fn new(options: CodecOptions) -> Self {
        Self { serializer: JsonSerializer, options }
    }
}

impl Default for ColumnCodec<JsonSerializer> {
    fn default() -> Self {
        Self::new(CodecOptions::default())
    }
}

impl<S: MappingSerializer> ColumnCodec<S> {
    /// Build a codec with a custom serializer implementation
    pub fn with_serializer(serializer: S, options: CodecOptions) -> Self {
        Self { serializer, options }
    }

    pub fn options(&self) -> CodecOptions {
        self.options
    }

    /// Serialize a mapping into the column's native wire representation.
    ///
    /// The result carries the configured type label and the canonical JSON
    /// body, ready for an explicit-type parameter bind. Serialization
    /// failure is fatal to the write and is never swallowed.
    pub fn encode(&self, mapping: &FieldMapping) -> Result<SemiStructuredValue, CodecError> {
        let body = self
            .serializer
            .to_text(mapping)
            .map_err(|source| CodecError::WriteSerialization {
                column_type: self.options.column_type,
                source,
            })?;
        Ok(SemiStructuredValue::new(self.options.column_type, Some(body)))
    }

    /// Reduce an inbound column value of unknown runtime shape to a mapping.
    ///
    /// Pure and total: every branch resolves to a mapping, with parse and
    /// conversion failures recovered locally to the canonical empty mapping.
    /// Callers sit in the row-materialization path, so one bad JSON field
    /// must never fail the surrounding row.
    pub fn decode(&self, shape: DecodedShape) -> FieldMapping {
        match shape {
            DecodedShape::Absent => FieldMapping::new(),
            DecodedShape::Wrapper(wrapper) => match wrapper.body() {
                None => FieldMapping::new(),
                Some(body) => self.parse_text(body),
            },
            DecodedShape::Text(text) => self.parse_text(&text),
            DecodedShape::Structured(value) => self.convert_structured(value),
            DecodedShape::Other { type_name, value } => self.convert_other(type_name, value),
        }
    }

    /// Classify and decode a concretely-typed driver value in one step
    pub fn decode_any<T: Any + Send>(&self, value: T) -> FieldMapping {
        self.decode(DecodedShape::of(value))
    }

    fn parse_text(&self, text: &str) -> FieldMapping {
        // Blank text is an absence marker from some drivers, not an error
        if text.trim().is_empty() {
            return FieldMapping::new();
        }
        match self.serializer.from_text(text) {
            Ok(value) => self.convert_structured(value),
            Err(err) => {
                tracing::error!(
                    raw = %text,
                    error = %err,
                    "malformed JSON column body; defaulting to empty mapping"
                );
                FieldMapping::new()
            }
        }
    }

    fn convert_structured(&self, value: Value) -> FieldMapping {
        match value {
            Value::Null => FieldMapping::new(),
            Value::Object(map) => FieldMapping::from(map),
            other => {
                tracing::warn!(
                    raw = %other,
                    "JSON column holds a non-object document; defaulting to empty mapping"
                );
                FieldMapping::new()
            }
        }
    }

    fn convert_other(&self, type_name: &'static str, value: Box<dyn Any + Send>) -> FieldMapping {
        if self.options.unknown_shape == UnknownShapePolicy::Empty {
            tracing::warn!(
                value_type = type_name,
                "unexpected runtime shape for JSON column; defaulting to empty mapping"
            );
            return FieldMapping::new();
        }

        // Best effort: the value may be a known shape that arrived
        // type-erased. Reclassify once; classification of a true unknown
        // lands back on the fallback arm.
        match DecodedShape::classify(value) {
            DecodedShape::Other { .. } => {
                tracing::warn!(
                    value_type = type_name,
                    "unexpected runtime shape for JSON column; defaulting to empty mapping"
                );
                FieldMapping::new()
            }
            known => {
                tracing::warn!(
                    value_type = type_name,
                    shape = known.type_description(),
                    "unexpected runtime shape for JSON column; converted structurally"
                );
                self.decode(known)
            }
        }
    }
}
