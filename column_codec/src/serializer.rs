//! Serializer seam between the codec and the JSON text layer
//!
//! The codec treats the serializer as an injected, stateless dependency:
//! swapping implementations must not change the codec's external contract.

use field_mapping::FieldMapping;
use serde_json::Value;

/// JSON text ↔ structured-value converter used by the codec.
///
/// Implementations must be stateless with respect to individual calls so a
/// single instance can serve concurrent reads and writes.
pub trait MappingSerializer: Send + Sync {
    /// Render a mapping to its canonical JSON text
    fn to_text(&self, mapping: &FieldMapping) -> Result<String, serde_json::Error>;

    /// Parse JSON text into a structured value
    fn from_text(&self, text: &str) -> Result<Value, serde_json::Error>;
}

/// Default serializer backed by `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl MappingSerializer for JsonSerializer {
    fn to_text(&self, mapping: &FieldMapping) -> Result<String, serde_json::Error> {
        serde_json::to_string(mapping)
    }

    fn from_text(&self, text: &str) -> Result<Value, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_text_renders_object() {
        let mut mapping = FieldMapping::new();
        mapping.insert("plan", json!("pro"));

        let text = JsonSerializer.to_text(&mapping).unwrap();
        assert_eq!(text, r#"{"plan":"pro"}"#);
    }

    #[test]
    fn test_from_text_rejects_malformed_input() {
        assert!(JsonSerializer.from_text("{not-json").is_err());
        assert_eq!(JsonSerializer.from_text("null").unwrap(), Value::Null);
    }
}
