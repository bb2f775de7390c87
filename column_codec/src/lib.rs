//! Column Codec - Bidirectional adapter between attribute mappings and JSONB columns
//!
//! This crate provides the write-path encoder and the defensive read-path
//! decoder for semi-structured attribute columns, plus the serializer seam
//! and codec configuration.

pub mod codec;
pub mod errors;
pub mod options;
pub mod serializer;

pub use codec::ColumnCodec;
pub use errors::CodecError;
pub use options::{CodecOptions, UnknownShapePolicy};
pub use serializer::{JsonSerializer, MappingSerializer};

// Re-export the data model this codec operates on
pub use field_mapping::{ColumnType, DecodedShape, FieldMapping, SemiStructuredValue};
