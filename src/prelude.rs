//! Convenience re-exports for common AttrHaus usage
//!
//! This prelude module re-exports the most commonly used items from the
//! AttrHaus ecosystem, making it easier to import everything you need with a
//! single use statement.
//!
//! # Example
//!
//! ```rust
//! use attrhaus::prelude::*;
//!
//! // Now you have access to all the common AttrHaus types and traits
//! ```

// Core AttrHaus components
pub use crate::errors::AttrHausError;

// Data model
pub use field_mapping::{ColumnType, DecodedShape, FieldMapping, SemiStructuredValue};

// Codec
pub use column_codec::{
    CodecError, CodecOptions, ColumnCodec, JsonSerializer, MappingSerializer, UnknownShapePolicy,
};

// Entity construction contract
pub use entity_contract::{
    ColumnRow, ColumnValue, ContractError, EntityDescriptor, Materializer, PopulateError,
};

// Common external dependencies
pub use serde_json;
pub use sqlx;
