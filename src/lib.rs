//! # AttrHaus
//!
//! A Rust adapter between PostgreSQL JSONB columns and in-process attribute
//! mappings, with a defensive decode path and an explicit entity
//! construction contract.
//!
//! Entities often carry many optional fields that do not warrant individual
//! columns. AttrHaus stores them in a single semi-structured column: a
//! [`FieldMapping`](field_mapping::FieldMapping) serializes to the column's
//! native JSON wire form on write, and whatever shape the driver hands back
//! on read (wrapper, raw text, pre-parsed value, or something unexpected)
//! decodes to a mapping without ever failing the row.
//!
//! ## Quick Start
//!
//! ```rust
//! use attrhaus::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = ColumnCodec::default();
//!
//! // Write path: mapping -> jsonb parameter
//! let mut attributes = FieldMapping::new();
//! attributes.insert("plan", json!("pro"));
//! attributes.insert("trial", json!(true));
//! let parameter = codec.encode(&attributes)?;
//! assert_eq!(parameter.type_label().as_str(), "jsonb");
//!
//! // Read path: any driver shape -> mapping, never an error
//! let decoded = codec.decode(DecodedShape::Wrapper(parameter));
//! assert_eq!(decoded, attributes);
//!
//! let degraded = codec.decode(DecodedShape::Text("{not-json".to_string()));
//! assert!(degraded.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## The construction contract
//!
//! The materializer instantiates entities with a zero-argument constructor
//! and then injects decoded columns through setters. Any entity crossing
//! the read path must register that constructor: a builder-style
//! full-argument constructor may coexist, but on its own it fails
//! instantiation with an arity mismatch. See
//! [`EntityDescriptor`](entity_contract::EntityDescriptor).

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use errors::AttrHausError;

// Re-export internal crates for callers that want the full module paths
pub use column_codec;
pub use entity_contract;
pub use field_mapping;

// Re-export external dependencies used in public API
pub use serde_json;
pub use sqlx;
