//! Unified data model for semi-structured attribute columns
//! This crate provides the mapping and shape types used across the attrhaus ecosystem

pub mod mapping;
pub mod shape;
pub mod sqlx_bridge;

pub use mapping::FieldMapping;
pub use shape::{ColumnType, DecodedShape, SemiStructuredValue};
