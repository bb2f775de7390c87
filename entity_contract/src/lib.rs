//! Entity Contract - The construct-then-populate boundary between the ORM
//! read path and entity types
//!
//! The ORM materializes a row in two phases: instantiate the entity through
//! a zero-argument constructor, then inject each decoded column value
//! through a named setter. This crate makes that contract explicit and
//! checkable, so a type that only exposes a full-argument constructor fails
//! with a diagnosable arity error instead of an opaque reflection-style one.

pub mod descriptor;
pub mod errors;
pub mod materializer;
pub mod row;

pub use descriptor::EntityDescriptor;
pub use errors::{ContractError, PopulateError};
pub use materializer::Materializer;
pub use row::{ColumnRow, ColumnValue};
