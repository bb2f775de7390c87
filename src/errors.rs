//! Error types for the AttrHaus crate
//!
//! This module aggregates the errors surfaced by the member crates. Only
//! the write path and the construction contract produce errors; read-path
//! decode failures are recovered internally and never reach this type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttrHausError {
    #[error("column codec error: {0}")]
    Codec(#[from] column_codec::CodecError),

    #[error("entity contract error: {0}")]
    Contract(#[from] entity_contract::ContractError),
}
