//! Error types for the column codec
//!
//! Only the write path surfaces errors; the read path recovers locally
//! and never propagates.

use field_mapping::ColumnType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// The input mapping could not be rendered to JSON. Fatal to the write:
    /// persisting a truncated or null document would corrupt stored state.
    #[error("write-path serialization failed for {column_type} column: {source}")]
    WriteSerialization {
        column_type: ColumnType,
        #[source]
        source: serde_json::Error,
    },
}
