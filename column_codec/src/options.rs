//! Codec configuration
//!
//! Options are immutable after construction; a configured codec is safe to
//! share across threads as process-wide state.

use field_mapping::ColumnType;

/// Policy for the decode fallback arm when a value of unrecognized runtime
/// shape arrives from the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownShapePolicy {
    /// Attempt a structural conversion before giving up. Matches driver
    /// behavior where a known shape arrives type-erased.
    #[default]
    BestEffort,
    /// Resolve straight to the empty mapping. For callers that prefer no
    /// data over a possibly-coerced conversion.
    Empty,
}

/// Configuration for a [`ColumnCodec`](crate::ColumnCodec)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Native column type used as the bind-parameter type label
    pub column_type: ColumnType,
    /// How to treat inbound values of unrecognized runtime shape
    pub unknown_shape: UnknownShapePolicy,
}

impl CodecOptions {
    pub fn new(column_type: ColumnType, unknown_shape: UnknownShapePolicy) -> Self {
        Self { column_type, unknown_shape }
    }

    pub fn jsonb() -> Self {
        Self::new(ColumnType::Jsonb, UnknownShapePolicy::default())
    }

    pub fn json() -> Self {
        Self::new(ColumnType::Json, UnknownShapePolicy::default())
    }

    pub fn with_unknown_shape(mut self, policy: UnknownShapePolicy) -> Self {
        self.unknown_shape = policy;
        self
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::jsonb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_jsonb_best_effort() {
        let options = CodecOptions::default();
        assert_eq!(options.column_type, ColumnType::Jsonb);
        assert_eq!(options.unknown_shape, UnknownShapePolicy::BestEffort);
    }

    #[test]
    fn test_builder_overrides_policy() {
        let options = CodecOptions::json().with_unknown_shape(UnknownShapePolicy::Empty);
        assert_eq!(options.column_type, ColumnType::Json);
        assert_eq!(options.unknown_shape, UnknownShapePolicy::Empty);
    }
}
