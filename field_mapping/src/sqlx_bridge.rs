//! sqlx integration for [`FieldMapping`]
//!
//! Delegates wire encoding to `serde_json::Value`'s JSONB support so a
//! `FieldMapping` field can sit directly in a `sqlx::FromRow` struct or be
//! bound as a statement parameter. The decode side is defensive: driver
//! values that are not JSON objects degrade to the empty mapping instead of
//! failing row materialization.

use serde_json::Value;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

use crate::mapping::FieldMapping;

impl Type<Postgres> for FieldMapping {
    fn type_info() -> PgTypeInfo {
        <Value as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        // Accepts both JSON and JSONB columns, like serde_json::Value
        <Value as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for FieldMapping {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        let value = Value::Object(self.as_map().clone());
        <Value as Encode<'q, Postgres>>::encode_by_ref(&value, buf)
    }
}

impl<'r> Decode<'r, Postgres> for FieldMapping {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = match <Value as Decode<'r, Postgres>>::decode(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(error = %err, "failed to decode JSON column value; defaulting to empty mapping");
                return Ok(FieldMapping::new());
            }
        };

        match raw {
            Value::Null => Ok(FieldMapping::new()),
            Value::Object(map) => Ok(FieldMapping::from(map)),
            other => {
                tracing::warn!(raw = %other, "JSON column holds a non-object document; defaulting to empty mapping");
                Ok(FieldMapping::new())
            }
        }
    }
}
