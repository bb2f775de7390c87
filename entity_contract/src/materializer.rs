//! Row materialization
//!
//! Runs the read-path state machine for one row: instantiate the entity via
//! its zero-argument constructor, populate each column through the
//! registered setters (JSON-typed columns go through the codec first), then
//! yield the populated instance.

use column_codec::ColumnCodec;

use crate::descriptor::EntityDescriptor;
use crate::errors::ContractError;
use crate::row::{ColumnRow, ColumnValue};

/// Materializes entities from driver rows
#[derive(Debug, Clone, Default)]
pub struct Materializer {
    codec: ColumnCodec,
}

impl Materializer {
    pub fn new(codec: ColumnCodec) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &ColumnCodec {
        &self.codec
    }

    /// Materialize one entity from a row.
    ///
    /// Instantiation requires the descriptor's zero-argument constructor;
    /// see [`EntityDescriptor::instantiate`] for the failure mode when only
    /// a full-argument constructor is registered. JSON columns never fail
    /// population: the codec resolves every inbound shape to a mapping.
    /// Plain-column setters may reject a value, which aborts the row with a
    /// population error naming the column.
    pub fn materialize<T>(
        &self,
        descriptor: &EntityDescriptor<T>,
        row: ColumnRow,
    ) -> Result<T, ContractError> {
        let mut entity = descriptor.instantiate()?;

        for (column, value) in row {
            match value {
                ColumnValue::Json(shape) => {
                    let mapping = self.codec.decode(shape);
                    match descriptor.json_setter(&column) {
                        Some(set) => set(&mut entity, mapping),
                        None => {
                            tracing::debug!(
                                entity = descriptor.entity(),
                                column = %column,
                                "no JSON setter registered; skipping column"
                            );
                        }
                    }
                }
                ColumnValue::Plain(value) => match descriptor.setter(&column) {
                    Some(set) => {
                        set(&mut entity, value).map_err(|source| ContractError::Population {
                            entity: descriptor.entity(),
                            column: column.clone(),
                            source,
                        })?;
                    }
                    None => {
                        tracing::debug!(
                            entity = descriptor.entity(),
                            column = %column,
                            "no setter registered; skipping column"
                        );
                    }
                },
            }
        }

        Ok(entity)
    }
}
