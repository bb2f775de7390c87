use thiserror::Error;

/// A setter rejected the value it was handed during population
#[derive(Error, Debug)]
#[error("{message}")]
pub struct PopulateError {
    message: String,
}

impl PopulateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn type_mismatch(expected: &str, got: &serde_json::Value) -> Self {
        Self::new(format!("expected {expected}, got {got}"))
    }
}

#[derive(Error, Debug)]
pub enum ContractError {
    /// The entity only registered a full-argument constructor. The message
    /// stays a plain argument-count mismatch on purpose: that is exactly how
    /// the failure presents from a reflective instantiation layer, and
    /// triage has to go through the entity's constructors, not the codec.
    #[error("wrong number of arguments for {entity}: constructor expects {expected}, got {supplied}")]
    ConstructorArityMismatch {
        entity: &'static str,
        expected: usize,
        supplied: usize,
    },

    #[error("no constructor registered for {entity}")]
    NoConstructor { entity: &'static str },

    #[error("constructor for {entity} rejected its arguments: {source}")]
    Construction {
        entity: &'static str,
        #[source]
        source: PopulateError,
    },

    #[error("failed to populate {entity}.{column}: {source}")]
    Population {
        entity: &'static str,
        column: String,
        #[source]
        source: PopulateError,
    },
}
