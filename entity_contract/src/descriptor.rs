//! Entity descriptors
//!
//! A descriptor registers how the materializer may construct an entity and
//! how each column value is injected into it. Registration is where the
//! construction contract becomes checkable: `instantiate` only ever uses the
//! zero-argument constructor, so a descriptor carrying nothing but a
//! full-argument constructor fails up front with an arity mismatch instead
//! of deep inside a row fetch.

use std::collections::HashMap;

use field_mapping::FieldMapping;
use serde_json::Value;

use crate::errors::{ContractError, PopulateError};

type Setter<T> = Box<dyn Fn(&mut T, Value) -> Result<(), PopulateError> + Send + Sync>;
type JsonSetter<T> = Box<dyn Fn(&mut T, FieldMapping) + Send + Sync>;
type FullArgBuild<T> = Box<dyn Fn(Vec<Value>) -> Result<T, PopulateError> + Send + Sync>;

struct FullArgConstructor<T> {
    arity: usize,
    build: FullArgBuild<T>,
}

/// Construction and population recipe for one entity type
pub struct EntityDescriptor<T> {
    entity: &'static str,
    zero_arg: Option<Box<dyn Fn() -> T + Send + Sync>>,
    full_arg: Option<FullArgConstructor<T>>,
    setters: HashMap<String, Setter<T>>,
    json_setters: HashMap<String, JsonSetter<T>>,
}

impl<T> EntityDescriptor<T> {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            zero_arg: None,
            full_arg: None,
            setters: HashMap::new(),
            json_setters: HashMap::new(),
        }
    }

    /// Descriptor for a type whose zero-argument construction is `Default`
    pub fn of_default(entity: &'static str) -> Self
    where
        T: Default + 'static,
    {
        Self::new(entity).with_zero_arg(T::default)
    }

    /// Register the zero-argument constructor the read path requires
    pub fn with_zero_arg(mut self, ctor: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.zero_arg = Some(Box::new(ctor));
        self
    }

    /// Register a full-argument constructor (builder-style instantiation).
    ///
    /// This path is never used by the materializer; it exists so a
    /// descriptor can mirror an entity type that also offers convenience
    /// construction, and so the arity is known when instantiation fails.
    pub fn with_full_arg(
        mut self,
        arity: usize,
        build: impl Fn(Vec<Value>) -> Result<T, PopulateError> + Send + Sync + 'static,
    ) -> Self {
        self.full_arg = Some(FullArgConstructor { arity, build: Box::new(build) });
        self
    }

    /// Register a setter for a plain column
    pub fn with_setter(
        mut self,
        column: impl Into<String>,
        set: impl Fn(&mut T, Value) -> Result<(), PopulateError> + Send + Sync + 'static,
    ) -> Self {
        self.setters.insert(column.into(), Box::new(set));
        self
    }

    /// Register a setter for a JSON-typed column; the materializer decodes
    /// the driver value into a [`FieldMapping`] before injection
    pub fn with_json_setter(
        mut self,
        column: impl Into<String>,
        set: impl Fn(&mut T, FieldMapping) + Send + Sync + 'static,
    ) -> Self {
        self.json_setters.insert(column.into(), Box::new(set));
        self
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Whether this descriptor satisfies the construction contract
    pub fn has_zero_arg(&self) -> bool {
        self.zero_arg.is_some()
    }

    /// Phase one of materialization: zero-argument instantiation.
    ///
    /// The materializer does not know about or select among alternate
    /// constructors, so a full-arg-only descriptor fails here with the
    /// arity of the constructor it could not use.
    pub fn instantiate(&self) -> Result<T, ContractError> {
        match &self.zero_arg {
            Some(ctor) => Ok(ctor()),
            None => match &self.full_arg {
                Some(full) => Err(ContractError::ConstructorArityMismatch {
                    entity: self.entity,
                    expected: full.arity,
                    supplied: 0,
                }),
                None => Err(ContractError::NoConstructor { entity: self.entity }),
            },
        }
    }

    /// Builder-style construction with explicit arguments.
    ///
    /// Never used by the read path; offered for fixtures and convenience
    /// construction so the full-argument constructor can coexist with the
    /// zero-argument one.
    pub fn construct_with(&self, args: Vec<Value>) -> Result<T, ContractError> {
        match &self.full_arg {
            Some(full) if full.arity == args.len() => {
                (full.build)(args).map_err(|source| ContractError::Construction {
                    entity: self.entity,
                    source,
                })
            }
            Some(full) => Err(ContractError::ConstructorArityMismatch {
                entity: self.entity,
                expected: full.arity,
                supplied: args.len(),
            }),
            None => Err(ContractError::NoConstructor { entity: self.entity }),
        }
    }

    pub(crate) fn setter(&self, column: &str) -> Option<&Setter<T>> {
        self.setters.get(column)
    }

    pub(crate) fn json_setter(&self, column: &str) -> Option<&JsonSetter<T>> {
        self.json_setters.get(column)
    }
}

impl<T> std::fmt::Debug for EntityDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("entity", &self.entity)
            .field("has_zero_arg", &self.has_zero_arg())
            .field("full_arg_arity", &self.full_arg.as_ref().map(|c| c.arity))
            .field("setters", &self.setters.keys().collect::<Vec<_>>())
            .field("json_setters", &self.json_setters.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Plan {
        name: String,
    }

    #[test]
    fn test_instantiate_uses_zero_arg_constructor() {
        let descriptor = EntityDescriptor::<Plan>::of_default("Plan");
        assert!(descriptor.has_zero_arg());
        assert_eq!(descriptor.instantiate().unwrap(), Plan::default());
    }

    #[test]
    fn test_full_arg_only_descriptor_fails_with_arity_mismatch() {
        let descriptor = EntityDescriptor::<Plan>::new("Plan").with_full_arg(1, |mut args| {
            let name = args
                .pop()
                .and_then(|v| v.as_str().map(str::to_string))
                .ok_or_else(|| PopulateError::new("expected string name"))?;
            Ok(Plan { name })
        });

        assert!(!descriptor.has_zero_arg());
        match descriptor.instantiate() {
            Err(ContractError::ConstructorArityMismatch { entity, expected, supplied }) => {
                assert_eq!(entity, "Plan");
                assert_eq!(expected, 1);
                assert_eq!(supplied, 0);
            }
            other => panic!("expected arity mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_construct_with_uses_full_arg_constructor() {
        let descriptor = EntityDescriptor::<Plan>::of_default("Plan").with_full_arg(1, |mut args| {
            let name = args
                .pop()
                .and_then(|v| v.as_str().map(str::to_string))
                .ok_or_else(|| PopulateError::new("expected string name"))?;
            Ok(Plan { name })
        });

        let plan = descriptor
            .construct_with(vec![serde_json::json!("pro")])
            .unwrap();
        assert_eq!(plan.name, "pro");

        // Wrong argument count reports the same arity-mismatch class
        assert!(matches!(
            descriptor.construct_with(vec![]),
            Err(ContractError::ConstructorArityMismatch { expected: 1, supplied: 0, .. })
        ));
    }

    #[test]
    fn test_empty_descriptor_reports_no_constructor() {
        let descriptor = EntityDescriptor::<Plan>::new("Plan");
        assert!(matches!(
            descriptor.instantiate(),
            Err(ContractError::NoConstructor { entity: "Plan" })
        ));
    }
}
