//! Name-keyed registry of column types.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::identifier::IdentifierFactory;

use super::column_type::{ColumnType, IdColumnType};

/// Column types keyed by their registered name.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, Arc<dyn ColumnType>>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `column_type` under its own name.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateType` if the name is already taken.
    pub fn add_type(&mut self, column_type: impl ColumnType) -> Result<()> {
        let name = column_type.name().to_string();
        if self.types.contains_key(&name) {
            return Err(Error::DuplicateType(name));
        }
        log::debug!("registered column type \"{name}\"");
        self.types.insert(name, Arc::new(column_type));
        Ok(())
    }

    /// Whether a type is registered under `name`.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// The column type registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownType` if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<dyn ColumnType>> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownType(name.to_string()))
    }

    /// The identifier column type registered under `name`, typed as `T`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownType` if nothing is registered under `name`, or
    /// `Error::TypeMismatch` if the registered type does not produce `T`.
    pub fn get_id_type<T: IdentifierFactory>(&self, name: &str) -> Result<&IdColumnType<T>> {
        let column_type = self
            .types
            .get(name)
            .ok_or_else(|| Error::UnknownType(name.to_string()))?;
        column_type
            .as_any()
            .downcast_ref::<IdColumnType<T>>()
            .ok_or_else(|| Error::TypeMismatch {
                name: name.to_string(),
                expected: T::TYPE_NAME,
            })
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}
