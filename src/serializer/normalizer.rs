//! Runtime-dispatched (de)normalizer for identifier types.

use std::any::{Any, TypeId};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::id::GenericId;
use crate::identifier::{Identifier, IdentifierFactory};

type Construct = fn(&str) -> Result<Box<dyn Identifier>>;

fn construct<T: IdentifierFactory>(raw: &str) -> Result<Box<dyn Identifier>> {
    Ok(Box::new(T::from_string(raw)?))
}

#[derive(Clone)]
struct SupportedType {
    name: &'static str,
    type_id: TypeId,
    construct: Construct,
}

/// Converts identifiers to and from strings for pipelines that pick the
/// target type by name.
///
/// Support decisions depend only on the value's type, never its contents,
/// so they are safe to cache per type.
#[derive(Clone)]
pub struct IdNormalizer {
    types: Vec<SupportedType>,
}

impl IdNormalizer {
    /// Creates a normalizer that supports no types yet.
    #[must_use]
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Registers `T` under its `TYPE_NAME`. Registering twice is a no-op.
    #[must_use]
    pub fn with_type<T: IdentifierFactory>(mut self) -> Self {
        if !self.types.iter().any(|t| t.type_id == TypeId::of::<T>()) {
            log::debug!("normalizer: supporting \"{}\"", T::TYPE_NAME);
            self.types.push(SupportedType {
                name: T::TYPE_NAME,
                type_id: TypeId::of::<T>(),
                construct: construct::<T>,
            });
        }
        self
    }

    /// True iff `value` is an identifier of a registered type.
    ///
    /// Boxed identifiers, such as the output of [`IdNormalizer::denormalize`],
    /// are judged by the identifier they hold. Identifier types that were
    /// never registered are unsupported.
    #[must_use]
    pub fn supports_normalization(&self, value: &dyn Any) -> bool {
        let type_id = match value.downcast_ref::<Box<dyn Identifier>>() {
            Some(boxed) => boxed.as_any().type_id(),
            None => value.type_id(),
        };
        self.is_registered(type_id)
    }

    /// Returns the identifier's string payload.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotNormalizable` when the identifier's type is not
    /// registered, matching [`IdNormalizer::supports_normalization`].
    pub fn normalize(&self, id: &dyn Identifier) -> Result<String> {
        if !self.is_registered(id.as_any().type_id()) {
            return Err(Error::NotNormalizable {
                type_name: id.kind_name().to_string(),
            });
        }
        Ok(id.to_primitive())
    }

    /// True iff `type_name` names a registered identifier type.
    #[must_use]
    pub fn supports_denormalization(&self, _data: &Value, type_name: &str) -> bool {
        self.find(type_name).is_some()
    }

    /// Builds an identifier of the type registered as `type_name` from `data`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownType` for an unregistered name and
    /// `Error::NotNormalizable` when `data` is not a valid string for it.
    pub fn denormalize(&self, data: &Value, type_name: &str) -> Result<Box<dyn Identifier>> {
        let supported = self
            .find(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.into()))?;
        let not_normalizable = || Error::NotNormalizable {
            type_name: supported.name.to_string(),
        };
        let raw = data.as_str().ok_or_else(not_normalizable)?;
        (supported.construct)(raw).map_err(|_| not_normalizable())
    }

    /// Builds a `T` from `data`, statically typed.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotNormalizable` when `data` is not a valid string for `T`.
    pub fn denormalize_as<T: IdentifierFactory>(&self, data: &Value) -> Result<T> {
        let not_normalizable = || Error::NotNormalizable {
            type_name: T::TYPE_NAME.to_string(),
        };
        let raw = data.as_str().ok_or_else(not_normalizable)?;
        T::from_string(raw).map_err(|_| not_normalizable())
    }

    /// Registered type names, each flagged as supported.
    #[must_use]
    pub fn supported_types(&self) -> Vec<(&'static str, bool)> {
        self.types.iter().map(|t| (t.name, true)).collect()
    }

    /// Support decisions are deterministic per type and may be cached.
    #[must_use]
    pub fn has_cacheable_supports_method(&self) -> bool {
        true
    }

    fn is_registered(&self, type_id: TypeId) -> bool {
        self.types.iter().any(|t| t.type_id == type_id)
    }

    fn find(&self, type_name: &str) -> Option<&SupportedType> {
        self.types.iter().find(|t| t.name == type_name)
    }
}

impl Default for IdNormalizer {
    /// A normalizer that supports [`GenericId`].
    fn default() -> Self {
        Self::new().with_type::<GenericId>()
    }
}
