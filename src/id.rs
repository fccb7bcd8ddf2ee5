//! The identifier value type.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::adapters::RandomUuidSource;
use crate::error::{Error, Result};
use crate::identifier::{Identifier, IdentifierFactory};
use crate::ports::UuidSource;

/// Marker for a family of identifiers.
///
/// Kinds are never instantiated; they only make `Id<A>` and `Id<B>`
/// distinct types. Declare them with [`define_id!`](crate::define_id).
pub trait IdKind: 'static {
    /// Stable name of the family, e.g. `"user_id"`.
    const NAME: &'static str;
}

/// Kind of the untyped base identifier.
#[derive(Debug)]
pub enum Generic {}

impl IdKind for Generic {
    const NAME: &'static str = "xthiago_id";
}

/// Identifier without a dedicated family.
pub type GenericId = Id<Generic>;

/// Immutable identifier holding a non-empty string, typed by its kind `K`.
///
/// The payload is opaque: any non-empty string is accepted, UUID or not.
pub struct Id<K: IdKind> {
    value: Box<str>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: IdKind> Id<K> {
    /// Builds an identifier holding `raw`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` when `raw` is empty.
    pub fn from_string(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(Error::InvalidArgument("the given id should not be empty".into()));
        }
        Ok(Self {
            value: raw.into_boxed_str(),
            _kind: PhantomData,
        })
    }

    /// Builds an identifier from a fresh random UUID v4.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            value: RandomUuidSource::uuid_v4().into_boxed_str(),
            _kind: PhantomData,
        }
    }

    /// Builds an identifier from the next value of `source`.
    ///
    /// # Errors
    ///
    /// Propagates the source's error, e.g. `Error::SequenceExhausted`.
    pub fn generate_with(source: &dyn UuidSource) -> Result<Self> {
        Self::from_string(source.next_uuid()?)
    }

    /// The stored payload, verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the identifier, returning its payload.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value.into_string()
    }
}

impl<K: IdKind> Identifier for Id<K> {
    fn as_str(&self) -> &str {
        &self.value
    }

    fn kind_name(&self) -> &'static str {
        K::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<K: IdKind> IdentifierFactory for Id<K> {
    const TYPE_NAME: &'static str = K::NAME;

    fn from_string(raw: impl Into<String>) -> Result<Self> {
        Self::from_string(raw)
    }

    fn generate() -> Self {
        Self::generate()
    }
}

// Manual impls: derives would demand the same traits from `K`.

impl<K: IdKind> Clone for Id<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: IdKind> PartialEq for Id<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: IdKind> Eq for Id<K> {}

impl<K: IdKind> PartialOrd for Id<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: IdKind> Ord for Id<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K: IdKind> Hash for Id<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: IdKind> fmt::Debug for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&&*self.value).finish()
    }
}

impl<K: IdKind> fmt::Display for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<K: IdKind> AsRef<str> for Id<K> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<K: IdKind> FromStr for Id<K> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl<K: IdKind> TryFrom<String> for Id<K> {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_string(value)
    }
}

impl<K: IdKind> TryFrom<&str> for Id<K> {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::from_string(value)
    }
}

impl<K: IdKind> From<Id<K>> for String {
    fn from(id: Id<K>) -> Self {
        id.into_inner()
    }
}

/// Declares an identifier family: an uninhabited kind marker plus an alias.
///
/// ```
/// value_id::define_id!(pub OrderId: OrderKind = "order_id");
///
/// let id = OrderId::from_string("order-1").unwrap();
/// assert_eq!(id.as_str(), "order-1");
/// ```
#[macro_export]
macro_rules! define_id {
    ($vis:vis $alias:ident : $kind:ident = $name:literal) => {
        #[doc = concat!("Kind marker for `", $name, "` identifiers.")]
        #[derive(Debug)]
        $vis enum $kind {}

        impl $crate::IdKind for $kind {
            const NAME: &'static str = $name;
        }

        #[doc = concat!("Identifier of the `", $name, "` family.")]
        $vis type $alias = $crate::Id<$kind>;
    };
}
