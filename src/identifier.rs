//! The capability contract every identifier type exposes.
//!
//! Adapters never depend on [`Id`](crate::Id) directly; they program against
//! these two traits so custom identifier types can reuse them.

use std::any::Any;
use std::fmt;

use crate::error::Result;
use crate::ports::UuidSource;

/// Object-safe view of an identifier.
pub trait Identifier: fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// The stored payload, verbatim.
    fn as_str(&self) -> &str;

    /// Stable name of the concrete identifier type.
    fn kind_name(&self) -> &'static str;

    /// Upcast used for concrete-type comparisons and downcasts.
    fn as_any(&self) -> &dyn Any;

    /// True iff `other` has the same concrete type and the same payload.
    ///
    /// Two identifiers of different types never compare equal, even when
    /// their payloads match.
    fn is_equal_to(&self, other: &dyn Identifier) -> bool {
        self.as_any().type_id() == other.as_any().type_id() && self.as_str() == other.as_str()
    }

    /// Primitive form handed to serialization frameworks.
    fn to_primitive(&self) -> String {
        self.as_str().to_owned()
    }
}

/// Construction half of the contract, resolved on the concrete type.
pub trait IdentifierFactory: Identifier + Sized {
    /// Stable name of this identifier type, used by column types and
    /// normalizers.
    const TYPE_NAME: &'static str;

    /// Builds an identifier holding `raw`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` when `raw` cannot back this type.
    fn from_string(raw: impl Into<String>) -> Result<Self>;

    /// Builds an identifier from a fresh random UUID v4.
    fn generate() -> Self;

    /// Builds an identifier from the next value of `source`.
    ///
    /// # Errors
    ///
    /// Propagates failures of `source` and of [`IdentifierFactory::from_string`].
    fn generate_with(source: &dyn UuidSource) -> Result<Self> {
        Self::from_string(source.next_uuid()?)
    }
}
