//! Immutable, nominally typed identifier value objects.
//!
//! [`Id<K>`](Id) wraps a non-empty string. The kind `K` makes identifiers of
//! different families distinct types that share one implementation:
//!
//! ```
//! use value_id::{define_id, Identifier};
//!
//! define_id!(pub UserId: UserKind = "user_id");
//! define_id!(pub OrderId: OrderKind = "order_id");
//!
//! let user = UserId::from_string("42").unwrap();
//! let order = OrderId::from_string("42").unwrap();
//! assert!(!user.is_equal_to(&order));
//! ```
//!
//! Adapters for relational mapping layers live in [`persistence`], for
//! serialization pipelines in [`serializer`], and deterministic generation
//! for tests in [`testing`].

pub mod adapters;
pub mod error;
pub mod id;
pub mod identifier;
pub mod persistence;
pub mod ports;
pub mod serializer;
pub mod testing;

pub use error::{Error, Result};
pub use id::{Generic, GenericId, Id, IdKind};
pub use identifier::{Identifier, IdentifierFactory};
pub use ports::UuidSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_id_uses_the_registered_type_name() {
        assert_eq!(GenericId::TYPE_NAME, "xthiago_id");
        assert_eq!(GenericId::generate().kind_name(), "xthiago_id");
    }
}
