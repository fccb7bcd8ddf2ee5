//! Error type shared by identifiers and their adapters.

use thiserror::Error;

/// Errors raised while building, converting or generating identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The raw payload cannot back an identifier (e.g. it is empty).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A stored column value could not be turned into an identifier.
    #[error("could not convert database value {value:?} to \"{type_name}\"")]
    ConversionFailed {
        /// The offending raw column value.
        value: String,
        /// Name of the column type doing the conversion.
        type_name: String,
    },

    /// Serialized data is not a valid representation of the target type.
    #[error("the data is not a valid \"{type_name}\" string representation")]
    NotNormalizable {
        /// Name of the requested identifier type.
        type_name: String,
    },

    /// A known UUID sequence ran out of values.
    #[error("the UUID sequence is over after {consumed} values")]
    SequenceExhausted {
        /// How many values the sequence handed out before running dry.
        consumed: usize,
    },

    /// A frozen UUID value does not parse as a UUID.
    #[error("invalid UUID {value:?}: {reason}")]
    InvalidUuid {
        /// The rejected value.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// A column type name is already taken in a registry.
    #[error("column type \"{0}\" is already registered")]
    DuplicateType(String),

    /// No column type or identifier type is known under this name.
    #[error("unknown type \"{0}\"")]
    UnknownType(String),

    /// A registered name resolves to a different identifier type than requested.
    #[error("type \"{name}\" is registered, but not for {expected}")]
    TypeMismatch {
        /// The registered name.
        name: String,
        /// The identifier type the caller asked for.
        expected: &'static str,
    },

    /// Column options are malformed.
    #[error("invalid column options: {0}")]
    InvalidOptions(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_type() {
        let err = Error::ConversionFailed {
            value: "x".into(),
            type_name: "product_id".into(),
        };
        assert_eq!(err.to_string(), "could not convert database value \"x\" to \"product_id\"");

        let err = Error::NotNormalizable {
            type_name: "user_id".into(),
        };
        assert!(err.to_string().contains("\"user_id\""));
    }
}
