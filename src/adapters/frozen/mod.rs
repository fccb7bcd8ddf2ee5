//! Deterministic UUID sources that make generation predictable in tests.

pub mod fixed;
pub mod sequence;

pub use fixed::FixedUuidSource;
pub use sequence::SequenceUuidSource;

use uuid::Uuid;

use crate::error::{Error, Result};

/// Parses `value` as a UUID and returns its canonical hyphenated form.
pub(crate) fn canonical_uuid(value: &str) -> Result<String> {
    Uuid::parse_str(value)
        .map(|uuid| uuid.to_string())
        .map_err(|e| Error::InvalidUuid {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
