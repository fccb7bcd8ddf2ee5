//! Frozen adapter that always returns the same UUID.

use crate::error::Result;
use crate::ports::UuidSource;

use super::canonical_uuid;

/// Returns one configured UUID on every call.
#[derive(Debug, Clone)]
pub struct FixedUuidSource {
    uuid: String,
}

impl FixedUuidSource {
    /// Creates a source frozen on `uuid`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUuid` if `uuid` does not parse as a UUID.
    pub fn new(uuid: &str) -> Result<Self> {
        Ok(Self {
            uuid: canonical_uuid(uuid)?,
        })
    }
}

impl UuidSource for FixedUuidSource {
    fn next_uuid(&self) -> Result<String> {
        Ok(self.uuid.clone())
    }
}
