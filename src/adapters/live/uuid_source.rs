//! Live adapter for the `UuidSource` port.

use uuid::Uuid;

use crate::error::Result;
use crate::ports::UuidSource;

/// Live UUID source that produces random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidSource;

impl RandomUuidSource {
    /// Creates a new random UUID source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns a fresh random UUID string. Never fails.
    #[must_use]
    pub fn uuid_v4() -> String {
        Uuid::new_v4().to_string()
    }
}

impl UuidSource for RandomUuidSource {
    fn next_uuid(&self) -> Result<String> {
        Ok(Self::uuid_v4())
    }
}
