//! UUID source port for producing fresh identifier payloads.

use crate::error::Result;

/// Produces UUID strings for newly generated identifiers.
///
/// Abstracting generation lets tests substitute a fixed value or a known
/// sequence instead of true randomness.
pub trait UuidSource: Send + Sync {
    /// Returns the next UUID string.
    ///
    /// # Errors
    ///
    /// Returns an error when the source cannot produce another value, such as
    /// an exhausted known sequence.
    fn next_uuid(&self) -> Result<String>;
}
