//! Test helpers that make identifier generation deterministic.
//!
//! A [`UuidFreezer`] is a [`UuidSource`] whose behaviour can be switched
//! between randomness, a fixed value and a known sequence. Tests own their
//! freezer and pass it to [`Id::generate_with`](crate::Id::generate_with),
//! so no process-wide state is involved.

use std::sync::{Arc, PoisonError, RwLock};

use crate::adapters::{FixedUuidSource, RandomUuidSource, SequenceUuidSource};
use crate::error::Result;
use crate::ports::UuidSource;

struct State {
    source: Arc<dyn UuidSource>,
    frozen: bool,
}

/// Switchable UUID source for test setup and teardown.
pub struct UuidFreezer {
    state: RwLock<State>,
}

impl UuidFreezer {
    /// Creates an unfrozen source that yields random UUIDs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                source: Arc::new(RandomUuidSource),
                frozen: false,
            }),
        }
    }

    /// Makes every following call return `uuid`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUuid` if `uuid` is not a UUID; the previous
    /// behaviour is kept in that case.
    pub fn freeze_with_fixed_value(&self, uuid: &str) -> Result<()> {
        let source = FixedUuidSource::new(uuid)?;
        log::debug!("uuid source frozen on {uuid}");
        self.swap(Arc::new(source), true);
        Ok(())
    }

    /// Makes following calls return `uuids` in order, then fail with
    /// `Error::SequenceExhausted`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUuid` if any value is not a UUID; the previous
    /// behaviour is kept in that case.
    pub fn freeze_with_known_sequence<I, S>(&self, uuids: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source = SequenceUuidSource::new(uuids)?;
        log::debug!("uuid source frozen on a sequence of {} values", source.remaining());
        self.swap(Arc::new(source), true);
        Ok(())
    }

    /// Restores random generation.
    pub fn unfreeze(&self) {
        log::debug!("uuid source unfrozen");
        self.swap(Arc::new(RandomUuidSource), false);
    }

    /// Whether a fixed value or sequence is in effect.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.state.read().unwrap_or_else(PoisonError::into_inner).frozen
    }

    fn swap(&self, source: Arc<dyn UuidSource>, frozen: bool) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = State { source, frozen };
    }
}

impl Default for UuidFreezer {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidSource for UuidFreezer {
    fn next_uuid(&self) -> Result<String> {
        let source = {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(&state.source)
        };
        source.next_uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const FIXED: &str = "bf01abdd-34f1-4a60-b263-00a73499eae0";

    #[test]
    fn starts_random() {
        let freezer = UuidFreezer::new();
        assert!(!freezer.is_frozen());
        assert_ne!(freezer.next_uuid().unwrap(), freezer.next_uuid().unwrap());
    }

    #[test]
    fn failed_freeze_keeps_previous_source() {
        let freezer = UuidFreezer::new();
        freezer.freeze_with_fixed_value(FIXED).unwrap();

        let err = freezer.freeze_with_known_sequence(["nope"]).unwrap_err();
        assert!(matches!(err, Error::InvalidUuid { .. }));
        assert_eq!(freezer.next_uuid().unwrap(), FIXED);
    }

    #[test]
    fn unfreeze_restores_randomness() {
        let freezer = UuidFreezer::new();
        freezer.freeze_with_fixed_value(FIXED).unwrap();
        assert!(freezer.is_frozen());

        freezer.unfreeze();
        assert!(!freezer.is_frozen());
        assert_ne!(freezer.next_uuid().unwrap(), FIXED);
    }
}
