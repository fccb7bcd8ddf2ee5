//! Frozen adapter that replays a known sequence of UUIDs.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::ports::UuidSource;

use super::canonical_uuid;

#[derive(Debug)]
struct Cursor {
    remaining: VecDeque<String>,
    consumed: usize,
}

/// Serves configured UUIDs in order, then fails with `SequenceExhausted`.
#[derive(Debug)]
pub struct SequenceUuidSource {
    cursor: Mutex<Cursor>,
}

impl SequenceUuidSource {
    /// Creates a source that hands out `uuids` in order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUuid` for the first value that is not a UUID.
    pub fn new<I, S>(uuids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let remaining = uuids
            .into_iter()
            .map(|uuid| canonical_uuid(uuid.as_ref()))
            .collect::<Result<_>>()?;
        Ok(Self {
            cursor: Mutex::new(Cursor {
                remaining,
                consumed: 0,
            }),
        })
    }

    /// Number of values not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner).remaining.len()
    }
}

impl UuidSource for SequenceUuidSource {
    fn next_uuid(&self) -> Result<String> {
        let mut cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        match cursor.remaining.pop_front() {
            Some(uuid) => {
                cursor.consumed += 1;
                Ok(uuid)
            }
            None => Err(Error::SequenceExhausted {
                consumed: cursor.consumed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "b070993c-c5c7-4cef-b7a1-725e1db13524";
    const SECOND: &str = "d840e723-2b9e-4b7a-9964-9150f6dbbe6a";

    #[test]
    fn serves_values_in_order_then_exhausts() {
        let source = SequenceUuidSource::new([FIRST, SECOND]).unwrap();
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_uuid().unwrap(), FIRST);
        assert_eq!(source.next_uuid().unwrap(), SECOND);
        assert_eq!(source.next_uuid(), Err(Error::SequenceExhausted { consumed: 2 }));
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn empty_sequence_is_exhausted_immediately() {
        let source = SequenceUuidSource::new(Vec::<String>::new()).unwrap();
        assert_eq!(source.next_uuid(), Err(Error::SequenceExhausted { consumed: 0 }));
    }

    #[test]
    fn rejects_invalid_member() {
        let err = SequenceUuidSource::new([FIRST, "nope"]).unwrap_err();
        assert!(matches!(err, Error::InvalidUuid { ref value, .. } if value == "nope"));
    }
}
