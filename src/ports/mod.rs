//! The randomness boundary of the identifier core.
//!
//! Fresh identifiers take their payload from a [`UuidSource`]. Random and
//! deterministic implementations live in `src/adapters/`.

pub mod uuid_source;

pub use uuid_source::UuidSource;
