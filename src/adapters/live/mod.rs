//! Live adapters backed by real randomness.

pub mod uuid_source;

pub use uuid_source::RandomUuidSource;
