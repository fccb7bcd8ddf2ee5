//! Adapter implementations of the port traits.
//!
//! - `live`: real random generation.
//! - `frozen`: deterministic sources for tests.

pub mod frozen;
pub mod live;

pub use frozen::{FixedUuidSource, SequenceUuidSource};
pub use live::RandomUuidSource;
