//! Serialization adapters.
//!
//! Identifiers travel as bare strings. `serde` support is implemented
//! directly on [`Id`](crate::Id); [`IdNormalizer`] covers pipelines that only
//! learn the target type at runtime.

pub mod normalizer;
mod serde_impls;

pub use normalizer::IdNormalizer;
