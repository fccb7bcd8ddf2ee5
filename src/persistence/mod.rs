//! Relational persistence adapters.
//!
//! An [`IdColumnType`] maps one identifier type to a string column. Column
//! types are looked up by name through a [`TypeRegistry`], the way mapping
//! layers resolve the type declared on a field.

pub mod column_type;
pub mod options;
pub mod registry;

pub use column_type::{ColumnType, DatabaseValue, IdColumnType};
pub use options::{ColumnOptions, Platform};
pub use registry::TypeRegistry;
