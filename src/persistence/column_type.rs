//! Column type mapping identifiers to string columns.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::identifier::{Identifier, IdentifierFactory};

use super::options::{ColumnOptions, Platform};

/// A named database column type, resolvable at runtime.
pub trait ColumnType: Send + Sync + 'static {
    /// Stable name the type is registered under.
    fn name(&self) -> &str;

    /// Whether schema tools must record the logical type in a column comment.
    fn requires_sql_comment_hint(&self, platform: Platform) -> bool;

    /// SQL type declaration for `platform`.
    fn sql_declaration(&self, platform: Platform) -> String;

    /// Comment that lets schema diffing recover the logical type.
    fn comment_hint(&self) -> String {
        format!("(DC2Type:{})", self.name())
    }

    /// Upcast used to recover the concrete column type from a registry.
    fn as_any(&self) -> &dyn Any;
}

/// A value read from a database column.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseValue<T> {
    /// SQL `NULL`.
    Null,
    /// A text column value.
    Text(String),
    /// An integer column value.
    Integer(i64),
    /// A binary column value.
    Bytes(Vec<u8>),
    /// A value the mapping layer already converted.
    Hydrated(T),
}

impl<T> From<Option<String>> for DatabaseValue<T> {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

/// Maps the identifier type `T` to a string column.
pub struct IdColumnType<T: IdentifierFactory> {
    name: String,
    options: ColumnOptions,
    _id: PhantomData<fn() -> T>,
}

impl<T: IdentifierFactory> IdColumnType<T> {
    /// Column type registered under `T::TYPE_NAME`.
    #[must_use]
    pub fn new() -> Self {
        Self::named(T::TYPE_NAME)
    }

    /// Column type registered under a custom name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: ColumnOptions::default(),
            _id: PhantomData,
        }
    }

    /// Replaces the column options.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` when `options` fail validation.
    pub fn with_options(mut self, options: ColumnOptions) -> Result<Self> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    /// Current column options.
    #[must_use]
    pub fn options(&self) -> &ColumnOptions {
        &self.options
    }

    /// Payload to store for `value`; `None` stores `NULL`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConversionFailed` when the column is a GUID column and
    /// the payload is not a UUID.
    pub fn to_database_value(&self, value: Option<&T>) -> Result<Option<String>> {
        let Some(id) = value else {
            return Ok(None);
        };
        self.check_guid(id.as_str())?;
        Ok(Some(id.as_str().to_owned()))
    }

    /// Identifier for a stored column value.
    ///
    /// Already-converted values pass through unchanged. `NULL`, empty text
    /// and non-text values map to `None`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConversionFailed` when `T` rejects the stored text, or
    /// when the column is a GUID column and the text is not a UUID.
    pub fn from_database_value(&self, raw: DatabaseValue<T>) -> Result<Option<T>> {
        let text = match raw {
            DatabaseValue::Hydrated(id) => return Ok(Some(id)),
            DatabaseValue::Text(text) if !text.is_empty() => text,
            DatabaseValue::Text(_)
            | DatabaseValue::Null
            | DatabaseValue::Integer(_)
            | DatabaseValue::Bytes(_) => return Ok(None),
        };

        log::trace!("{}: converting {text:?}", self.name);
        self.check_guid(&text)?;
        T::from_string(text.as_str()).map(Some).map_err(|e| {
            log::warn!("{}: rejected database value {text:?}: {e}", self.name);
            self.conversion_failed(&text)
        })
    }

    fn check_guid(&self, payload: &str) -> Result<()> {
        if !self.options.guid {
            return Ok(());
        }
        Uuid::parse_str(payload).map(drop).map_err(|e| {
            log::warn!("{}: {payload:?} is not a UUID: {e}", self.name);
            self.conversion_failed(payload)
        })
    }

    fn conversion_failed(&self, value: &str) -> Error {
        Error::ConversionFailed {
            value: value.to_string(),
            type_name: self.name.clone(),
        }
    }
}

impl<T: IdentifierFactory> Default for IdColumnType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IdentifierFactory> fmt::Debug for IdColumnType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdColumnType")
            .field("name", &self.name)
            .field("id_type", &T::TYPE_NAME)
            .field("options", &self.options)
            .finish()
    }
}

impl<T: IdentifierFactory> ColumnType for IdColumnType<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn requires_sql_comment_hint(&self, _platform: Platform) -> bool {
        true
    }

    fn sql_declaration(&self, platform: Platform) -> String {
        self.options.sql_declaration(platform)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenericId;

    crate::define_id!(ProductId: ProductKind = "product_id");

    #[test]
    fn name_defaults_to_identifier_type_name() {
        assert_eq!(IdColumnType::<GenericId>::new().name(), "xthiago_id");
        assert_eq!(IdColumnType::<ProductId>::default().name(), "product_id");
        assert_eq!(IdColumnType::<ProductId>::named("sku").name(), "sku");
    }

    #[test]
    fn empty_and_non_text_values_map_to_none() {
        let column = IdColumnType::<ProductId>::new();
        for raw in [
            DatabaseValue::Null,
            DatabaseValue::Text(String::new()),
            DatabaseValue::Integer(11),
            DatabaseValue::Bytes(vec![1, 2]),
        ] {
            assert_eq!(column.from_database_value(raw).unwrap(), None);
        }
    }

    #[test]
    fn options_drive_declaration() {
        let column = IdColumnType::<ProductId>::new()
            .with_options(ColumnOptions::guid())
            .unwrap();
        assert_eq!(column.sql_declaration(Platform::Postgres), "UUID");
        assert_eq!(column.comment_hint(), "(DC2Type:product_id)");

        let zero = ColumnOptions {
            length: 0,
            ..ColumnOptions::default()
        };
        assert!(IdColumnType::<ProductId>::new().with_options(zero).is_err());
    }

    #[test]
    fn guid_columns_reject_non_uuid_payloads() {
        let column = IdColumnType::<GenericId>::new()
            .with_options(ColumnOptions::guid())
            .unwrap();
        let expected = Error::ConversionFailed {
            value: "user-7310".into(),
            type_name: "xthiago_id".into(),
        };

        let loaded = column.from_database_value(DatabaseValue::Text("user-7310".into()));
        assert_eq!(loaded, Err(expected.clone()));

        let id = GenericId::from_string("user-7310").unwrap();
        assert_eq!(column.to_database_value(Some(&id)), Err(expected));
    }

    #[test]
    fn guid_columns_accept_uuid_payloads() {
        let column = IdColumnType::<GenericId>::new()
            .with_options(ColumnOptions::guid())
            .unwrap();
        let id = GenericId::generate();

        let stored = column.to_database_value(Some(&id)).unwrap();
        assert_eq!(stored.as_deref(), Some(id.as_str()));
        let loaded = column.from_database_value(stored.into()).unwrap();
        assert_eq!(loaded, Some(id));
    }

    #[test]
    fn plain_columns_accept_any_payload() {
        let column = IdColumnType::<GenericId>::new();
        let id = GenericId::from_string("user-7310").unwrap();
        assert_eq!(
            column.to_database_value(Some(&id)).unwrap().as_deref(),
            Some("user-7310")
        );
    }

    #[test]
    fn optional_text_converts_into_database_value() {
        assert_eq!(DatabaseValue::<ProductId>::from(None), DatabaseValue::Null);
        assert_eq!(
            DatabaseValue::<ProductId>::from(Some("p".to_string())),
            DatabaseValue::Text("p".into())
        );
    }
}
