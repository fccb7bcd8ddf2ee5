//! Column options and platform-specific SQL declarations.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Target SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// `PostgreSQL`, which has a native `UUID` type.
    Postgres,
    /// `MySQL` / `MariaDB`.
    MySql,
    /// `SQLite`.
    Sqlite,
}

const fn default_length() -> u32 {
    255
}

/// Shape of the string column backing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnOptions {
    /// Maximum payload length.
    #[serde(default = "default_length")]
    pub length: u32,
    /// Use a fixed-width column.
    #[serde(default)]
    pub fixed: bool,
    /// Store as a GUID column. Column types then reject non-UUID payloads.
    #[serde(default)]
    pub guid: bool,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            length: default_length(),
            fixed: false,
            guid: false,
        }
    }
}

impl ColumnOptions {
    /// Options for a GUID column.
    #[must_use]
    pub fn guid() -> Self {
        Self {
            length: 36,
            fixed: true,
            guid: true,
        }
    }

    /// Parses options from YAML, e.g. `length: 36\nfixed: true`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` when the YAML is malformed or the
    /// length is zero.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(yaml).map_err(|e| {
            Error::InvalidOptions(format!("failed to parse column options: {e}"))
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Checks the options are usable.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` when the length is zero.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidOptions("length must be greater than zero".into()));
        }
        Ok(())
    }

    /// SQL type declaration for `platform`.
    #[must_use]
    pub fn sql_declaration(&self, platform: Platform) -> String {
        match (self.guid, platform) {
            (true, Platform::Postgres) => "UUID".to_string(),
            (true, _) => "CHAR(36)".to_string(),
            (false, _) if self.fixed => format!("CHAR({})", self.length),
            (false, _) => format!("VARCHAR({})", self.length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_varchar_255() {
        let options = ColumnOptions::default();
        assert_eq!(options.sql_declaration(Platform::MySql), "VARCHAR(255)");
    }

    #[test]
    fn guid_columns_are_native_on_postgres() {
        let options = ColumnOptions::guid();
        assert_eq!(options.sql_declaration(Platform::Postgres), "UUID");
        assert_eq!(options.sql_declaration(Platform::Sqlite), "CHAR(36)");
    }

    #[test]
    fn parses_partial_yaml() {
        let options = ColumnOptions::from_yaml("length: 36\nfixed: true\n").unwrap();
        assert_eq!(
            options,
            ColumnOptions {
                length: 36,
                fixed: true,
                guid: false
            }
        );
        assert_eq!(options.sql_declaration(Platform::Postgres), "CHAR(36)");
    }

    #[test]
    fn rejects_zero_length_and_unknown_keys() {
        assert!(matches!(ColumnOptions::from_yaml("length: 0"), Err(Error::InvalidOptions(_))));
        assert!(matches!(ColumnOptions::from_yaml("width: 3"), Err(Error::InvalidOptions(_))));
    }
}
