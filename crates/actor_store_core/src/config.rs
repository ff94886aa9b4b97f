//! Construction-time configuration for `ActorManager`.
//!
//! The core never reads files or environment variables; outer glue
//! deserializes `StoreConfig` from whatever source it owns.

use crate::db::{StorageResult, TableName};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Table used when configuration omits `table_name`.
pub const DEFAULT_TABLE_NAME: &str = "actors";

/// Where actors live: database file plus table within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub db_location: PathBuf,
    #[serde(default = "default_table_name")]
    pub table_name: String,
}

impl StoreConfig {
    pub fn new(db_location: impl Into<PathBuf>, table_name: impl Into<String>) -> Self {
        Self {
            db_location: db_location.into(),
            table_name: table_name.into(),
        }
    }

    /// Checks `table_name` against the identifier allow-list.
    pub fn validate(&self) -> StorageResult<()> {
        TableName::parse(self.table_name.as_str()).map(|_| ())
    }
}

fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, DEFAULT_TABLE_NAME};
    use crate::db::StorageError;

    #[test]
    fn validate_accepts_default_table() {
        let config = StoreConfig::new("/tmp/actors.db", DEFAULT_TABLE_NAME);
        config.validate().expect("default table name should validate");
    }

    #[test]
    fn validate_rejects_untrusted_identifier() {
        let config = StoreConfig::new("/tmp/actors.db", "actors--");
        assert!(matches!(
            config.validate(),
            Err(StorageError::InvalidTableName(_))
        ));
    }
}
