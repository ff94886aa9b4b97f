//! SQLite storage bootstrap and the storage error taxonomy.
//!
//! # Responsibility
//! - Open and configure SQLite connections for actor storage.
//! - Ensure the configured actor table exists before any CRUD call.
//!
//! # Invariants
//! - Every failure raised by SQLite is surfaced unchanged inside
//!   `StorageError::Sqlite`.
//! - Table identifiers reach SQL text only after `TableName` validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod table;

pub use open::{open_db, open_db_in_memory};
pub use table::{ensure_actor_table, TableName};

pub type StorageResult<T> = Result<T, StorageError>;

/// Umbrella error for everything originating from the storage layer.
#[derive(Debug)]
pub enum StorageError {
    /// Connection, constraint or query failure reported by SQLite.
    Sqlite(rusqlite::Error),
    /// Configured table name falls outside the identifier allow-list.
    InvalidTableName(String),
    /// Operation attempted after the owning manager released its connection.
    Closed,
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidTableName(name) => write!(
                f,
                "invalid table name `{name}`; expected [A-Za-z_][A-Za-z0-9_]* up to 64 chars"
            ),
            Self::Closed => write!(f, "storage connection is closed"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidTableName(_) | Self::Closed => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
