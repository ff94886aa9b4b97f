//! Actor table identifier and idempotent DDL.
//!
//! # Responsibility
//! - Validate configured table names before they are spliced into SQL.
//! - Create the actor table when absent.
//!
//! # Invariants
//! - A `TableName` always matches `^[A-Za-z_][A-Za-z0-9_]{0,63}$` and never
//!   starts with SQLite's reserved `sqlite_` prefix (any case).
//! - Table names are trusted configuration, never end-user input. SQLite
//!   cannot bind identifiers as parameters, so statements embed them as
//!   quoted text.

use super::{StorageError, StorageResult};
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::Connection;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const RESERVED_PREFIX: &str = "sqlite_";

static TABLE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,63}$").expect("valid table name regex"));

/// Validated SQL identifier for the actor table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    /// Validates `name` against the identifier allow-list.
    pub fn parse(name: impl Into<String>) -> StorageResult<Self> {
        let name = name.into();
        if !TABLE_NAME_RE.is_match(&name) || is_reserved(&name) {
            return Err(StorageError::InvalidTableName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier form for statement text, e.g. `"actors"`.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl Display for TableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_reserved(name: &str) -> bool {
    name.get(..RESERVED_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(RESERVED_PREFIX))
}

/// Creates the actor table if it does not exist yet.
///
/// Safe to call any number of times against the same database; after the
/// first call the statement leaves the schema untouched.
pub fn ensure_actor_table(conn: &Connection, table: &TableName) -> StorageResult<()> {
    let started_at = Instant::now();
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        );",
        table.quoted()
    );

    let result = conn
        .unchecked_transaction()
        .and_then(|tx| {
            tx.execute_batch(&sql)?;
            tx.commit()
        });

    match result {
        Ok(()) => {
            info!(
                "event=table_ensure module=db status=ok table={} duration_ms={}",
                table,
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=table_ensure module=db status=error table={} duration_ms={} error={}",
                table,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}
