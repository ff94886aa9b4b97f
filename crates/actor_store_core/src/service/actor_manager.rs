//! Owning facade over one actor table.
//!
//! # Responsibility
//! - Acquire one exclusive SQLite connection and ensure the actor table.
//! - Expose create/list/update/delete while the connection is open.
//! - Release the connection exactly once.
//!
//! # Invariants
//! - State only moves `Open -> Closed`; every CRUD call after close fails
//!   with `StorageError::Closed`.
//! - The table name is validated before the database file is touched.

use crate::config::StoreConfig;
use crate::db::{
    ensure_actor_table, open_db, open_db_in_memory, StorageError, StorageResult, TableName,
};
use crate::model::actor::{Actor, ActorId};
use crate::repo::actor_repo::{ActorRepository, SqliteActorRepository};
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Data-access object owning one connection and one actor table.
///
/// The connection is released by [`ActorManager::close`] or, failing that,
/// when the manager is dropped.
pub struct ActorManager {
    conn: Option<Connection>,
    table: TableName,
    location: Option<PathBuf>,
}

impl ActorManager {
    /// Opens (or creates) the database at `db_location` and ensures `table_name`.
    ///
    /// `table_name` is trusted configuration; it must match the identifier
    /// allow-list and is embedded in SQL text.
    pub fn open(db_location: impl AsRef<Path>, table_name: &str) -> StorageResult<Self> {
        let table = TableName::parse(table_name)?;
        let location = db_location.as_ref().to_path_buf();
        let conn = open_db(&location)?;
        Self::bootstrap(conn, table, Some(location))
    }

    /// Opens a private in-memory database, discarded on close.
    pub fn open_in_memory(table_name: &str) -> StorageResult<Self> {
        let table = TableName::parse(table_name)?;
        let conn = open_db_in_memory()?;
        Self::bootstrap(conn, table, None)
    }

    pub fn from_config(config: &StoreConfig) -> StorageResult<Self> {
        Self::open(&config.db_location, &config.table_name)
    }

    fn bootstrap(
        conn: Connection,
        table: TableName,
        location: Option<PathBuf>,
    ) -> StorageResult<Self> {
        ensure_actor_table(&conn, &table)?;
        Ok(Self {
            conn: Some(conn),
            table,
            location,
        })
    }

    /// Inserts one actor and returns its engine-assigned id.
    pub fn create(&self, first_name: &str, last_name: &str) -> StorageResult<ActorId> {
        self.with_repo(|repo| repo.create_actor(first_name, last_name))
    }

    /// Returns every stored actor, in storage order. Empty table yields an empty `Vec`.
    pub fn all(&self) -> StorageResult<Vec<Actor>> {
        self.with_repo(|repo| repo.list_actors())
    }

    /// Replaces both names of actor `pk`.
    ///
    /// A missing `pk` is not an error; the returned row count is then 0.
    pub fn update(
        &self,
        pk: ActorId,
        new_first_name: &str,
        new_last_name: &str,
    ) -> StorageResult<usize> {
        self.with_repo(|repo| repo.update_actor(pk, new_first_name, new_last_name))
    }

    /// Removes actor `pk`. A missing `pk` returns 0.
    pub fn delete(&self, pk: ActorId) -> StorageResult<usize> {
        self.with_repo(|repo| repo.delete_actor(pk))
    }

    pub fn table_name(&self) -> &str {
        self.table.as_str()
    }

    /// Database file location, `None` for in-memory managers.
    pub fn db_location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Releases the connection and reports any failure from SQLite.
    pub fn close(mut self) -> StorageResult<()> {
        self.close_in_place()
    }

    /// Releases the connection while keeping the manager value.
    ///
    /// Later CRUD calls fail with `StorageError::Closed`. Closing twice is a no-op.
    pub fn close_in_place(&mut self) -> StorageResult<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        match conn.close() {
            Ok(()) => {
                info!(
                    "event=db_close module=service status=ok table={}",
                    self.table
                );
                Ok(())
            }
            Err((conn, err)) => {
                // Keep the handle so Drop can still release it.
                self.conn = Some(conn);
                error!(
                    "event=db_close module=service status=error table={} error={}",
                    self.table, err
                );
                Err(err.into())
            }
        }
    }

    fn with_repo<T>(
        &self,
        op: impl FnOnce(&SqliteActorRepository<'_>) -> StorageResult<T>,
    ) -> StorageResult<T> {
        let conn = self.conn.as_ref().ok_or(StorageError::Closed)?;
        op(&SqliteActorRepository::new(conn, &self.table))
    }
}

impl std::fmt::Debug for ActorManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorManager")
            .field("table", &self.table)
            .field("location", &self.location)
            .field("open", &self.is_open())
            .finish()
    }
}
