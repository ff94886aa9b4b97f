//! Actor repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over one configured actor table.
//! - Keep SQL text inside the persistence boundary.
//!
//! # Invariants
//! - Every write runs in its own transaction and commits before returning.
//! - Update/delete on a missing id affect zero rows and are not errors.
//! - Listing imposes no ordering beyond what SQLite returns.

use crate::db::{StorageResult, TableName};
use crate::model::actor::{Actor, ActorId};
use log::{debug, error};
use rusqlite::{params, Connection, Row};
use std::time::Instant;

/// Repository interface for actor CRUD operations.
pub trait ActorRepository {
    fn create_actor(&self, first_name: &str, last_name: &str) -> StorageResult<ActorId>;
    fn list_actors(&self) -> StorageResult<Vec<Actor>>;
    /// Returns the number of rows changed (0 or 1).
    fn update_actor(&self, id: ActorId, first_name: &str, last_name: &str)
        -> StorageResult<usize>;
    /// Returns the number of rows removed (0 or 1).
    fn delete_actor(&self, id: ActorId) -> StorageResult<usize>;
}

/// SQLite-backed actor repository bound to one table.
pub struct SqliteActorRepository<'conn> {
    conn: &'conn Connection,
    table: &'conn TableName,
}

impl<'conn> SqliteActorRepository<'conn> {
    /// Borrows a connection whose actor table has already been ensured.
    pub fn new(conn: &'conn Connection, table: &'conn TableName) -> Self {
        Self { conn, table }
    }

    /// Runs `op` and logs one `event=<event>` line with status and duration.
    fn logged<T>(
        &self,
        event: &str,
        summary: impl FnOnce(&T) -> String,
        op: impl FnOnce() -> StorageResult<T>,
    ) -> StorageResult<T> {
        let started_at = Instant::now();
        let result = op();

        match &result {
            Ok(value) => debug!(
                "event={} module=repo status=ok table={} {} duration_ms={}",
                event,
                self.table,
                summary(value),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event={} module=repo status=error table={} duration_ms={} error={}",
                event,
                self.table,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn write(&self, event: &str, sql: &str, params: impl rusqlite::Params) -> StorageResult<usize> {
        self.logged(event, |changed| format!("rows={changed}"), || {
            let tx = self.conn.unchecked_transaction()?;
            let changed = tx.execute(sql, params)?;
            tx.commit()?;
            Ok(changed)
        })
    }
}

impl ActorRepository for SqliteActorRepository<'_> {
    fn create_actor(&self, first_name: &str, last_name: &str) -> StorageResult<ActorId> {
        let sql = format!(
            "INSERT INTO {} (first_name, last_name) VALUES (?1, ?2);",
            self.table.quoted()
        );

        self.logged("actor_create", |id| format!("id={id}"), || {
            let tx = self.conn.unchecked_transaction()?;
            tx.execute(&sql, params![first_name, last_name])?;
            // Read on the inserting transaction, before commit.
            let id = tx.last_insert_rowid();
            tx.commit()?;
            Ok(id)
        })
    }

    fn list_actors(&self) -> StorageResult<Vec<Actor>> {
        let sql = format!(
            "SELECT id, first_name, last_name FROM {};",
            self.table.quoted()
        );

        self.logged("actor_list", |actors: &Vec<Actor>| format!("rows={}", actors.len()), || {
            let mut stmt = self.conn.prepare(&sql)?;
            let mut rows = stmt.query([])?;
            let mut actors = Vec::new();
            while let Some(row) = rows.next()? {
                actors.push(parse_actor_row(row)?);
            }
            Ok(actors)
        })
    }

    fn update_actor(
        &self,
        id: ActorId,
        first_name: &str,
        last_name: &str,
    ) -> StorageResult<usize> {
        let sql = format!(
            "UPDATE {}
             SET first_name = ?1, last_name = ?2
             WHERE id = ?3;",
            self.table.quoted()
        );
        self.write("actor_update", &sql, params![first_name, last_name, id])
    }

    fn delete_actor(&self, id: ActorId) -> StorageResult<usize> {
        let sql = format!("DELETE FROM {} WHERE id = ?1;", self.table.quoted());
        self.write("actor_delete", &sql, [id])
    }
}

/// Maps one result row to an `Actor` by column name.
///
/// A missing column fails with `InvalidColumnName` instead of defaulting.
pub fn parse_actor_row(row: &Row<'_>) -> StorageResult<Actor> {
    Ok(Actor {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    })
}
