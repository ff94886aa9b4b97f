//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the actor data access contract.
//! - Isolate SQLite query details from the owning manager.
//!
//! # Invariants
//! - Repository APIs return `StorageError` unchanged from SQLite.
//! - Zero affected rows is a valid outcome, never `NotFound`.

pub mod actor_repo;
