//! Domain records persisted by actor storage.
//!
//! # Invariants
//! - Records are plain values; identity comes from the storage engine.
//! - Deletion is a hard delete, there are no tombstones.

pub mod actor;
