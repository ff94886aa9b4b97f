//! Actor domain model.
//!
//! # Invariants
//! - `id` is assigned by SQLite on insert and never reused.
//! - `first_name` and `last_name` are always present for a persisted row.

use serde::{Deserialize, Serialize};

/// Engine-assigned row identifier.
pub type ActorId = i64;

/// One persisted actor row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub first_name: String,
    pub last_name: String,
}

impl Actor {
    pub fn new(id: ActorId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
