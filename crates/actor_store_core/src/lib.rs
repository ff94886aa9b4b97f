//! Single-table actor storage over embedded SQLite.
//! `ActorManager` is the entry point; everything else supports it.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{StoreConfig, DEFAULT_TABLE_NAME};
pub use db::{StorageError, StorageResult, TableName};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::actor::{Actor, ActorId};
pub use repo::actor_repo::{ActorRepository, SqliteActorRepository};
pub use service::actor_manager::ActorManager;

/// Liveness answer used by the smoke CLI to confirm the library links.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
