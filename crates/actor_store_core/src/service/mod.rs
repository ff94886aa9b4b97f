//! Core use-case services.
//!
//! # Responsibility
//! - Own storage resources on behalf of callers.
//! - Keep outer glue decoupled from SQL and repository details.

pub mod actor_manager;
