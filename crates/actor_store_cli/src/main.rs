//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `actor_store_core` linkage and the CRUD round trip end to end.
//! - Keep output deterministic for quick local sanity checks.

use actor_store_core::{ActorManager, StorageResult, DEFAULT_TABLE_NAME};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("actor_store_core ping={}", actor_store_core::ping());
    println!("actor_store_core version={}", actor_store_core::core_version());

    match run_scenario() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("actor_store smoke failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_scenario() -> StorageResult<()> {
    let manager = ActorManager::open_in_memory(DEFAULT_TABLE_NAME)?;

    let tom = manager.create("Tom", "Hanks")?;
    let meg = manager.create("Meg", "Ryan")?;
    manager.update(tom, "Thomas", "Hanks")?;
    manager.delete(meg)?;

    let mut actors = manager.all()?;
    actors.sort_by_key(|actor| actor.id);
    for actor in &actors {
        println!("actor id={} name={}", actor.id, actor.full_name());
    }

    manager.close()
}
