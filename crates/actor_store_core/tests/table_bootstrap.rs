use actor_store_core::{ActorManager, StorageError, StoreConfig, DEFAULT_TABLE_NAME};
use rusqlite::Connection;

#[test]
fn opening_same_table_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("actors.db");

    let first = ActorManager::open(&path, "actors").unwrap();
    let id = first.create("Tom", "Hanks").unwrap();
    first.close().unwrap();
    let schema_before = table_sql(&path, "actors");

    let second = ActorManager::open(&path, "actors").unwrap();
    let actors = second.all().unwrap();
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].id, id);
    second.close().unwrap();

    assert_eq!(table_sql(&path, "actors"), schema_before);
}

#[test]
fn two_live_managers_share_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("actors.db");

    let writer = ActorManager::open(&path, "actors").unwrap();
    let reader = ActorManager::open(&path, "actors").unwrap();

    let id = writer.create("Meg", "Ryan").unwrap();
    let seen = reader.all().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].id, id);
}

#[test]
fn separate_tables_in_one_database_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cast.db");

    let leads = ActorManager::open(&path, "leads").unwrap();
    let extras = ActorManager::open(&path, "extras").unwrap();
    leads.create("Tom", "Hanks").unwrap();

    assert_eq!(leads.all().unwrap().len(), 1);
    assert!(extras.all().unwrap().is_empty());
}

#[test]
fn created_table_has_expected_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("actors.db");
    ActorManager::open(&path, "actors").unwrap().close().unwrap();

    let conn = Connection::open(&path).unwrap();
    let mut stmt = conn
        .prepare("SELECT name, type, \"notnull\", pk FROM pragma_table_info('actors');")
        .unwrap();
    let columns: Vec<(String, String, i64, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        columns,
        vec![
            ("id".to_string(), "INTEGER".to_string(), 0, 1),
            ("first_name".to_string(), "TEXT".to_string(), 1, 0),
            ("last_name".to_string(), "TEXT".to_string(), 1, 0),
        ]
    );
    assert!(table_sql(&path, "actors").contains("AUTOINCREMENT"));
}

#[test]
fn invalid_table_name_is_rejected_before_touching_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.db");

    for name in ["actors; DROP TABLE x", "sqlite_actors", "SQLITE_x"] {
        let err = ActorManager::open(&path, name).unwrap_err();
        assert!(
            matches!(err, StorageError::InvalidTableName(ref value) if value == name),
            "unexpected error for `{name}`: {err}"
        );
        assert!(!path.exists(), "`{name}` created the database file");
    }
}

#[test]
fn unopenable_location_surfaces_sqlite_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("actors.db");

    let err = ActorManager::open(&path, "actors").unwrap_err();
    assert!(matches!(err, StorageError::Sqlite(_)));
}

#[test]
fn config_defaults_table_name_and_opens_manager() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("actors.db");

    let config: StoreConfig =
        serde_json::from_value(serde_json::json!({ "db_location": path })).unwrap();
    assert_eq!(config.table_name, DEFAULT_TABLE_NAME);

    let manager = ActorManager::from_config(&config).unwrap();
    assert_eq!(manager.table_name(), DEFAULT_TABLE_NAME);
    assert_eq!(manager.db_location(), Some(path.as_path()));
}

fn table_sql(path: &std::path::Path, table: &str) -> String {
    let conn = Connection::open(path).unwrap();
    conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1;",
        [table],
        |row| row.get(0),
    )
    .unwrap()
}
