#![forbid(unsafe_code)]

use rd_storage::{SqliteStore, StoreError};
use rusqlite::Connection;
use std::path::PathBuf;

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let dir = base.join(format!("rd_storage_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn reopening_an_existing_store_succeeds() {
    let storage_dir = temp_dir("reopen");
    {
        let store = SqliteStore::open(&storage_dir).expect("first open");
        assert_eq!(store.storage_dir(), storage_dir.as_path());
    }
    SqliteStore::open(&storage_dir).expect("second open");
}

#[test]
fn foreign_tables_trip_the_preflight_gate() {
    let storage_dir = temp_dir("foreign_tables");
    SqliteStore::open(&storage_dir).expect("first open");

    {
        let conn = Connection::open(storage_dir.join("rentdesk.db")).expect("raw open");
        conn.execute_batch("CREATE TABLE squatters(id INTEGER PRIMARY KEY);")
            .expect("create foreign table");
    }

    let err = match SqliteStore::open(&storage_dir) {
        Err(err) => err,
        Ok(_) => panic!("expected the preflight gate to reject the database"),
    };
    match err {
        StoreError::InvalidInput(msg) => assert!(msg.starts_with("RESET_REQUIRED"), "msg={msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schema_version_mismatch_requires_a_reset() {
    let storage_dir = temp_dir("version_mismatch");
    SqliteStore::open(&storage_dir).expect("first open");

    {
        let conn = Connection::open(storage_dir.join("rentdesk.db")).expect("raw open");
        conn.execute_batch("UPDATE schema_state SET schema_version = 99 WHERE singleton = 1;")
            .expect("bump version");
    }

    let err = match SqliteStore::open(&storage_dir) {
        Err(err) => err,
        Ok(_) => panic!("expected a schema version mismatch"),
    };
    match err {
        StoreError::InvalidInput(msg) => assert!(msg.starts_with("RESET_REQUIRED"), "msg={msg}"),
        other => panic!("unexpected error: {other}"),
    }
}
