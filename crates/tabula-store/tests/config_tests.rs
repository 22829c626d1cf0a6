#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use tabula_core::{Repository, TableInfo, TbErrorKind};
use tabula_store::{JournalMode, SqliteDatabase, StoreConfig};
use tempfile::{NamedTempFile, TempDir};

fn write_toml(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_without_sources_gives_defaults() {
    let cfg = StoreConfig::load_from(None, "TABULA_TEST_UNSET").unwrap();
    assert_eq!(cfg, StoreConfig::default());
}

#[test]
fn test_load_from_toml_file() {
    let file = write_toml(
        r#"
path = "/var/lib/tabula/app.db"
journal_mode = "delete"
busy_timeout_ms = 250
"#,
    );

    let cfg = StoreConfig::load_from(Some(file.path()), "TABULA_TEST_FILE").unwrap();
    assert_eq!(
        cfg.path.as_deref(),
        Some(std::path::Path::new("/var/lib/tabula/app.db"))
    );
    assert_eq!(cfg.journal_mode, JournalMode::Delete);
    assert_eq!(cfg.busy_timeout_ms, 250);
    assert!(cfg.foreign_keys, "unset keys keep their defaults");
}

#[test]
fn test_environment_overrides_file() {
    let file = write_toml("busy_timeout_ms = 250\n");
    std::env::set_var("TABULA_TEST_ENV__BUSY_TIMEOUT_MS", "900");
    std::env::set_var("TABULA_TEST_ENV__FOREIGN_KEYS", "false");

    let cfg = StoreConfig::load_from(Some(file.path()), "TABULA_TEST_ENV").unwrap();

    std::env::remove_var("TABULA_TEST_ENV__BUSY_TIMEOUT_MS");
    std::env::remove_var("TABULA_TEST_ENV__FOREIGN_KEYS");

    assert_eq!(cfg.busy_timeout_ms, 900);
    assert!(!cfg.foreign_keys);
}

#[test]
fn test_invalid_value_is_config_error() {
    let file = write_toml("journal_mode = \"sideways\"\n");

    let err = StoreConfig::load_from(Some(file.path()), "TABULA_TEST_BAD").unwrap_err();
    assert_eq!(err.kind(), TbErrorKind::Config);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = StoreConfig::load_from(Some(missing.as_path()), "TABULA_TEST_MISSING").unwrap_err();
    assert_eq!(err.kind(), TbErrorKind::Config);
}

#[test]
fn test_on_disk_database_persists_between_handles() {
    let dir = TempDir::new().unwrap();
    let cfg = StoreConfig::at_path(dir.path().join("store.db"));

    {
        let db = SqliteDatabase::from_config(&cfg).unwrap();
        db.connection()
            .execute_batch(
                "CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT);
                 INSERT INTO notes (body) VALUES ('a'), ('b');",
            )
            .unwrap();
    }

    let db = SqliteDatabase::from_config(&cfg).unwrap();
    let mode: String = db
        .connection()
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode.to_lowercase(), "wal");

    let repo = Repository::new(&db, TableInfo::new("notes", "id"));
    assert_eq!(repo.count().unwrap(), 2);
}
