use pressnote_core::db::migrations::latest_version;
use pressnote_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn table_exists(conn: &Connection, name: &str) -> bool {
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [name],
        |row| row.get::<_, i64>(0),
    )
    .unwrap()
        == 1
}

#[test]
fn fresh_database_reaches_latest_version() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());
    for table in ["news", "comments", "notes"] {
        assert!(table_exists(&conn, table), "missing table {table}");
    }
}

#[test]
fn foreign_keys_are_enabled() {
    let conn = open_db_in_memory().unwrap();

    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn reopening_a_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pressnote.db");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO notes (owner_id, title, text, slug) VALUES (1, 'Заметка', 'Текст', 'zametka')",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn), latest_version());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn database_from_a_newer_binary_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pressnote.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn deleting_news_cascades_to_its_comments() {
    let conn = open_db_in_memory().unwrap();

    conn.execute(
        "INSERT INTO news (title, body, published_at) VALUES ('Заголовок', 'Текст', 1000)",
        [],
    )
    .unwrap();
    let news_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO comments (news_id, author_id, text, created_at) VALUES (?1, 1, 'Комментарий', 1000)",
        [news_id],
    )
    .unwrap();

    conn.execute("DELETE FROM news WHERE id = ?1", [news_id]).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM comments", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
