//! Ordered schema migrations for the news and notes tables.
//!
//! # Invariants
//! - Versions are strictly increasing; each entry runs at most once.
//! - All pending steps apply inside one transaction, mirrored to
//!   `PRAGMA user_version` as they go.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

const MIGRATIONS: &[(u32, &str)] = &[
    (1, include_str!("0001_news.sql")),
    (2, include_str!("0002_notes.sql")),
];

/// Latest schema version this build knows how to produce.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |(version, _)| *version)
}

/// Brings the connected store up to [`latest_version`].
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let installed = installed_version(conn)?;
    let supported = latest_version();
    if installed > supported {
        return Err(DbError::UnsupportedSchemaVersion {
            found: installed,
            supported,
        });
    }

    let pending: Vec<&(u32, &str)> = MIGRATIONS
        .iter()
        .filter(|(version, _)| *version > installed)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    Ok(())
}

fn installed_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(version)
}
