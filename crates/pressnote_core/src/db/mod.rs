//! SQLite store for the news and notes tables.
//!
//! # Responsibility
//! - Open and configure connections for the rest of the crate.
//! - Bring the schema to the current version before handing a connection out.
//!
//! # Invariants
//! - The installed schema version lives in `PRAGMA user_version`.
//! - A store written by a newer build is rejected, never partially read.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

use std::error::Error;
use std::fmt;

/// Storage-layer result alias.
pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or migrating the SQLite store.
#[derive(Debug)]
pub enum DbError {
    /// Underlying SQLite failure.
    Sqlite(rusqlite::Error),
    /// The store was written by a newer build of this crate.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite failure: {err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "refusing to open schema version {found}; this build supports up to {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
