//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for news and notes.
//! - Isolate SQLite query details from policy/service orchestration.
//!
//! # Invariants
//! - Ordering contracts live in SQL, not in callers: news newest-first,
//!   comments oldest-first, ties broken by id.
//! - Repository APIs return semantic errors (`NotFound`, `SlugTaken`) in
//!   addition to DB transport errors.

use crate::db::DbError;
use crate::model::news::{CommentId, NewsId};
use crate::model::note::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod news_repo;
pub mod note_repo;

pub use news_repo::{NewsRepository, SqliteNewsRepository};
pub use note_repo::{NoteRepository, SqliteNoteRepository};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NewsNotFound(NewsId),
    CommentNotFound(CommentId),
    NoteNotFound(NoteId),
    /// A write lost the system-wide slug uniqueness race or check.
    SlugTaken(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NewsNotFound(id) => write!(f, "news item not found: {id}"),
            Self::CommentNotFound(id) => write!(f, "comment not found: {id}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::SlugTaken(slug) => write!(f, "slug already exists: {slug}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
