//! Note repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide note persistence APIs keyed by id and by slug.
//! - Enforce system-wide slug uniqueness at write time.
//!
//! # Invariants
//! - `notes.slug` carries a UNIQUE constraint; a writer losing the
//!   uniqueness race observes the same `SlugTaken` error as the pre-check
//!   path.
//! - Listing is always owner-scoped; there is no "all notes" read path.
//! - Note deletion is a hard delete.

use crate::model::identity::UserId;
use crate::model::note::{NewNote, Note, NoteId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const NOTE_SELECT_SQL: &str = "SELECT id, owner_id, title, text, slug FROM notes";

/// Repository interface for note operations.
pub trait NoteRepository {
    /// Persists one note with a resolved slug and returns its id.
    fn create_note(&self, draft: &NewNote) -> RepoResult<NoteId>;
    /// Gets one note by its unique slug.
    fn get_note_by_slug(&self, slug: &str) -> RepoResult<Option<Note>>;
    /// Replaces title, text and slug of one note.
    fn update_note(&self, id: NoteId, title: &str, text: &str, slug: &str) -> RepoResult<()>;
    /// Hard-deletes one note.
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
    /// Lists all notes of one owner, oldest first.
    fn list_notes_by_owner(&self, owner_id: UserId) -> RepoResult<Vec<Note>>;
    /// Returns whether `slug` is already used, optionally ignoring one note
    /// (its current holder, during edits).
    fn slug_taken(&self, slug: &str, exclude: Option<NoteId>) -> RepoResult<bool>;
    /// Total note count system-wide.
    fn count_notes(&self) -> RepoResult<i64>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create_note(&self, draft: &NewNote) -> RepoResult<NoteId> {
        self.conn
            .execute(
                "INSERT INTO notes (owner_id, title, text, slug) VALUES (?1, ?2, ?3, ?4);",
                params![
                    draft.owner_id,
                    draft.title.as_str(),
                    draft.text.as_str(),
                    draft.slug.as_str()
                ],
            )
            .map_err(|err| map_slug_conflict(err, draft.slug.as_str()))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_note_by_slug(&self, slug: &str) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE slug = ?1;"))?;
        let mut rows = stmt.query([slug])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }
        Ok(None)
    }

    fn update_note(&self, id: NoteId, title: &str, text: &str, slug: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE notes SET title = ?2, text = ?3, slug = ?4 WHERE id = ?1;",
                params![id, title, text, slug],
            )
            .map_err(|err| map_slug_conflict(err, slug))?;
        if changed == 0 {
            return Err(RepoError::NoteNotFound(id));
        }
        Ok(())
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM notes WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NoteNotFound(id));
        }
        Ok(())
    }

    fn list_notes_by_owner(&self, owner_id: UserId) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} WHERE owner_id = ?1 ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([owner_id])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn slug_taken(&self, slug: &str, exclude: Option<NoteId>) -> RepoResult<bool> {
        let taken: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM notes
                WHERE slug = ?1 AND (?2 IS NULL OR id != ?2)
            );",
            params![slug, exclude],
            |row| row.get(0),
        )?;
        Ok(taken == 1)
    }

    fn count_notes(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes;", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Maps a UNIQUE violation on `notes.slug` to the semantic error used by
/// the pre-check path, so concurrent racers fail identically.
fn map_slug_conflict(err: rusqlite::Error, slug: &str) -> RepoError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, message)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation
                && message
                    .as_deref()
                    .is_some_and(|text| text.contains("notes.slug")) =>
        {
            RepoError::SlugTaken(slug.to_string())
        }
        _ => err.into(),
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    Ok(Note {
        id: row.get("id")?,
        owner_id: row.get("owner_id")?,
        title: row.get("title")?,
        text: row.get("text")?,
        slug: row.get("slug")?,
    })
}
