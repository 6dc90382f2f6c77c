//! Personal note domain records.
//!
//! # Responsibility
//! - Define the private note record and its submission payload.
//!
//! # Invariants
//! - `slug` is unique across all notes system-wide, not just per owner.
//! - A note's `owner_id` is the only identity allowed to view or mutate it.

use crate::model::identity::UserId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a note.
pub type NoteId = i64;

/// A personal note, private to its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub owner_id: UserId,
    pub title: String,
    pub text: String,
    /// URL-safe unique identifier, user-supplied or derived from `title`.
    pub slug: String,
}

/// Draft for note creation after slug resolution passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub owner_id: UserId,
    pub title: String,
    pub text: String,
    pub slug: String,
}

/// Raw note form payload as submitted by the hosting layer.
///
/// An absent or empty `slug` requests derivation from `title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    pub title: String,
    pub text: String,
    pub slug: Option<String>,
}
