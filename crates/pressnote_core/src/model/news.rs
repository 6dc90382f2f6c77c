//! News and comment domain records.
//!
//! # Responsibility
//! - Define the public news item and its attached comments.
//!
//! # Invariants
//! - News items are created administratively and read-only afterwards.
//! - A comment's `author_id` is the only identity allowed to mutate it.
//! - Comment ordering key is `created_at ASC, id ASC` (insertion order on
//!   ties).

use crate::model::identity::UserId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a news item.
pub type NewsId = i64;
/// Stable identifier for a comment.
pub type CommentId = i64;

/// A published news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub body: String,
    /// Publication timestamp in epoch milliseconds.
    pub published_at: i64,
}

/// Draft for administrative news seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNewsItem {
    pub title: String,
    pub body: String,
    pub published_at: i64,
}

/// A reader comment attached to one news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub news_id: NewsId,
    pub author_id: UserId,
    pub text: String,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
}

/// Draft for comment creation after validation passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub news_id: NewsId,
    pub author_id: UserId,
    pub text: String,
    pub created_at: i64,
}
