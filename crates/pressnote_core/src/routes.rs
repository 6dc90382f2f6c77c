//! Canonical URL paths for both properties.
//!
//! # Responsibility
//! - Build the paths the hosting router exposes, so services and tests agree
//!   on redirect targets byte-for-byte.
//!
//! # Invariants
//! - Every constructor returns an absolute path with a trailing slash.
//! - `login_redirect` preserves the original path verbatim in `next`.

use crate::model::news::{CommentId, NewsId};

/// News home page.
pub fn home() -> String {
    "/".to_string()
}

/// News detail page with inline comments.
pub fn news_detail(news_id: NewsId) -> String {
    format!("/news/{news_id}/")
}

/// Comments anchor on the news detail page, used as the post-mutation
/// success destination for comments.
pub fn news_comments_anchor(news_id: NewsId) -> String {
    format!("{}#comments", news_detail(news_id))
}

/// Comment edit page.
pub fn comment_edit(comment_id: CommentId) -> String {
    format!("/news/edit_comment/{comment_id}/")
}

/// Comment delete page.
pub fn comment_delete(comment_id: CommentId) -> String {
    format!("/news/delete_comment/{comment_id}/")
}

/// Notes list page.
pub fn notes_list() -> String {
    "/notes/".to_string()
}

/// Note creation page.
pub fn note_add() -> String {
    "/notes/add/".to_string()
}

/// Note detail page.
pub fn note_detail(slug: &str) -> String {
    format!("/notes/{slug}/")
}

/// Note edit page.
pub fn note_edit(slug: &str) -> String {
    format!("/notes/{slug}/edit/")
}

/// Note delete page.
pub fn note_delete(slug: &str) -> String {
    format!("/notes/{slug}/delete/")
}

/// Post-mutation success page for notes.
pub fn notes_success() -> String {
    "/notes/done/".to_string()
}

/// Builds the login redirect target for an unauthenticated access attempt.
///
/// The `next` query parameter carries the original requested path so a
/// successful login returns the user to their destination.
pub fn login_redirect(login_path: &str, next: &str) -> String {
    format!("{login_path}?next={next}")
}
