//! Core domain logic for the Pressnote properties: a public news site with
//! reader comments and a private personal notes site.
//! This crate is the single source of truth for access-control and
//! content-visibility rules; HTTP, sessions and templating live upstream.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod moderation;
pub mod policy;
pub mod repo;
pub mod response;
pub mod routes;
pub mod service;
pub mod slug;

pub use config::SiteConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::identity::{Identity, UserId};
pub use model::news::{Comment, CommentId, NewComment, NewNewsItem, NewsId, NewsItem};
pub use model::note::{NewNote, Note, NoteId, NoteInput};
pub use moderation::{check_comment_text, FieldWarning};
pub use policy::{
    authorize_mutation, form_visible, list_visible, require_login, AccessOutcome, AccessPolicy,
    CommentPolicy, NotePolicy,
};
pub use repo::{
    NewsRepository, NoteRepository, RepoError, RepoResult, SqliteNewsRepository,
    SqliteNoteRepository,
};
pub use response::PageOutcome;
pub use service::news_service::{NewsDetailPage, NewsService, NewsServiceError};
pub use service::note_service::{NoteService, NoteServiceError};
pub use slug::{resolve_slug, slugify};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
