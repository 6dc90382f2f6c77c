//! News use-case service.
//!
//! # Responsibility
//! - Serve the home listing and news detail pages.
//! - Run comment submission, edit and delete through the form gate,
//!   moderation and the ownership policy.
//!
//! # Invariants
//! - Nothing is persisted when moderation or authorization fails.
//! - Comment mutations succeed into a redirect to the comments anchor of
//!   the owning news detail page.

use crate::config::SiteConfig;
use crate::model::identity::Identity;
use crate::model::news::{Comment, CommentId, NewComment, NewsId, NewsItem};
use crate::moderation;
use crate::policy::{self, AccessOutcome, CommentPolicy};
use crate::repo::{NewsRepository, RepoError};
use crate::response::PageOutcome;
use crate::routes;
use crate::service::now_ms;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for news use-cases.
#[derive(Debug)]
pub enum NewsServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NewsServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent news state: {details}")
            }
        }
    }
}

impl Error for NewsServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for NewsServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Render model for the news detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDetailPage {
    pub news: NewsItem,
    /// Comments in chronological order, oldest first.
    pub comments: Vec<Comment>,
    /// Whether the submission form is rendered for this identity.
    pub comment_form: bool,
}

/// News service facade over repository implementations.
pub struct NewsService<R: NewsRepository> {
    repo: R,
    config: SiteConfig,
}

impl<R: NewsRepository> NewsService<R> {
    /// Creates a service using the provided repository and site constants.
    pub fn new(repo: R, config: SiteConfig) -> Self {
        Self { repo, config }
    }

    /// Home listing: newest items first, capped at the configured count.
    pub fn home_page(&self) -> Result<Vec<NewsItem>, NewsServiceError> {
        Ok(self.repo.list_home(self.config.news_count_on_home_page)?)
    }

    /// News detail with inline comments; public to every identity.
    pub fn detail(
        &self,
        identity: Identity,
        news_id: NewsId,
    ) -> Result<PageOutcome<NewsDetailPage>, NewsServiceError> {
        let Some(news) = self.repo.get_news(news_id)? else {
            return Ok(PageOutcome::NotFound);
        };
        let comments =
            policy::list_visible(&CommentPolicy, identity, self.repo.list_comments(news_id)?);
        Ok(PageOutcome::Ok(NewsDetailPage {
            news,
            comments,
            comment_form: policy::form_visible(identity),
        }))
    }

    /// Edit/delete page access for one comment.
    pub fn comment_page(
        &self,
        identity: Identity,
        comment_id: CommentId,
        requested_path: &str,
    ) -> Result<PageOutcome<Comment>, NewsServiceError> {
        if let Some(location) =
            policy::require_login(identity, requested_path, &self.config.login_path)
        {
            return Ok(PageOutcome::redirect(location));
        }
        let Some(comment) = self.repo.get_comment(comment_id)? else {
            return Ok(PageOutcome::NotFound);
        };
        match policy::authorize_mutation(
            &CommentPolicy,
            identity,
            &comment,
            requested_path,
            &self.config.login_path,
        ) {
            AccessOutcome::Allow => Ok(PageOutcome::Ok(comment)),
            AccessOutcome::RedirectToLogin { location } => Ok(PageOutcome::redirect(location)),
            AccessOutcome::NotFound => Ok(PageOutcome::NotFound),
        }
    }

    /// Submits a new comment against one news item.
    pub fn submit_comment(
        &self,
        identity: Identity,
        news_id: NewsId,
        text: &str,
        requested_path: &str,
    ) -> Result<PageOutcome<()>, NewsServiceError> {
        let Identity::Authenticated(author_id) = identity else {
            warn!(
                "event=comment_submit module=news_service status=denied reason=anonymous news_id={news_id}"
            );
            return Ok(PageOutcome::redirect(routes::login_redirect(
                &self.config.login_path,
                requested_path,
            )));
        };
        let Some(news) = self.repo.get_news(news_id)? else {
            return Ok(PageOutcome::NotFound);
        };
        if let Err(warning) =
            moderation::check_comment_text(text, &self.config.bad_words, &self.config.comment_warning)
        {
            warn!(
                "event=comment_submit module=news_service status=rejected reason=bad_words news_id={news_id}"
            );
            return Ok(PageOutcome::invalid(warning));
        }

        let comment_id = self.repo.create_comment(&NewComment {
            news_id: news.id,
            author_id,
            text: text.to_string(),
            created_at: now_ms(),
        })?;
        self.repo
            .get_comment(comment_id)?
            .ok_or(NewsServiceError::InconsistentState(
                "created comment not found in read-back",
            ))?;
        info!(
            "event=comment_submit module=news_service status=ok news_id={news_id} comment_id={comment_id}"
        );
        Ok(PageOutcome::redirect(routes::news_comments_anchor(news.id)))
    }

    /// Replaces the text of one comment, author only.
    pub fn edit_comment(
        &self,
        identity: Identity,
        comment_id: CommentId,
        text: &str,
        requested_path: &str,
    ) -> Result<PageOutcome<()>, NewsServiceError> {
        let comment = match self.comment_page(identity, comment_id, requested_path)? {
            PageOutcome::Ok(comment) => comment,
            PageOutcome::Redirect { location } => return Ok(PageOutcome::redirect(location)),
            PageOutcome::NotFound => return Ok(PageOutcome::NotFound),
            PageOutcome::Invalid { field, message } => {
                return Ok(PageOutcome::Invalid { field, message })
            }
        };
        if let Err(warning) =
            moderation::check_comment_text(text, &self.config.bad_words, &self.config.comment_warning)
        {
            warn!(
                "event=comment_edit module=news_service status=rejected reason=bad_words comment_id={comment_id}"
            );
            return Ok(PageOutcome::invalid(warning));
        }

        self.repo.update_comment_text(comment.id, text)?;
        info!("event=comment_edit module=news_service status=ok comment_id={comment_id}");
        Ok(PageOutcome::redirect(routes::news_comments_anchor(
            comment.news_id,
        )))
    }

    /// Deletes one comment, author only.
    pub fn delete_comment(
        &self,
        identity: Identity,
        comment_id: CommentId,
        requested_path: &str,
    ) -> Result<PageOutcome<()>, NewsServiceError> {
        let comment = match self.comment_page(identity, comment_id, requested_path)? {
            PageOutcome::Ok(comment) => comment,
            PageOutcome::Redirect { location } => return Ok(PageOutcome::redirect(location)),
            PageOutcome::NotFound => return Ok(PageOutcome::NotFound),
            PageOutcome::Invalid { field, message } => {
                return Ok(PageOutcome::Invalid { field, message })
            }
        };

        self.repo.delete_comment(comment.id)?;
        info!("event=comment_delete module=news_service status=ok comment_id={comment_id}");
        Ok(PageOutcome::redirect(routes::news_comments_anchor(
            comment.news_id,
        )))
    }
}
