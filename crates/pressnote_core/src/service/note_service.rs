//! Notes use-case service.
//!
//! # Responsibility
//! - Serve the owner-scoped note list and note pages.
//! - Run note create/update/delete through authentication, ownership and
//!   slug resolution.
//!
//! # Invariants
//! - Nothing is persisted when slug resolution or authorization fails.
//! - A non-owner (and an unknown slug) observes `NotFound`; only anonymous
//!   callers are redirected to login.
//! - Successful mutations redirect to the configured success page.

use crate::config::SiteConfig;
use crate::model::identity::Identity;
use crate::model::note::{NewNote, Note, NoteInput};
use crate::policy::{self, AccessOutcome, NotePolicy};
use crate::repo::{NoteRepository, RepoError};
use crate::response::PageOutcome;
use crate::routes;
use crate::slug;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TITLE_REQUIRED_WARNING: &str = "Обязательное поле.";

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent note state: {details}")
            }
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
    config: SiteConfig,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository and site constants.
    pub fn new(repo: R, config: SiteConfig) -> Self {
        Self { repo, config }
    }

    /// Note list: authentication required, caller's own notes only.
    pub fn list(
        &self,
        identity: Identity,
        requested_path: &str,
    ) -> Result<PageOutcome<Vec<Note>>, NoteServiceError> {
        let Identity::Authenticated(owner_id) = identity else {
            return Ok(PageOutcome::redirect(routes::login_redirect(
                &self.config.login_path,
                requested_path,
            )));
        };
        let notes = policy::list_visible(
            &NotePolicy,
            identity,
            self.repo.list_notes_by_owner(owner_id)?,
        );
        Ok(PageOutcome::Ok(notes))
    }

    /// Note creation page: authentication required, no owner check.
    pub fn add_page(&self, identity: Identity, requested_path: &str) -> PageOutcome<()> {
        match policy::require_login(identity, requested_path, &self.config.login_path) {
            Some(location) => PageOutcome::redirect(location),
            None => PageOutcome::Ok(()),
        }
    }

    /// Detail/edit/delete page access for one note, owner only.
    pub fn note_page(
        &self,
        identity: Identity,
        note_slug: &str,
        requested_path: &str,
    ) -> Result<PageOutcome<Note>, NoteServiceError> {
        if let Some(location) =
            policy::require_login(identity, requested_path, &self.config.login_path)
        {
            return Ok(PageOutcome::redirect(location));
        }
        let Some(note) = self.repo.get_note_by_slug(note_slug)? else {
            return Ok(PageOutcome::NotFound);
        };
        match policy::authorize_mutation(
            &NotePolicy,
            identity,
            &note,
            requested_path,
            &self.config.login_path,
        ) {
            AccessOutcome::Allow => Ok(PageOutcome::Ok(note)),
            AccessOutcome::RedirectToLogin { location } => Ok(PageOutcome::redirect(location)),
            AccessOutcome::NotFound => Ok(PageOutcome::NotFound),
        }
    }

    /// Creates one note from a submitted form payload.
    pub fn create(
        &self,
        identity: Identity,
        input: &NoteInput,
        requested_path: &str,
    ) -> Result<PageOutcome<()>, NoteServiceError> {
        let Identity::Authenticated(owner_id) = identity else {
            warn!("event=note_create module=note_service status=denied reason=anonymous");
            return Ok(PageOutcome::redirect(routes::login_redirect(
                &self.config.login_path,
                requested_path,
            )));
        };
        let title = input.title.trim();
        if title.is_empty() {
            return Ok(PageOutcome::Invalid {
                field: "title",
                message: TITLE_REQUIRED_WARNING.to_string(),
            });
        }

        let resolved = match slug::resolve_slug(
            title,
            input.slug.as_deref(),
            |candidate| self.repo.slug_taken(candidate, None),
            &self.config.slug_warning_suffix,
        )? {
            Ok(resolved) => resolved,
            Err(warning) => {
                warn!(
                    "event=note_create module=note_service status=rejected reason=slug_taken"
                );
                return Ok(PageOutcome::invalid(warning));
            }
        };

        let draft = NewNote {
            owner_id,
            title: title.to_string(),
            text: input.text.clone(),
            slug: resolved,
        };
        match self.repo.create_note(&draft) {
            Ok(note_id) => {
                self.repo.get_note_by_slug(&draft.slug)?.ok_or(
                    NoteServiceError::InconsistentState("created note not found in read-back"),
                )?;
                info!("event=note_create module=note_service status=ok note_id={note_id}");
                Ok(PageOutcome::redirect(self.config.notes_success_path.clone()))
            }
            // Lost the uniqueness race after the pre-check; same observable
            // failure as the pre-check path.
            Err(RepoError::SlugTaken(taken_slug)) => Ok(PageOutcome::invalid(
                slug::collision_warning(&taken_slug, &self.config.slug_warning_suffix),
            )),
            Err(other) => Err(other.into()),
        }
    }

    /// Replaces title, text and slug of one note, owner only.
    pub fn update(
        &self,
        identity: Identity,
        note_slug: &str,
        input: &NoteInput,
        requested_path: &str,
    ) -> Result<PageOutcome<()>, NoteServiceError> {
        let note = match self.note_page(identity, note_slug, requested_path)? {
            PageOutcome::Ok(note) => note,
            PageOutcome::Redirect { location } => return Ok(PageOutcome::redirect(location)),
            PageOutcome::NotFound => return Ok(PageOutcome::NotFound),
            PageOutcome::Invalid { field, message } => {
                return Ok(PageOutcome::Invalid { field, message })
            }
        };
        let title = input.title.trim();
        if title.is_empty() {
            return Ok(PageOutcome::Invalid {
                field: "title",
                message: TITLE_REQUIRED_WARNING.to_string(),
            });
        }

        let resolved = match slug::resolve_slug(
            title,
            input.slug.as_deref(),
            |candidate| self.repo.slug_taken(candidate, Some(note.id)),
            &self.config.slug_warning_suffix,
        )? {
            Ok(resolved) => resolved,
            Err(warning) => {
                warn!(
                    "event=note_update module=note_service status=rejected reason=slug_taken note_id={}",
                    note.id
                );
                return Ok(PageOutcome::invalid(warning));
            }
        };

        match self
            .repo
            .update_note(note.id, title, input.text.as_str(), &resolved)
        {
            Ok(()) => {
                info!(
                    "event=note_update module=note_service status=ok note_id={}",
                    note.id
                );
                Ok(PageOutcome::redirect(self.config.notes_success_path.clone()))
            }
            Err(RepoError::SlugTaken(taken_slug)) => Ok(PageOutcome::invalid(
                slug::collision_warning(&taken_slug, &self.config.slug_warning_suffix),
            )),
            Err(other) => Err(other.into()),
        }
    }

    /// Deletes one note, owner only.
    pub fn delete(
        &self,
        identity: Identity,
        note_slug: &str,
        requested_path: &str,
    ) -> Result<PageOutcome<()>, NoteServiceError> {
        let note = match self.note_page(identity, note_slug, requested_path)? {
            PageOutcome::Ok(note) => note,
            PageOutcome::Redirect { location } => return Ok(PageOutcome::redirect(location)),
            PageOutcome::NotFound => return Ok(PageOutcome::NotFound),
            PageOutcome::Invalid { field, message } => {
                return Ok(PageOutcome::Invalid { field, message })
            }
        };

        self.repo.delete_note(note.id)?;
        info!(
            "event=note_delete module=note_service status=ok note_id={}",
            note.id
        );
        Ok(PageOutcome::redirect(self.config.notes_success_path.clone()))
    }
}
