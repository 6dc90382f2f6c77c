//! Ownership checks and the redirect/denial policy.
//!
//! # Responsibility
//! - `AccessPolicy`: per-resource-kind ownership and visibility rules.
//! - `authorize_mutation`: map an access attempt to allow/redirect/not-found.
//!
//! # Invariants
//! - Anonymous identities can never modify anything.
//! - An authenticated non-owner receives `NotFound`, never a distinct
//!   "forbidden" answer. The resource's existence must not leak.

use crate::model::identity::Identity;
use crate::model::news::Comment;
use crate::model::note::Note;
use crate::routes;

/// Decision for a mutation or owner-scoped page access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Identity owns the resource; proceed.
    Allow,
    /// Identity is anonymous; send to login, then back to `next`.
    RedirectToLogin {
        /// Full redirect target, `<login_path>?next=<requested_path>`.
        location: String,
    },
    /// Identity is authenticated but not the owner.
    NotFound,
}

/// Per-resource-kind access rules.
///
/// One implementation exists per resource; the routing layer calls the
/// trait, never the concrete type.
pub trait AccessPolicy {
    type Resource;

    /// Returns whether `identity` may edit or delete `resource`.
    fn can_modify(&self, identity: Identity, resource: &Self::Resource) -> bool;

    /// Returns whether `resource` appears in listings for `identity`.
    fn visible_to(&self, identity: Identity, resource: &Self::Resource) -> bool;
}

/// Access rules for news comments: publicly readable, author-mutable.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentPolicy;

impl AccessPolicy for CommentPolicy {
    type Resource = Comment;

    fn can_modify(&self, identity: Identity, comment: &Comment) -> bool {
        identity.user_id() == Some(comment.author_id)
    }

    fn visible_to(&self, _identity: Identity, _comment: &Comment) -> bool {
        true
    }
}

/// Access rules for notes: private to their owner in every respect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotePolicy;

impl AccessPolicy for NotePolicy {
    type Resource = Note;

    fn can_modify(&self, identity: Identity, note: &Note) -> bool {
        identity.user_id() == Some(note.owner_id)
    }

    fn visible_to(&self, identity: Identity, note: &Note) -> bool {
        self.can_modify(identity, note)
    }
}

/// Decides the outcome of a mutation attempt against one resource.
pub fn authorize_mutation<P: AccessPolicy>(
    policy: &P,
    identity: Identity,
    resource: &P::Resource,
    requested_path: &str,
    login_path: &str,
) -> AccessOutcome {
    if !identity.is_authenticated() {
        return AccessOutcome::RedirectToLogin {
            location: routes::login_redirect(login_path, requested_path),
        };
    }

    if policy.can_modify(identity, resource) {
        AccessOutcome::Allow
    } else {
        AccessOutcome::NotFound
    }
}

/// Gate for pages that merely require authentication, with no owner check.
///
/// Returns the login redirect target for anonymous callers, `None` otherwise.
pub fn require_login(identity: Identity, requested_path: &str, login_path: &str) -> Option<String> {
    if identity.is_authenticated() {
        None
    } else {
        Some(routes::login_redirect(login_path, requested_path))
    }
}

/// Filters a collection down to the items visible to `identity`.
pub fn list_visible<P: AccessPolicy>(
    policy: &P,
    identity: Identity,
    items: Vec<P::Resource>,
) -> Vec<P::Resource> {
    items
        .into_iter()
        .filter(|item| policy.visible_to(identity, item))
        .collect()
}

/// Returns whether the comment submission form is rendered for `identity`.
pub fn form_visible(identity: Identity) -> bool {
    identity.is_authenticated()
}
