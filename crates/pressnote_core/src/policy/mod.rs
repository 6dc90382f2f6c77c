//! Access-control and content-visibility policy.
//!
//! # Responsibility
//! - Decide, per resource kind, who may view and who may mutate.
//! - Map denied access attempts to the correct user-facing outcome.
//!
//! # Invariants
//! - Every decision is a pure function of identity and resource state.
//! - A non-owner denial is indistinguishable from a missing resource.

mod access;

pub use access::{
    authorize_mutation, form_visible, list_visible, require_login, AccessOutcome, AccessPolicy,
    CommentPolicy, NotePolicy,
};
