//! Request identity model.
//!
//! # Responsibility
//! - Represent the caller of every policy decision: anonymous or a specific
//!   authenticated user.
//!
//! # Invariants
//! - Identity is immutable for the lifetime of one request evaluation.

use serde::{Deserialize, Serialize};

/// Stable identifier for an authenticated user.
pub type UserId = i64;

/// The caller of an operation.
///
/// Authentication itself (sessions, cookies) happens upstream; this crate
/// only consumes the resolved result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    /// No authenticated user is attached to the request.
    Anonymous,
    /// Request is made on behalf of the given user.
    Authenticated(UserId),
}

impl Identity {
    /// Returns the authenticated user id, if any.
    pub fn user_id(self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user_id) => Some(user_id),
        }
    }

    /// Returns whether this identity carries an authenticated user.
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
