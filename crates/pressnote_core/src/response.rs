//! Outbound page outcome contract for the hosting layer.
//!
//! # Responsibility
//! - Carry the result of a page or mutation evaluation in a shape the
//!   external router can translate 1:1 into an HTTP response.
//!
//! # Invariants
//! - A validation failure re-renders with status 200; it is not a redirect
//!   and loses no submitted data.
//! - `NotFound` covers both resource-absent and non-owner denial; callers
//!   cannot tell the two apart.

use crate::moderation::FieldWarning;

/// HTTP-equivalent status for successful reads and validation re-renders.
pub const STATUS_OK: u16 = 200;
/// HTTP-equivalent status for redirects.
pub const STATUS_FOUND: u16 = 302;
/// HTTP-equivalent status for missing or hidden resources.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Result of evaluating one page access or mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome<T> {
    /// Render with the given data.
    Ok(T),
    /// Redirect to `location` (login, or a post-mutation success page).
    Redirect { location: String },
    /// Resource is absent, or the caller must not learn it exists.
    NotFound,
    /// Submission rejected; re-render with an inline field warning.
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl<T> PageOutcome<T> {
    /// Builds a redirect outcome.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect {
            location: location.into(),
        }
    }

    /// Builds a validation-failure outcome from a field warning.
    pub fn invalid(warning: FieldWarning) -> Self {
        Self::Invalid {
            field: warning.field,
            message: warning.message,
        }
    }

    /// HTTP-equivalent status code of this outcome.
    pub fn status(&self) -> u16 {
        match self {
            Self::Ok(_) | Self::Invalid { .. } => STATUS_OK,
            Self::Redirect { .. } => STATUS_FOUND,
            Self::NotFound => STATUS_NOT_FOUND,
        }
    }

    /// Redirect target, when this outcome is a redirect.
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Redirect { location } => Some(location),
            _ => None,
        }
    }

    /// Rendered payload, when this outcome is a successful read.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PageOutcome, STATUS_FOUND, STATUS_NOT_FOUND, STATUS_OK};
    use crate::moderation::FieldWarning;

    #[test]
    fn statuses_follow_the_external_contract() {
        assert_eq!(PageOutcome::Ok(()).status(), STATUS_OK);
        assert_eq!(PageOutcome::<()>::redirect("/auth/login/").status(), STATUS_FOUND);
        assert_eq!(PageOutcome::<()>::NotFound.status(), STATUS_NOT_FOUND);
    }

    #[test]
    fn validation_failure_re_renders_with_200() {
        let outcome = PageOutcome::<()>::invalid(FieldWarning {
            field: "text",
            message: "Не ругайтесь!".to_string(),
        });
        assert_eq!(outcome.status(), STATUS_OK);
        assert_eq!(outcome.location(), None);
    }
}
