//! Banned-word moderation for comment text.
//!
//! # Responsibility
//! - Reject comment text containing any forbidden substring before it ever
//!   reaches persistence.
//!
//! # Invariants
//! - Matching is case-sensitive, substring-based, and not tokenized: a
//!   banned word inside a larger word also fails.
//! - Validation failure is a field-level warning, never a transport error.

use std::fmt::{Display, Formatter};

/// A validation warning bound to a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    /// Form field the warning attaches to.
    pub field: &'static str,
    /// User-facing warning text.
    pub message: String,
}

impl Display for FieldWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Checks comment text against the banned-word set.
///
/// Returns a warning bound to the `text` field when any banned substring
/// occurs anywhere in `text`.
pub fn check_comment_text(
    text: &str,
    bad_words: &[String],
    warning: &str,
) -> Result<(), FieldWarning> {
    for word in bad_words {
        if !word.is_empty() && text.contains(word.as_str()) {
            return Err(FieldWarning {
                field: "text",
                message: warning.to_string(),
            });
        }
    }
    Ok(())
}
