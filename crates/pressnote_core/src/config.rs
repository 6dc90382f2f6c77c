//! Host-supplied site constants.
//!
//! # Responsibility
//! - Carry the tunables the hosting layer injects into the policy core:
//!   home-page cap, banned words, warning texts, login/success paths.
//!
//! # Invariants
//! - Defaults match the reference deployment, so an empty host config is a
//!   fully working configuration.

use crate::routes;
use serde::{Deserialize, Serialize};

const DEFAULT_NEWS_COUNT_ON_HOME_PAGE: u32 = 10;
const DEFAULT_COMMENT_WARNING: &str = "Не ругайтесь!";
const DEFAULT_SLUG_WARNING_SUFFIX: &str =
    " - такой slug уже существует, придумайте уникальное значение!";
const DEFAULT_LOGIN_PATH: &str = "/auth/login/";

/// Site-wide constants consumed by services and validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Maximum news items rendered on the home listing.
    pub news_count_on_home_page: u32,
    /// Forbidden substrings for comment text, matched case-sensitively.
    pub bad_words: Vec<String>,
    /// Warning shown when a comment contains a banned word.
    pub comment_warning: String,
    /// Suffix appended to the colliding slug value in the slug warning.
    pub slug_warning_suffix: String,
    /// Login page path used for anonymous-access redirects.
    pub login_path: String,
    /// Destination after a successful note mutation.
    pub notes_success_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            news_count_on_home_page: DEFAULT_NEWS_COUNT_ON_HOME_PAGE,
            bad_words: vec!["редиска".to_string(), "негодяй".to_string()],
            comment_warning: DEFAULT_COMMENT_WARNING.to_string(),
            slug_warning_suffix: DEFAULT_SLUG_WARNING_SUFFIX.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            notes_success_path: routes::notes_success(),
        }
    }
}
