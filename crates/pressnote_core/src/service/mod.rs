//! Use-case services invoked by the hosting router.
//!
//! # Responsibility
//! - Orchestrate policy, validation and repository calls into page-level
//!   operations.
//! - Keep the hosting layer decoupled from storage and policy details.

pub mod news_service;
pub mod note_service;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in epoch milliseconds.
pub(crate) fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
