//! Domain records shared by the news and notes properties.
//!
//! # Responsibility
//! - Define canonical data structures used by policy and service logic.
//! - Keep one identity shape (`Identity`) for every request evaluation.
//!
//! # Invariants
//! - Every persisted record is identified by a stable `i64` rowid.
//! - Ownership fields (`author_id`, `owner_id`) are never mutated after
//!   creation.

pub mod identity;
pub mod news;
pub mod note;
