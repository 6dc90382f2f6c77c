//! Slug derivation and resolution for notes.
//!
//! # Responsibility
//! - Derive a URL-safe ASCII slug from a note title via deterministic
//!   Cyrillic transliteration.
//! - Resolve the submitted slug field: verbatim when supplied, derived when
//!   empty, rejected with a fixed-suffix warning on collision.
//!
//! # Invariants
//! - `slugify` output matches `[a-z0-9]+(-[a-z0-9]+)*` (or is empty) and is
//!   at most `SLUG_MAX_CHARS` characters.
//! - The collision warning message is the colliding slug value concatenated
//!   with the configured suffix, nothing more.

use crate::moderation::FieldWarning;
use once_cell::sync::Lazy;
use regex::Regex;

const SLUG_MAX_CHARS: usize = 100;

static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug charset regex"));

/// Transliterates one lowercase Cyrillic character to its ASCII form.
///
/// Returns `None` for characters outside the Russian alphabet, which are
/// passed through unchanged and later collapsed by the slug charset rule.
fn translit_char(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(mapped)
}

/// Replaces Cyrillic characters with their ASCII transliteration.
pub fn translify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match translit_char(ch) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(ch),
        }
    }
    out
}

/// Derives a slug from a title.
///
/// Lower-cases, transliterates, collapses every non-`[a-z0-9]` run into a
/// single `-`, trims leading/trailing `-`, and caps the length.
pub fn slugify(title: &str) -> String {
    let transliterated = translify(&title.to_lowercase());
    let collapsed = NON_SLUG_RE.replace_all(&transliterated, "-");
    let capped: String = collapsed
        .trim_matches('-')
        .chars()
        .take(SLUG_MAX_CHARS)
        .collect();
    // The cap can land right on a separator; a slug never ends with `-`.
    capped.trim_end_matches('-').to_string()
}

/// Returns the slug value a submission asks for: the requested slug
/// verbatim when non-empty, otherwise one derived from the title.
pub fn candidate_slug(title: &str, requested: Option<&str>) -> String {
    match requested {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => slugify(title),
    }
}

/// Builds the uniqueness-collision warning for the `slug` field.
pub fn collision_warning(slug: &str, warning_suffix: &str) -> FieldWarning {
    FieldWarning {
        field: "slug",
        message: format!("{slug}{warning_suffix}"),
    }
}

/// Resolves the slug for a note submission.
///
/// `slug_taken` reports whether a slug already exists system-wide; a derived
/// slug gets the same uniqueness check as an explicit one. The outer result
/// propagates failures of the check itself, the inner one carries the
/// collision warning.
pub fn resolve_slug<E>(
    title: &str,
    requested: Option<&str>,
    slug_taken: impl FnOnce(&str) -> Result<bool, E>,
    warning_suffix: &str,
) -> Result<Result<String, FieldWarning>, E> {
    let candidate = candidate_slug(title, requested);
    if slug_taken(&candidate)? {
        return Ok(Err(collision_warning(&candidate, warning_suffix)));
    }
    Ok(Ok(candidate))
}
