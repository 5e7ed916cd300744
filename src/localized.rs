//! Localized field selection.
//!
//! Content records carry parallel fields per locale: a Georgian base field
//! (`name`, `title`, `body`) and an English variant (`englishName`,
//! `englishBody`). Selection lives here, in one pure function, so every
//! consumer shares the same fallback behavior: preferred locale first, then
//! the other locale, then a caller-supplied placeholder. Never a panic,
//! never the string "null".

use serde_json::Value;

use crate::locale::Language;

/// Picks between the two locale variants of a field.
///
/// Empty strings count as absent. Falls back to the other locale's value,
/// then to the placeholder.
pub fn pick<'a>(
    georgian: Option<&'a str>,
    english: Option<&'a str>,
    lang: Language,
    placeholder: &'a str,
) -> &'a str {
    let georgian = georgian.filter(|s| !s.trim().is_empty());
    let english = english.filter(|s| !s.trim().is_empty());
    let (preferred, fallback) = match lang {
        Language::English => (english, georgian),
        Language::Georgian => (georgian, english),
    };
    preferred.or(fallback).unwrap_or(placeholder)
}

/// Derives the English variant field name from a base field name:
/// `name` -> `englishName`, `body` -> `englishBody`.
pub fn english_variant(base_field: &str) -> String {
    let mut chars = base_field.chars();
    match chars.next() {
        Some(first) => format!("english{}{}", first.to_uppercase(), chars.as_str()),
        None => "english".to_string(),
    }
}

/// Selects the localized variant of `base_field` from an opaque JSON record.
///
/// Reads `base_field` for Georgian and the `english*` variant for English,
/// with the same fallback chain as [`pick`].
pub fn select_localized(
    record: &Value,
    base_field: &str,
    lang: Language,
    placeholder: &str,
) -> String {
    let georgian = record.get(base_field).and_then(Value::as_str);
    let english = record
        .get(english_variant(base_field))
        .and_then(Value::as_str);
    pick(georgian, english, lang, placeholder).to_string()
}
