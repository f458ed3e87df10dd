//! Coercion of raw form field values.
//!
//! HTML forms submit everything as strings; these helpers turn them into
//! the typed values stored on venues, artists and shows.

use crate::error::CoreError;
use crate::types::DbId;

/// Split a comma-separated genre field into trimmed, non-empty tags.
///
/// Duplicate tags are dropped, keeping the first occurrence.
///
/// # Examples
///
/// ```
/// use fyyur_core::forms::split_genres;
/// assert_eq!(split_genres("Jazz, Blues,,Jazz"), vec!["Jazz", "Blues"]);
/// assert!(split_genres("").is_empty());
/// ```
pub fn split_genres(raw: &str) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !genres.iter().any(|g| g == tag) {
            genres.push(tag.to_string());
        }
    }
    genres
}

/// Interpret a checkbox value. Browsers send `y`/`on` when ticked and omit
/// the field otherwise.
pub fn checkbox(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("y" | "yes" | "on" | "true" | "1")
    )
}

/// Parse an id submitted as a form field.
pub fn parse_id(field: &str, raw: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("{field} must be a numeric id, got '{raw}'")))
}

/// Treat blank optional fields as absent.
pub fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
