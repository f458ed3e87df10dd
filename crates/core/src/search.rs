//! Name search helpers.
//!
//! Search is a case-insensitive substring match on the `name` column,
//! executed as `name ILIKE $1 ESCAPE '\'` with the pattern built here.

/// Escape character used in every LIKE pattern built by this module.
pub const LIKE_ESCAPE: char = '\\';

/// Escape LIKE metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Build a `%term%` pattern for a substring match.
///
/// An empty term yields `%%`, which matches every name.
///
/// # Examples
///
/// ```
/// use fyyur_core::search::contains_pattern;
/// assert_eq!(contains_pattern("Fill"), "%Fill%");
/// assert_eq!(contains_pattern(""), "%%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
