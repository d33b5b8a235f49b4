//! Free-text name normalization.
//!
//! The name of a new entry and the name in a summary query go through
//! [`parse_handwriting`] before they reach the catalog. Required-item names do not.

use itertools::Itertools;

/// Normalizes a handwritten name into its canonical catalog form.
///
/// Hyphens and underscores become spaces, anything that is neither alphabetic nor a
/// space is dropped, each word is title-cased and runs of spaces collapse to one.
/// Returns `None` when nothing is left.
///
/// ```
/// use kondate::normalize::parse_handwriting;
///
/// assert_eq!(parse_handwriting("Riz@z RISO00tto!").as_deref(), Some("Rizz Risotto"));
/// assert_eq!(parse_handwriting("meatball_-sub").as_deref(), Some("Meatball Sub"));
/// assert_eq!(parse_handwriting("42!"), None);
/// ```
pub fn parse_handwriting(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_alphabetic() || *c == ' ')
        .collect();

    let normalized = title_case(&cleaned).split_whitespace().join(" ");
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Upper-cases a letter that follows an uncased character and lower-cases the rest.
///
/// Word starts use the full uppercase mapping, not the Unicode titlecase one, so a
/// digraph such as `ǆ` becomes `Ǆ` rather than `ǅ` and `ß` expands to `SS`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}
