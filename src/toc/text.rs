use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Visible text of a heading: whitespace runs collapsed to one space, then trimmed
pub fn normalize_text(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}

/// Derive a heading id from its text
///
/// The text is trimmed and lower-cased, and every internal whitespace run
/// becomes a single `-`. Nothing else is stripped, so punctuation survives.
pub fn derive_id(text: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(text.trim(), "-")
        .to_lowercase()
}
