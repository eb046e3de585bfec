//! Markup stripping and whitespace normalization for raw definition text.

use std::sync::OnceLock;

use regex::Regex;

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static SPACE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex pattern"))
}

fn space_regex() -> &'static Regex {
    SPACE_PATTERN.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex pattern"))
}

/// Strip `<tag>`-style markup spans and collapse whitespace runs to single
/// spaces, trimming both ends. Empty input yields an empty string.
pub fn clean(text: &str) -> String {
    let stripped = tag_regex().replace_all(text, " ");
    let collapsed = space_regex().replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
