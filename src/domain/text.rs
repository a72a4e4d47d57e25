//! Plain-text helpers over opaque markup content
//!
//! Entry content is stored as serialized rich-text markup. The core never
//! interprets it beyond dropping `<...>` spans to get at the plain text for
//! word counts, search and previews.

use regex::Regex;
use std::sync::OnceLock;

fn markup_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Strip markup spans and collapse whitespace runs into single spaces.
pub fn strip_markup(text: &str) -> String {
    let stripped = markup_regex().replace_all(text, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count words in markup content.
///
/// Tokenizes the stripped text on whitespace runs and counts non-empty
/// tokens. Empty or whitespace-only content counts as zero.
pub fn count_words(text: &str) -> usize {
    markup_regex()
        .replace_all(text, " ")
        .split_whitespace()
        .count()
}

/// Truncate text to at most `length` characters, appending an ellipsis.
pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let cut: String = text.chars().take(length).collect();
    format!("{}...", cut.trim_end())
}
