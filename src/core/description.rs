use std::sync::OnceLock;

use regex::Regex;

use crate::domain::model::FlavorText;

static LAYOUT_CHARS: OnceLock<Regex> = OnceLock::new();

/// Picks the first English description and flattens embedded layout
/// characters (tab, newline, carriage return, form feed) to spaces. Each
/// character is replaced on its own, so the text length never changes and
/// no leading or trailing whitespace is trimmed. No English entry means an
/// empty description, not an error.
pub fn english_description(entries: &[FlavorText]) -> String {
    let raw = entries
        .iter()
        .find(|entry| entry.language == "en")
        .map(|entry| entry.text.as_str())
        .unwrap_or("");

    let pattern = LAYOUT_CHARS.get_or_init(|| Regex::new(r"[\t\n\r\x0C]").unwrap());
    pattern.replace_all(raw, " ").into_owned()
}
