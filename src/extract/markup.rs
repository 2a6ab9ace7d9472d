//! Shared helpers for scanning HTML-ish generated text.
//!
//! Generated content is not well-formed HTML, so everything here works on
//! the raw string with regular expressions rather than a DOM. Heading
//! scoping is done in two phases: find a heading, then slice the text up to
//! the next heading and match inside that slice.

use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::Regex;

/// Any h2/h3 heading, attributes allowed, capturing the inner text.
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h[23][^>]*>(.*?)</h[23]>").expect("Invalid heading regex"));

static HEADING_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h[23][^>]*>").expect("Invalid heading open regex"));

static UNORDERED_LIST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<ul>(.*?)</ul>").expect("Invalid ul regex"));

static ORDERED_LIST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<ol>(.*?)</ol>").expect("Invalid ol regex"));

/// First `<ul>` or `<p>` block; notes and nutrition sections come in either.
static TEXT_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<(?:ul|p)>(.*?)</(?:ul|p)>").expect("Invalid block regex"));

static LIST_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li>(.*?)</li>").expect("Invalid list item regex"));

/// Regex to strip residual tags from extracted fragments.
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

/// Iterate h2/h3 headings as (inner text, offset past the closing tag).
pub(crate) fn headings<'a>(text: &'a str) -> impl Iterator<Item = (&'a str, usize)> + 'a {
    HEADING_REGEX.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some((inner.as_str(), whole.end()))
    })
}

/// The text from `from` up to the next heading, or to the end of input.
pub(crate) fn section_body(text: &str, from: usize) -> &str {
    match HEADING_OPEN_REGEX.find(&text[from..]) {
        Some(next) => &text[from..from + next.start()],
        None => &text[from..],
    }
}

/// The section following the first heading whose text contains any of the
/// given needles, case-insensitively.
pub(crate) fn section_after_heading<'a>(text: &'a str, needles: &[&str]) -> Option<&'a str> {
    for (heading, end) in headings(text) {
        let heading = heading.to_lowercase();
        if needles.iter().any(|needle| heading.contains(needle)) {
            return Some(section_body(text, end));
        }
    }
    None
}

pub(crate) fn first_unordered_list(text: &str) -> Option<&str> {
    first_capture(&UNORDERED_LIST_REGEX, text)
}

pub(crate) fn first_ordered_list(text: &str) -> Option<&str> {
    first_capture(&ORDERED_LIST_REGEX, text)
}

pub(crate) fn first_text_block(text: &str) -> Option<&str> {
    first_capture(&TEXT_BLOCK_REGEX, text)
}

fn first_capture<'a>(regex: &Regex, text: &'a str) -> Option<&'a str> {
    regex.captures(text)?.get(1).map(|m| m.as_str())
}

/// Extract `<li>` item texts from a list fragment, cleaned of markup.
pub(crate) fn list_items(fragment: &str) -> Vec<String> {
    LIST_ITEM_REGEX
        .captures_iter(fragment)
        .filter_map(|caps| caps.get(1))
        .map(|m| clean_fragment(m.as_str()))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Strip residual tags, decode HTML entities and trim surrounding space.
pub(crate) fn clean_fragment(fragment: &str) -> String {
    let stripped = TAG_REGEX.replace_all(fragment, "");
    decode_html_entities(stripped.as_ref()).trim().to_string()
}
