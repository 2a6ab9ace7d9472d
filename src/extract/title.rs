use std::sync::LazyLock;

use regex::Regex;

use super::markup;

/// `<h2>Recipe: Title</h2>` or `<h2>Title Recipe</h2>`; the optional prefix
/// and suffix mean this also matches the first plain heading as-is.
static PREFIXED_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h[23]>(?:Recipe:\s*)?(.+?)\s*(?:Recipe)?</h[23]>")
        .expect("Invalid title heading regex")
});

/// Any heading that mentions the word recipe.
static RECIPE_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h[23]>(.+?recipe.+?)</h[23]>").expect("Invalid recipe heading regex")
});

pub(crate) const STRATEGIES: &[fn(&str) -> Option<String>] = &[
    prefixed_heading,
    recipe_heading,
    heading_before_ingredients,
];

fn prefixed_heading(text: &str) -> Option<String> {
    capture_title(&PREFIXED_HEADING_REGEX, text)
}

fn recipe_heading(text: &str) -> Option<String> {
    capture_title(&RECIPE_HEADING_REGEX, text)
}

/// A heading whose following section, before the next heading, mentions
/// ingredients; such a heading usually names the dish.
fn heading_before_ingredients(text: &str) -> Option<String> {
    for (heading, end) in markup::headings(text) {
        let section = markup::section_body(text, end);
        if section.to_lowercase().contains("ingredients") {
            let title = heading.trim();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }
    None
}

fn capture_title(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)?
        .get(1)
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}
