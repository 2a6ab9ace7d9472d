//! Heading-scoped extraction of the optional notes and nutrition sections.

use std::sync::LazyLock;

use regex::Regex;

use super::markup;
use crate::normalize::NutritionDraft;

static CALORIES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)calories:?\s*([0-9]+(?:\.[0-9]+)?\s*(?:kcal)?)").expect("Invalid calories regex")
});

static PROTEIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)protein:?\s*([0-9]+(?:\.[0-9]+)?\s*g)").expect("Invalid protein regex")
});

static CARBS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)carbs?:?\s*([0-9]+(?:\.[0-9]+)?\s*g)").expect("Invalid carbs regex")
});

static FAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)fat:?\s*([0-9]+(?:\.[0-9]+)?\s*g)").expect("Invalid fat regex")
});

/// Notes from a "notes" or "tips" section: one note per list item when the
/// section holds a list, otherwise the whole paragraph as a single note.
pub(crate) fn notes(text: &str) -> Option<Vec<String>> {
    let section = markup::section_after_heading(text, &["notes", "tips"])?;
    let block = markup::first_text_block(section)?;

    if block.contains("<li>") {
        let items = markup::list_items(block);
        if items.is_empty() {
            return None;
        }
        return Some(items);
    }

    let note = markup::clean_fragment(block);
    if note.is_empty() {
        None
    } else {
        Some(vec![note])
    }
}

/// Nutrition facts from a "nutrition" section. The captured block is
/// flattened to plain text, then each nutrient is sub-matched on its own;
/// any subset may be present. Calorie values missing a unit get " kcal".
pub(crate) fn nutrition(text: &str) -> Option<NutritionDraft> {
    let section = markup::section_after_heading(text, &["nutrition"])?;
    let flat = markup::clean_fragment(markup::first_text_block(section)?);

    let calories = capture(&CALORIES_REGEX, &flat).map(|value| {
        if value.to_lowercase().contains("kcal") {
            value
        } else {
            format!("{value} kcal")
        }
    });

    Some(NutritionDraft {
        calories,
        protein: capture(&PROTEIN_REGEX, &flat),
        carbs: capture(&CARBS_REGEX, &flat),
        fat: capture(&FAT_REGEX, &flat),
    })
}

fn capture(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)?
        .get(1)
        .map(|m| m.as_str().trim().to_string())
}
