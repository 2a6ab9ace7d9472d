use log::debug;

use super::markup;

/// Ingredient strategies: the bulleted list scoped to an "ingredients"
/// heading, then any bulleted list in the whole text.
pub(crate) const INGREDIENT_STRATEGIES: &[fn(&str) -> Option<Vec<String>>] =
    &[headed_unordered_list, any_unordered_list];

/// Instruction strategies: symmetric, scoped to an "instructions" heading
/// and an ordered list.
pub(crate) const INSTRUCTION_STRATEGIES: &[fn(&str) -> Option<Vec<String>>] =
    &[headed_ordered_list, any_ordered_list];

fn headed_unordered_list(text: &str) -> Option<Vec<String>> {
    let section = markup::section_after_heading(text, &["ingredients"])?;
    let items = markup::list_items(markup::first_unordered_list(section)?);
    if items.is_empty() {
        None
    } else {
        debug!("Found {} ingredients under the ingredients heading", items.len());
        Some(items)
    }
}

fn any_unordered_list(text: &str) -> Option<Vec<String>> {
    let items = markup::list_items(markup::first_unordered_list(text)?);
    if items.is_empty() {
        None
    } else {
        debug!("Falling back to the first bulleted list for ingredients");
        Some(items)
    }
}

fn headed_ordered_list(text: &str) -> Option<Vec<String>> {
    let section = markup::section_after_heading(text, &["instructions"])?;
    let items = markup::list_items(markup::first_ordered_list(section)?);
    if items.is_empty() {
        None
    } else {
        debug!("Found {} instructions under the instructions heading", items.len());
        Some(items)
    }
}

fn any_ordered_list(text: &str) -> Option<Vec<String>> {
    let items = markup::list_items(markup::first_ordered_list(text)?);
    if items.is_empty() {
        None
    } else {
        debug!("Falling back to the first numbered list for instructions");
        Some(items)
    }
}
