//! Field extraction from generated article content.
//!
//! Every field is recovered by an ordered chain of pure `&str -> Option`
//! strategies; the first strategy that produces a value wins and the rest
//! are never run. A failed chain is a soft miss: the field stays unset and
//! is defaulted later. The one hard requirement is that both the
//! ingredient and the instruction chains succeed; anything less is "no
//! recipe".

mod lists;
mod markup;
mod meta;
mod sections;
mod title;

use log::debug;

use crate::normalize::RecipeDraft;

/// Run strategies in order, returning the first value produced.
pub(crate) fn first_success<T>(text: &str, strategies: &[fn(&str) -> Option<T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(text))
}

/// Extract a candidate recipe from article content.
///
/// Returns `None` when ingredients or instructions cannot be recovered,
/// discarding whatever other fields may have matched.
pub(crate) fn extract_fields(content: &str, keyword: &str) -> Option<RecipeDraft> {
    let ingredients = first_success(content, lists::INGREDIENT_STRATEGIES).unwrap_or_default();
    let instructions = first_success(content, lists::INSTRUCTION_STRATEGIES).unwrap_or_default();

    if ingredients.is_empty() || instructions.is_empty() {
        debug!("Insufficient recipe data for \"{keyword}\" (missing ingredients or instructions)");
        return None;
    }

    let title = first_success(content, title::STRATEGIES).unwrap_or_else(|| keyword.to_string());

    Some(RecipeDraft {
        title: Some(title),
        description: None,
        ingredients,
        instructions,
        prep_time: meta::prep_time(content),
        cook_time: meta::cook_time(content),
        yield_text: meta::servings(content),
        notes: sections::notes(content).unwrap_or_default(),
        nutrition_info: sections::nutrition(content).unwrap_or_default(),
    })
}
