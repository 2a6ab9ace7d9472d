//! Recovery of recipe data from structured generation replies.

use log::{debug, warn};

use crate::error::RecipeError;
use crate::model::{Provenance, Recipe};
use crate::normalize::RecipeDraft;

/// Parse a generation reply into a canonical recipe.
///
/// Replies are asked for as a JSON object but routinely arrive wrapped in
/// prose, fenced, or truncated. Three tiers run in order: a strict parse,
/// a best-effort parse of the outermost brace-delimited span, and finally
/// a keyword-derived stub record. The result is always usable; the stub
/// tier is visible as [`Provenance::Fallback`].
pub fn parse_recipe_reply(reply: &str, keyword: &str) -> Recipe {
    match parse_draft(reply) {
        Ok(draft) => draft.finalize(keyword, Provenance::AiStructured),
        Err(error) => {
            warn!("Could not parse recipe reply for \"{keyword}\" ({error}); using stub recipe");
            RecipeDraft::stub(keyword).finalize(keyword, Provenance::Fallback)
        }
    }
}

fn parse_draft(reply: &str) -> Result<RecipeDraft, RecipeError> {
    match serde_json::from_str(reply) {
        Ok(draft) => Ok(draft),
        Err(strict_error) => {
            debug!("Strict reply parse failed ({strict_error}); trying embedded object");
            let span = embedded_object(reply).ok_or(RecipeError::ReplyParse(strict_error))?;
            Ok(serde_json::from_str(span)?)
        }
    }
}

/// The outermost `{ ... }` span of a reply that wraps its JSON in prose.
fn embedded_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_json_reply() {
        let reply = r#"{
            "title": "Lemon Pasta",
            "description": "Bright and quick.",
            "ingredients": ["200g pasta", "1 lemon"],
            "instructions": ["Boil pasta.", "Toss with lemon."],
            "prep_time": "10 mins",
            "cook_time": "12 mins",
            "yield": "2 servings",
            "notes": ["Salt the water well"],
            "nutrition_info": {
                "Calories": "450 kcal",
                "Protein": "14g",
                "Carbs": "70g",
                "Fat": "12g"
            }
        }"#;

        let recipe = parse_recipe_reply(reply, "lemon pasta");
        assert_eq!(recipe.title, "Lemon Pasta");
        assert_eq!(recipe.provenance, Provenance::AiStructured);
        assert_eq!(recipe.prep_time_minutes, 10);
        assert_eq!(recipe.cook_time_minutes, 12);
        assert_eq!(recipe.total_time_minutes, 22);
        assert_eq!(recipe.yield_servings, 2);
        assert_eq!(recipe.nutrition.calories, "450 kcal");
    }

    #[test]
    fn test_json_embedded_in_prose() {
        let reply = "Sure! Here is your recipe:\n\
            {\"title\": \"Toast\", \"ingredients\": [\"bread\"], \"instructions\": [\"Toast it.\"]}\n\
            Enjoy!";

        let recipe = parse_recipe_reply(reply, "toast");
        assert_eq!(recipe.title, "Toast");
        assert_eq!(recipe.provenance, Provenance::AiStructured);
        // unsupplied fields are defaulted
        assert_eq!(recipe.prep_time_minutes, 30);
        assert_eq!(recipe.yield_servings, 4);
    }

    #[test]
    fn test_unparseable_reply_degrades_to_stub() {
        let recipe = parse_recipe_reply("I can't help with that.", "banana bread");
        assert_eq!(recipe.title, "Banana bread Recipe");
        assert_eq!(recipe.provenance, Provenance::Fallback);
        assert!(!recipe.ingredients.is_empty());
        assert!(!recipe.instructions.is_empty());
        assert_eq!(recipe.notes, vec!["Recipe generated as fallback"]);
    }

    #[test]
    fn test_broken_embedded_json_degrades_to_stub() {
        let reply = "Here you go: { definitely not json }";
        let recipe = parse_recipe_reply(reply, "soup");
        assert_eq!(recipe.provenance, Provenance::Fallback);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let reply = r#"{
            "title": "Stew",
            "ingredients": ["beef"],
            "instructions": ["Simmer."],
            "cuisine": ["International"],
            "difficulty": "Medium"
        }"#;
        let recipe = parse_recipe_reply(reply, "stew");
        assert_eq!(recipe.title, "Stew");
        assert_eq!(recipe.provenance, Provenance::AiStructured);
    }

    #[test]
    fn test_embedded_object_span() {
        assert_eq!(embedded_object("x { \"a\": 1 } y"), Some("{ \"a\": 1 }"));
        assert_eq!(embedded_object("no braces"), None);
        assert_eq!(embedded_object("} reversed {"), None);
    }
}
