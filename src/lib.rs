//! Extraction, normalization and rendering of recipe cards from generated
//! article content.
//!
//! The pipeline is pure and synchronous: raw generated text (or a
//! structured generation reply) goes in, a validated [`Recipe`] comes out,
//! and that record can be rendered any number of times into either output
//! variant. All I/O — generating the text, persisting configuration,
//! pushing the rendered card to a storage backend — belongs to the caller.

pub mod config;
pub mod error;
mod extract;
pub mod grouping;
pub mod indicators;
pub mod model;
pub mod normalize;
pub mod render;
pub mod reply;

use log::{debug, info};

pub use crate::config::{AttachPolicy, FormatConfig, TemplateSet};
pub use crate::error::RecipeError;
pub use crate::model::{
    IngredientGroup, InstructionGroup, InstructionStep, Nutrition, Provenance, Recipe,
    RenderedRecipe,
};
pub use crate::normalize::RecipeDraft;

/// Extract a recipe from generated article content.
///
/// Returns `None` when the content carries no recipe indicators, or when
/// extraction cannot recover both an ingredient and an instruction list.
/// Everything else is defaulted into a canonical record.
pub fn extract_recipe(content: &str, keyword: &str) -> Option<Recipe> {
    if !indicators::has_recipe_indicators(content) {
        debug!("No recipe indicators found in content for \"{keyword}\"");
        return None;
    }

    let draft = extract::extract_fields(content, keyword)?;
    let recipe = draft.finalize(keyword, Provenance::Extracted);
    info!(
        "Extracted recipe \"{}\" with {} ingredients and {} instructions",
        recipe.title,
        recipe.ingredients.len(),
        recipe.instructions.len()
    );
    Some(recipe)
}

/// Build a canonical recipe from a structured generation reply.
///
/// Never fails: unparseable replies degrade to a keyword-derived stub
/// record, distinguishable by its [`Provenance`].
pub fn parse_recipe_reply(reply: &str, keyword: &str) -> Recipe {
    reply::parse_recipe_reply(reply, keyword)
}

/// Render a canonical recipe into the variant the configuration selects.
pub fn render_recipe(recipe: &Recipe, format: &FormatConfig) -> RenderedRecipe {
    render::render_recipe(recipe, format)
}

/// True when the surrounding system should attach a recipe to an article
/// with this keyword.
pub fn should_attach_recipe(keyword: &str, policy: &AttachPolicy) -> bool {
    policy.matches(keyword)
}
