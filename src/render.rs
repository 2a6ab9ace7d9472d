//! Rendering canonical records into the configured output format.

use log::debug;

use crate::config::{FormatConfig, TemplateSet};
use crate::grouping::group_instructions;
use crate::model::{IngredientGroup, Recipe, RenderedRecipe};

/// Render a canonical record into exactly one output variant.
///
/// Both variants read the record's original lists directly, so rendering
/// twice with the same configuration is byte-identical and switching
/// variants never requires re-parsing the source text.
pub fn render_recipe(recipe: &Recipe, format: &FormatConfig) -> RenderedRecipe {
    if format.use_fixed_template {
        debug!("Rendering \"{}\" as structured groups", recipe.title);
        RenderedRecipe::StructuredGroups {
            // ingredients are never sub-grouped; one unnamed group wraps all
            ingredient_groups: vec![IngredientGroup {
                name: String::new(),
                entries: recipe.ingredients.clone(),
            }],
            instruction_groups: group_instructions(&recipe.instructions),
        }
    } else {
        let templates = if format.custom_formatting_enabled {
            format.templates.clone()
        } else {
            TemplateSet::default()
        };
        debug!("Rendering \"{}\" as flat text", recipe.title);
        RenderedRecipe::FlatText {
            body: flat_body(recipe, &templates),
        }
    }
}

fn flat_body(recipe: &Recipe, templates: &TemplateSet) -> String {
    let ingredient_block = recipe
        .ingredients
        .iter()
        .map(|ingredient| templates.ingredient_item_format.replace("{ingredient}", ingredient))
        .collect::<Vec<_>>()
        .join("\n");

    let instruction_block = recipe
        .instructions
        .iter()
        .enumerate()
        .map(|(index, instruction)| {
            templates
                .instruction_item_format
                .replace("{number}", &(index + 1).to_string())
                .replace("{instruction}", instruction)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    templates
        .flat_template
        .replace("{ingredients}", &ingredient_block)
        .replace("{instructions}", &instruction_block)
}
