use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::RecipeError;

/// Output templates with their documented placeholders. Absent or unknown
/// placeholders are no-ops, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateSet {
    /// Whole-card template; `{ingredients}` and `{instructions}` expand to
    /// the rendered blocks
    #[serde(default = "default_flat_template")]
    pub flat_template: String,
    /// Per-ingredient line; `{ingredient}` expands to the entry text
    #[serde(default = "default_ingredient_item_format")]
    pub ingredient_item_format: String,
    /// Per-instruction line; `{number}` is the 1-based position and
    /// `{instruction}` the entry text
    #[serde(default = "default_instruction_item_format")]
    pub instruction_item_format: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        TemplateSet {
            flat_template: default_flat_template(),
            ingredient_item_format: default_ingredient_item_format(),
            instruction_item_format: default_instruction_item_format(),
        }
    }
}

/// Format configuration for the renderer.
///
/// This is a plain value: the caller loads it once (or builds it by hand)
/// and passes it into the renderer explicitly. The pipeline itself never
/// reads configuration from the environment mid-run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Apply the configured template strings instead of the built-in ones
    pub custom_formatting_enabled: bool,
    /// Render structured groups for the recipe-storage backend instead of
    /// a flat text block
    pub use_fixed_template: bool,
    pub templates: TemplateSet,
}

impl FormatConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CARD__ prefix
    /// 2. recipe-format.toml file in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CARD__TEMPLATES__FLAT_TEMPLATE
    pub fn load() -> Result<Self, RecipeError> {
        let settings = Config::builder()
            .add_source(File::with_name("recipe-format").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_CARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// Decides which article keywords get a recipe attached at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttachPolicy {
    pub enabled: bool,
    /// Attach to every article regardless of keyword matching
    pub attach_to_all: bool,
    /// Comma-separated trigger keywords
    pub keywords: String,
}

impl AttachPolicy {
    /// True when a recipe should be generated for this article keyword.
    pub fn matches(&self, keyword: &str) -> bool {
        if !self.enabled {
            return false;
        }
        if self.attach_to_all {
            return true;
        }

        let keyword = keyword.to_lowercase();
        self.keywords
            .split(',')
            .map(|trigger| trigger.trim().to_lowercase())
            .filter(|trigger| !trigger.is_empty())
            .any(|trigger| keyword.contains(&trigger))
    }
}

fn default_flat_template() -> String {
    "**Ingredients**\n**  **\n{ingredients}\n\n**Instructions**\n** **\n{instructions}".to_string()
}

fn default_ingredient_item_format() -> String {
    "* {ingredient}".to_string()
}

fn default_instruction_item_format() -> String {
    "Step {number}: {instruction}".to_string()
}
