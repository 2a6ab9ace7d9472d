use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Sentinel value for nutrition fields with no known value.
pub const NOT_AVAILABLE: &str = "N/A";

/// How a canonical recipe record was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Provenance {
    /// Recovered from generated article text
    Extracted,
    /// Parsed from a structured generation reply
    AiStructured,
    /// Synthesized stub after the reply could not be parsed
    Fallback,
}

/// Fixed-key nutrition facts. Values are display strings ("320 kcal",
/// "12g"); unknown values hold the `N/A` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nutrition {
    #[serde(rename = "Calories")]
    pub calories: String,
    #[serde(rename = "Protein")]
    pub protein: String,
    #[serde(rename = "Carbs")]
    pub carbs: String,
    #[serde(rename = "Fat")]
    pub fat: String,
}

impl Default for Nutrition {
    fn default() -> Self {
        Nutrition {
            calories: NOT_AVAILABLE.to_string(),
            protein: NOT_AVAILABLE.to_string(),
            carbs: NOT_AVAILABLE.to_string(),
            fat: NOT_AVAILABLE.to_string(),
        }
    }
}

static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("Invalid numeric regex"));

impl Nutrition {
    /// Leading numeric value of a nutrition display string ("320 kcal" ->
    /// 320.0). `N/A` and unparseable strings yield zero, which is what
    /// storage backends expecting plain numbers want for unknown values.
    pub fn numeric_value(value: &str) -> f64 {
        if value == NOT_AVAILABLE {
            return 0.0;
        }
        NUMERIC_REGEX
            .captures(value)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0.0)
    }
}

/// The validated, format-agnostic recipe record.
///
/// A record is built once per article, either by extraction from generated
/// text or from a structured generation reply, and is immutable afterwards.
/// It is the single source of truth for rendering: both output variants are
/// derived from it directly, never from a previous rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    /// Non-empty by construction
    pub ingredients: Vec<String>,
    /// Non-empty by construction; entries may themselves be step headers
    pub instructions: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    /// Always `prep_time_minutes + cook_time_minutes`
    pub total_time_minutes: u32,
    pub yield_servings: u32,
    pub yield_unit: String,
    pub notes: Vec<String>,
    pub nutrition: Nutrition,
    pub provenance: Provenance,
}

/// A named, ordered slice of a flat instruction list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionGroup {
    pub name: String,
    pub sequence_index: u32,
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionStep {
    pub sequence_index: u32,
    pub text: String,
    /// Image attachment slot in the storage schema; always empty here
    pub image: u32,
    /// Ingredient cross-references in the storage schema; always empty here
    pub ingredient_refs: Vec<String>,
}

impl InstructionStep {
    pub fn new(sequence_index: u32, text: impl Into<String>) -> Self {
        InstructionStep {
            sequence_index,
            text: text.into(),
            image: 0,
            ingredient_refs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientGroup {
    pub name: String,
    pub entries: Vec<String>,
}

/// A format-specific rendering of a canonical record. Exactly one variant
/// is produced per render, chosen by the format configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderedRecipe {
    /// A single substituted block of text
    FlatText { body: String },
    /// Grouped output for a structured recipe-storage backend
    StructuredGroups {
        ingredient_groups: Vec<IngredientGroup>,
        instruction_groups: Vec<InstructionGroup>,
    },
}
