//! Validation and defaulting of candidate recipe data.
//!
//! Extraction results and structured generation replies both land in a
//! [`RecipeDraft`] before they are allowed to become a canonical
//! [`Recipe`]. Every defaulting rule fills only missing or empty fields, so
//! re-validating data that already went through `finalize` changes nothing.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Deserialize;

use crate::model::{Nutrition, Provenance, Recipe, NOT_AVAILABLE};

pub const DEFAULT_SERVINGS: u32 = 4;
pub const DEFAULT_TIME_MINUTES: u32 = 30;

/// Sentinel list entries pointing readers at the article body when a
/// structured reply omits the lists entirely.
pub const MISSING_INGREDIENTS_NOTE: &str = "Please check the recipe description for ingredients";
pub const MISSING_INSTRUCTIONS_NOTE: &str = "Please follow the instructions in the article";

/// Candidate recipe data before validation.
///
/// Field names follow the JSON shape the generation collaborator replies
/// with, so a reply deserializes directly into a draft. Time and yield
/// values are kept as raw strings here; they are normalized to numbers only
/// in [`RecipeDraft::finalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecipeDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    #[serde(rename = "yield")]
    pub yield_text: Option<String>,
    pub notes: Vec<String>,
    pub nutrition_info: NutritionDraft,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NutritionDraft {
    #[serde(rename = "Calories")]
    pub calories: Option<String>,
    #[serde(rename = "Protein")]
    pub protein: Option<String>,
    #[serde(rename = "Carbs")]
    pub carbs: Option<String>,
    #[serde(rename = "Fat")]
    pub fat: Option<String>,
}

impl RecipeDraft {
    /// Minimal valid draft for a keyword, used when a structured reply
    /// cannot be parsed at all.
    pub fn stub(keyword: &str) -> Self {
        RecipeDraft {
            title: Some(format!("{} Recipe", capitalize(keyword))),
            description: Some(format!("A delicious {keyword} recipe.")),
            ingredients: vec![MISSING_INGREDIENTS_NOTE.to_string()],
            instructions: vec![MISSING_INSTRUCTIONS_NOTE.to_string()],
            prep_time: Some("30 mins".to_string()),
            cook_time: Some("30 mins".to_string()),
            yield_text: Some("4 servings".to_string()),
            notes: vec!["Recipe generated as fallback".to_string()],
            nutrition_info: NutritionDraft::default(),
        }
    }

    /// Validate and default the draft into a canonical record.
    ///
    /// This cannot fail: missing fields get deterministic defaults derived
    /// from the keyword, raw time and yield strings are normalized to
    /// numbers, and the total time is recomputed from its parts.
    pub fn finalize(self, keyword: &str, provenance: Provenance) -> Recipe {
        let prep_time_minutes = match self.prep_time.as_deref() {
            Some(raw) => parse_minutes(raw),
            None => DEFAULT_TIME_MINUTES,
        };
        let cook_time_minutes = match self.cook_time.as_deref() {
            Some(raw) => parse_minutes(raw),
            None => DEFAULT_TIME_MINUTES,
        };
        let yield_servings = match self.yield_text.as_deref() {
            Some(raw) => parse_servings(raw),
            None => DEFAULT_SERVINGS,
        };

        let ingredients = if self.ingredients.is_empty() {
            debug!("Draft has no ingredients; inserting sentinel entry");
            vec![MISSING_INGREDIENTS_NOTE.to_string()]
        } else {
            self.ingredients
        };
        let instructions = if self.instructions.is_empty() {
            debug!("Draft has no instructions; inserting sentinel entry");
            vec![MISSING_INSTRUCTIONS_NOTE.to_string()]
        } else {
            self.instructions
        };

        Recipe {
            title: self
                .title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| format!("{} Recipe", capitalize(keyword))),
            description: self
                .description
                .filter(|description| !description.is_empty())
                .unwrap_or_else(|| format!("A delicious {keyword} recipe.")),
            ingredients,
            instructions,
            prep_time_minutes,
            cook_time_minutes,
            total_time_minutes: prep_time_minutes.saturating_add(cook_time_minutes),
            yield_servings,
            yield_unit: "servings".to_string(),
            notes: self.notes,
            nutrition: self.nutrition_info.finalize(),
            provenance,
        }
    }
}

impl NutritionDraft {
    fn finalize(self) -> Nutrition {
        let or_sentinel = |value: Option<String>| {
            value
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        Nutrition {
            calories: or_sentinel(self.calories),
            protein: or_sentinel(self.protein),
            carbs: or_sentinel(self.carbs),
            fat: or_sentinel(self.fat),
        }
    }
}

/// A canonical record converted back into draft form, for re-validation.
/// `finalize` on the result reproduces the record exactly.
impl From<Recipe> for RecipeDraft {
    fn from(recipe: Recipe) -> Self {
        RecipeDraft {
            title: Some(recipe.title),
            description: Some(recipe.description),
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            prep_time: Some(format!("{} minutes", recipe.prep_time_minutes)),
            cook_time: Some(format!("{} minutes", recipe.cook_time_minutes)),
            yield_text: Some(format!("{} servings", recipe.yield_servings)),
            notes: recipe.notes,
            nutrition_info: NutritionDraft {
                calories: Some(recipe.nutrition.calories),
                protein: Some(recipe.nutrition.protein),
                carbs: Some(recipe.nutrition.carbs),
                fat: Some(recipe.nutrition.fat),
            },
        }
    }
}

static HOURS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:hour|hr)s?").expect("Invalid hours regex"));

static MINUTES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:minute|min)s?").expect("Invalid minutes regex"));

static RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)").expect("Invalid range regex"));

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid number regex"));

/// Minutes represented by a free-form duration ("30 mins", "1 hour 15
/// minutes"). Hour and minute quantities both contribute when present.
/// `N/A`, empty and unit-less strings parse as zero.
pub fn parse_minutes(raw: &str) -> u32 {
    if raw.is_empty() || raw == NOT_AVAILABLE {
        return 0;
    }

    let mut minutes: u32 = 0;
    if let Some(hours) = capture_number(&HOURS_REGEX, raw) {
        minutes = minutes.saturating_add(hours.saturating_mul(60));
    }
    if let Some(rest) = capture_number(&MINUTES_REGEX, raw) {
        minutes = minutes.saturating_add(rest);
    }
    minutes
}

/// Servings represented by a free-form yield ("4 servings", "4-6 people").
/// A range takes the round-half-up average of its endpoints; a string with
/// no parseable number defaults to 4.
pub fn parse_servings(raw: &str) -> u32 {
    if raw.is_empty() || raw == NOT_AVAILABLE {
        return DEFAULT_SERVINGS;
    }

    if let Some(caps) = RANGE_REGEX.captures(raw) {
        let low = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
        let high = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
        if let (Some(low), Some(high)) = (low, high) {
            return low.saturating_add(high).div_ceil(2);
        }
    }

    NUMBER_REGEX
        .find(raw)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_SERVINGS)
}

fn capture_number(regex: &Regex, raw: &str) -> Option<u32> {
    regex.captures(raw)?.get(1)?.as_str().parse().ok()
}

/// Uppercase the first character ("chicken soup" -> "Chicken soup").
pub(crate) fn capitalize(keyword: &str) -> String {
    let mut chars = keyword.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
