//! Cheap pre-filter deciding whether full field extraction should run.

/// Marker phrases whose presence suggests the content embeds a recipe.
const RECIPE_INDICATORS: [&str; 7] = [
    "ingredients:",
    "instructions:",
    "preparation time:",
    "cooking time:",
    "servings:",
    "prep time:",
    "cook time:",
];

/// Case-insensitive scan for any recipe marker phrase.
///
/// The full extraction pass is far more expensive than this scan and is
/// pointless on non-recipe content, so callers gate on it and short-circuit
/// to "no recipe" when it returns false.
pub fn has_recipe_indicators(content: &str) -> bool {
    let lowered = content.to_lowercase();
    RECIPE_INDICATORS
        .iter()
        .any(|marker| lowered.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_marker() {
        for marker in RECIPE_INDICATORS {
            let content = format!("<p>Some intro text. {marker} 20 minutes</p>");
            assert!(has_recipe_indicators(&content), "missed marker {marker}");
        }
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        assert!(has_recipe_indicators("<h2>INGREDIENTS:</h2>"));
        assert!(has_recipe_indicators("Prep Time: 10 min"));
    }

    #[test]
    fn test_plain_article_is_rejected() {
        let content = "<h2>Travel Guide</h2><p>Pack your bags and enjoy the trip.</p>";
        assert!(!has_recipe_indicators(content));
    }

    #[test]
    fn test_marker_requires_colon() {
        // "ingredients" without the colon is common prose and not a signal
        assert!(!has_recipe_indicators("The best ingredients come from local farms."));
    }
}
