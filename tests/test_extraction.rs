use recipe_card::{extract_recipe, Provenance};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_extracts_lists_from_marked_up_content() {
    init_logging();
    let content = "<h2>Ingredients:</h2><ul><li>2 eggs</li><li>1 cup flour</li></ul>\
                   <h2>Instructions:</h2><ol><li>Mix.</li><li>Bake.</li></ol>";

    let recipe = extract_recipe(content, "pancakes").unwrap();

    assert_eq!(recipe.ingredients, vec!["2 eggs", "1 cup flour"]);
    assert_eq!(recipe.instructions, vec!["Mix.", "Bake."]);
    assert_eq!(recipe.provenance, Provenance::Extracted);
}

#[test]
fn test_full_article_extraction() {
    init_logging();
    let content = "\
        <h2>Recipe: Skillet Chicken Fajitas</h2>\
        <p>A fast dinner. Prep time: 15 minutes. Cooking time: 1 hour. Servings: 4-6 people.</p>\
        <h2>Ingredients</h2>\
        <ul><li>2 chicken breasts</li><li>3 bell peppers</li><li>1 onion</li></ul>\
        <h2>Instructions</h2>\
        <ol><li>Slice the chicken.</li><li>Sear in a hot skillet.</li><li>Serve on tortillas.</li></ol>\
        <h2>Notes</h2><ul><li>Marinate overnight for more flavor</li></ul>\
        <h2>Nutrition Facts</h2>\
        <ul><li>Calories: 380</li><li>Protein: 32g</li><li>Carbs: 28g</li><li>Fat: 14g</li></ul>";

    let recipe = extract_recipe(content, "chicken fajitas").unwrap();

    assert_eq!(recipe.title, "Skillet Chicken Fajitas");
    assert_eq!(recipe.description, "A delicious chicken fajitas recipe.");
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.instructions.len(), 3);
    assert_eq!(recipe.prep_time_minutes, 15);
    assert_eq!(recipe.cook_time_minutes, 60);
    assert_eq!(recipe.total_time_minutes, 75);
    assert_eq!(recipe.yield_servings, 5);
    assert_eq!(recipe.yield_unit, "servings");
    assert_eq!(recipe.notes, vec!["Marinate overnight for more flavor"]);
    assert_eq!(recipe.nutrition.calories, "380 kcal");
    assert_eq!(recipe.nutrition.protein, "32g");
    assert_eq!(recipe.nutrition.carbs, "28g");
    assert_eq!(recipe.nutrition.fat, "14g");
}

#[test]
fn test_no_indicators_short_circuits_to_none() {
    // extractable lists are present, but no marker phrase is; the indicator
    // gate must reject this before list extraction ever sees it
    let content = "<h2>Packing List</h2><ul><li>passport</li><li>charger</li></ul>\
                   <ol><li>Book flights.</li><li>Reserve hotel.</li></ol>";

    assert!(extract_recipe(content, "travel").is_none());
}

#[test]
fn test_missing_instructions_is_no_recipe() {
    // title, timing and ingredients all match, yet the whole extraction is
    // discarded because no instruction list can be recovered
    let content = "<h2>Best Brownies Recipe</h2><p>Prep time: 10 minutes</p>\
                   <h2>Ingredients</h2><ul><li>200g chocolate</li></ul>";

    assert!(extract_recipe(content, "brownies").is_none());
}

#[test]
fn test_fallback_lists_without_headings() {
    let content = "<p>Servings: 2</p>\
                   <ul><li>1 avocado</li><li>2 slices of bread</li></ul>\
                   <ol><li>Toast the bread.</li><li>Mash the avocado on top.</li></ol>";

    let recipe = extract_recipe(content, "avocado toast").unwrap();

    assert_eq!(recipe.ingredients, vec!["1 avocado", "2 slices of bread"]);
    assert_eq!(recipe.instructions.len(), 2);
    // no heading anywhere, so the title falls back to the keyword
    assert_eq!(recipe.title, "avocado toast");
    assert_eq!(recipe.yield_servings, 2);
}

#[test]
fn test_unmatched_fields_are_defaulted() {
    let content = "<p>Cook time: 20 minutes</p>\
                   <h2>Ingredients</h2><ul><li>4 tomatoes</li></ul>\
                   <h2>Instructions</h2><ol><li>Roast them.</li></ol>";

    let recipe = extract_recipe(content, "roast tomatoes").unwrap();

    // prep time never appears; the validator fills the fixed default
    assert_eq!(recipe.prep_time_minutes, 30);
    assert_eq!(recipe.cook_time_minutes, 20);
    assert_eq!(recipe.total_time_minutes, 50);
    assert_eq!(recipe.yield_servings, 4);
    assert!(recipe.notes.is_empty());
    assert_eq!(recipe.nutrition.calories, "N/A");
}
