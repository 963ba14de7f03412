pub mod detail;
pub mod expiry;
pub mod matching;
pub mod normalize;
pub mod pantry_index;
pub mod ranking;
pub mod scoring;
pub mod search;
pub mod strategy;

pub use detail::{
    IngredientStatus, RecipeDetail, SeasoningDetector, ServingsParser, UtensilFilter,
    display_servings, ingredient_statuses, mentions_seasoning,
};
pub use expiry::{FAR_FUTURE_DAYS, days_until, days_until_at};
pub use matching::{find_matching_pantry_items, is_plain_water, is_water};
pub use normalize::normalize_name;
pub use pantry_index::{PantryIndex, index_pantry};
pub use ranking::{RecommendOptions, ScoredRecipe, recommend_recipes, recommend_recipes_at};
pub use scoring::{RecipeScore, URGENCY_HORIZON_DAYS, Weights, score_recipe, score_recipe_at};
pub use search::search_recipes;
pub use strategy::{
    Strategy, recommend_by_available_ingredients, recommend_by_available_ingredients_at,
    recommend_by_expiring_ingredients, recommend_by_expiring_ingredients_at,
};

pub use eatsoon_shared::{DateLike, Ingredient, MissingIngredient, PantryItem, Quantity, Recipe};
