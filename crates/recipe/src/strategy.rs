//! Alternative ways of picking recipes from the pantry.
//!
//! - Best: the ranked recommendation from [`crate::ranking`]
//! - Expiring: recipes that use several items about to expire
//! - Available: recipes the pantry mostly covers, with fuzzy name matching

use eatsoon_shared::{PantryItem, Recipe};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

use crate::expiry::days_until_at;
use crate::matching::{find_matching_pantry_items, is_plain_water};
use crate::normalize::normalize_name;
use crate::pantry_index::PantryIndex;
use crate::ranking::{RecommendOptions, ScoredRecipe, recommend_recipes_at, sort_by_score};
use crate::scoring::score_recipe_at;

/// Items expiring within this many days count as expiring stock.
const EXPIRING_WITHIN_DAYS: i64 = 3;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Best,
    Expiring,
    Available,
}

impl Strategy {
    pub fn recommend(
        &self,
        recipes: &[Recipe],
        pantry: &[PantryItem],
        options: &RecommendOptions,
    ) -> Vec<ScoredRecipe> {
        self.recommend_at(recipes, pantry, options, OffsetDateTime::now_utc())
    }

    /// Runs the strategy and keeps at most `options.top_k` recipes.
    pub fn recommend_at(
        &self,
        recipes: &[Recipe],
        pantry: &[PantryItem],
        options: &RecommendOptions,
        now: OffsetDateTime,
    ) -> Vec<ScoredRecipe> {
        let mut ranked = match self {
            Strategy::Best => return recommend_recipes_at(recipes, pantry, options, now),
            Strategy::Expiring => recommend_by_expiring_ingredients_at(recipes, pantry, options, now),
            Strategy::Available => {
                recommend_by_available_ingredients_at(recipes, pantry, options, now)
            }
        };

        ranked.truncate(options.top_k);
        ranked
    }
}

pub fn recommend_by_expiring_ingredients(
    recipes: &[Recipe],
    pantry: &[PantryItem],
    options: &RecommendOptions,
) -> Vec<ScoredRecipe> {
    recommend_by_expiring_ingredients_at(recipes, pantry, options, OffsetDateTime::now_utc())
}

/// Recipes using at least `options.min_expiring` items that expire within
/// three days (already expired items are left out).
///
/// Ingredient and item names match when either contains the other. Nothing
/// is returned while the pantry holds fewer expiring items than required.
pub fn recommend_by_expiring_ingredients_at(
    recipes: &[Recipe],
    pantry: &[PantryItem],
    options: &RecommendOptions,
    now: OffsetDateTime,
) -> Vec<ScoredRecipe> {
    let expiring: Vec<String> = pantry
        .iter()
        .filter(|item| {
            let days = days_until_at(item.expiry(), now);
            (0..=EXPIRING_WITHIN_DAYS).contains(&days)
        })
        .map(|item| normalize_name(item.match_name()))
        .collect();

    if expiring.len() < options.min_expiring {
        tracing::debug!(
            expiring = expiring.len(),
            required = options.min_expiring,
            "not enough expiring items"
        );
        return Vec::new();
    }

    let index = PantryIndex::build(pantry);

    let mut ranked: Vec<ScoredRecipe> = recipes
        .iter()
        .filter(|recipe| {
            let hits = recipe
                .ingredients
                .iter()
                .map(|ingredient| normalize_name(ingredient.display_name()))
                .filter(|name| !name.is_empty())
                .filter(|name| {
                    expiring.iter().any(|item| {
                        !item.is_empty() && (name.contains(item.as_str()) || item.contains(name.as_str()))
                    })
                })
                .count();

            hits >= options.min_expiring
        })
        .map(|recipe| {
            let score = score_recipe_at(recipe, &index, &options.weights, now);
            ScoredRecipe::new(recipe.clone(), score)
        })
        .collect();

    sort_by_score(&mut ranked);
    ranked
}

pub fn recommend_by_available_ingredients(
    recipes: &[Recipe],
    pantry: &[PantryItem],
    options: &RecommendOptions,
) -> Vec<ScoredRecipe> {
    recommend_by_available_ingredients_at(recipes, pantry, options, OffsetDateTime::now_utc())
}

/// Recipes for which the pantry holds at least two thirds of the
/// ingredients, plain water excluded.
///
/// Availability uses [`find_matching_pantry_items`], so partial names count.
/// Recipes listing only water always qualify; recipes without ingredients
/// never do.
pub fn recommend_by_available_ingredients_at(
    recipes: &[Recipe],
    pantry: &[PantryItem],
    options: &RecommendOptions,
    now: OffsetDateTime,
) -> Vec<ScoredRecipe> {
    let index = PantryIndex::build(pantry);

    let mut ranked: Vec<ScoredRecipe> = recipes
        .iter()
        .filter(|recipe| !recipe.ingredients.is_empty())
        .filter(|recipe| {
            let needed: Vec<&str> = recipe
                .ingredients
                .iter()
                .map(|ingredient| ingredient.display_name())
                .filter(|name| !is_plain_water(name))
                .collect();

            if needed.is_empty() {
                return true;
            }

            let available = needed
                .iter()
                .filter(|name| !find_matching_pantry_items(name, &index).is_empty())
                .count();

            // ceil(2n / 3)
            available >= (needed.len() * 2).div_ceil(3)
        })
        .map(|recipe| {
            let score = score_recipe_at(recipe, &index, &options.weights, now);
            ScoredRecipe::new(recipe.clone(), score)
        })
        .collect();

    sort_by_score(&mut ranked);
    ranked
}
