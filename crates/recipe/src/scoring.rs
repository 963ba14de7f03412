use eatsoon_shared::{MissingIngredient, Quantity, Recipe};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::expiry::days_until_at;
use crate::normalize::normalize_name;
use crate::pantry_index::PantryIndex;

/// Items expiring this many days out or later add no urgency.
pub const URGENCY_HORIZON_DAYS: i64 = 14;

/// Weights of the recipe score terms.
///
/// `score = w_urgency * urgency + w_match * coverage - w_missing * missing`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Weights {
    pub w_urgency: f64,
    pub w_match: f64,
    pub w_missing: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            w_urgency: 1.2,
            w_match: 2.0,
            w_missing: 1.0,
        }
    }
}

/// How well the pantry covers one recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeScore {
    pub score: f64,
    pub match_count: usize,
    pub needed_count: usize,
    pub missing: Vec<MissingIngredient>,
}

impl RecipeScore {
    /// Every scorable ingredient is covered (vacuously true with none).
    pub fn is_full_match(&self) -> bool {
        self.match_count == self.needed_count
    }

    /// Share of scorable ingredients the pantry covers, `0.0` with none.
    pub fn coverage(&self) -> f64 {
        if self.needed_count == 0 {
            0.0
        } else {
            self.match_count as f64 / self.needed_count as f64
        }
    }
}

/// Scores `recipe` against the pantry using the current time.
pub fn score_recipe(recipe: &Recipe, index: &PantryIndex<'_>, weights: &Weights) -> RecipeScore {
    score_recipe_at(recipe, index, weights, OffsetDateTime::now_utc())
}

/// Scores `recipe` against the pantry as of `now`.
///
/// An ingredient is covered when at least one pantry entry under its exact
/// normalized name holds at least the required quantity (absent or
/// non-numeric quantities count as `0` on both sides, so an unquantified
/// ingredient is covered by presence alone). Covered ingredients add urgency
/// from their soonest expiring sufficient entry; uncovered ones are listed as
/// missing with their quantity as written, or `1` when it has none.
/// Ingredients without a name are ignored.
pub fn score_recipe_at(
    recipe: &Recipe,
    index: &PantryIndex<'_>,
    weights: &Weights,
    now: OffsetDateTime,
) -> RecipeScore {
    let mut match_count = 0;
    let mut needed_count = 0;
    let mut urgency: i64 = 0;
    let mut missing = Vec::new();

    for ingredient in &recipe.ingredients {
        let key = normalize_name(ingredient.match_name());
        if key.is_empty() {
            continue;
        }
        needed_count += 1;

        let required = amount(ingredient.quantity.as_ref());
        let soonest = index
            .get(&key)
            .iter()
            .filter(|item| amount(item.quantity.as_ref()) >= required)
            .map(|item| days_until_at(item.expiry(), now))
            .min();

        match soonest {
            Some(days) => {
                match_count += 1;
                urgency += URGENCY_HORIZON_DAYS.saturating_sub(days).max(0);
            }
            None => {
                let name = ingredient
                    .name
                    .as_deref()
                    .unwrap_or_else(|| ingredient.match_name());

                missing.push(MissingIngredient {
                    name: name.trim().to_owned(),
                    quantity: ingredient.quantity.clone().unwrap_or_else(Quantity::one),
                    unit: ingredient.unit.as_deref().map(|unit| unit.trim().to_owned()),
                });
            }
        }
    }

    let mut result = RecipeScore {
        score: 0.0,
        match_count,
        needed_count,
        missing,
    };

    result.score = weights.w_urgency * urgency as f64 + weights.w_match * result.coverage()
        - weights.w_missing * result.missing.len() as f64;

    result
}

fn amount(quantity: Option<&Quantity>) -> f64 {
    quantity.and_then(Quantity::to_f64).unwrap_or(0.0)
}
