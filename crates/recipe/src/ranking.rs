use std::cmp::Ordering;

use eatsoon_shared::{PantryItem, Recipe};
use serde::Serialize;
use time::OffsetDateTime;

use crate::pantry_index::PantryIndex;
use crate::scoring::{RecipeScore, Weights, score_recipe_at};

/// Keys written by [`RecipeScore`]; same-named catalog fields are replaced.
const SCORE_FIELDS: [&str; 4] = ["score", "matchCount", "neededCount", "missing"];

/// A catalog recipe annotated with its pantry score.
///
/// Serializes flat: the recipe document with `score`, `matchCount`,
/// `neededCount` and `missing` added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(flatten)]
    pub score: RecipeScore,
}

impl ScoredRecipe {
    pub fn new(mut recipe: Recipe, score: RecipeScore) -> Self {
        for field in SCORE_FIELDS {
            recipe.extra.remove(field);
        }

        Self { recipe, score }
    }

    pub fn is_full_match(&self) -> bool {
        self.score.is_full_match()
    }
}

/// Knobs of [`recommend_recipes`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendOptions {
    /// Maximum number of recipes returned.
    pub top_k: usize,
    /// Drop recipes missing more ingredients than this; `None` keeps all.
    pub max_missing: Option<usize>,
    /// Keep only recipes whose every scorable ingredient is covered.
    pub only_full_match: bool,
    /// Minimum expiring ingredients for the expiring-stock strategy.
    pub min_expiring: usize,
    pub weights: Weights,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            top_k: 20,
            max_missing: None,
            only_full_match: false,
            min_expiring: 3,
            weights: Weights::default(),
        }
    }
}

impl RecommendOptions {
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn max_missing(mut self, max_missing: usize) -> Self {
        self.max_missing = Some(max_missing);
        self
    }

    pub fn only_full_match(mut self, only_full_match: bool) -> Self {
        self.only_full_match = only_full_match;
        self
    }

    pub fn min_expiring(mut self, min_expiring: usize) -> Self {
        self.min_expiring = min_expiring;
        self
    }

    pub fn weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }
}

/// Ranks the catalog against the pantry using the current time.
pub fn recommend_recipes(
    recipes: &[Recipe],
    pantry: &[PantryItem],
    options: &RecommendOptions,
) -> Vec<ScoredRecipe> {
    recommend_recipes_at(recipes, pantry, options, OffsetDateTime::now_utc())
}

/// Ranks the catalog against the pantry as of `now`.
///
/// One index is built per call. Recipes are filtered (full match, missing
/// cap), sorted by descending score and cut to `top_k`. Equal scores keep
/// catalog order.
#[tracing::instrument(skip_all, fields(recipes = recipes.len(), pantry = pantry.len()))]
pub fn recommend_recipes_at(
    recipes: &[Recipe],
    pantry: &[PantryItem],
    options: &RecommendOptions,
    now: OffsetDateTime,
) -> Vec<ScoredRecipe> {
    let index = PantryIndex::build(pantry);

    let mut ranked: Vec<ScoredRecipe> = recipes
        .iter()
        .map(|recipe| (recipe, score_recipe_at(recipe, &index, &options.weights, now)))
        .filter(|(_, score)| !options.only_full_match || score.is_full_match())
        .filter(|(_, score)| {
            options
                .max_missing
                .is_none_or(|max_missing| score.missing.len() <= max_missing)
        })
        .map(|(recipe, score)| ScoredRecipe::new(recipe.clone(), score))
        .collect();

    sort_by_score(&mut ranked);
    ranked.truncate(options.top_k);

    tracing::debug!(returned = ranked.len(), "ranked recipes");

    ranked
}

/// Stable sort, highest score first. `-0.0` and `0.0` tie.
pub(crate) fn sort_by_score(recipes: &mut [ScoredRecipe]) {
    recipes.sort_by(|a, b| {
        b.score
            .score
            .partial_cmp(&a.score.score)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_scored_recipe_overwrites_score_fields() {
        let mut recipe = Recipe::new("r1", "비빔밥");
        recipe.extra.insert("score".to_string(), Value::from("legacy"));
        recipe.extra.insert("servings".to_string(), Value::from(2));

        let scored = ScoredRecipe::new(
            recipe,
            RecipeScore {
                score: 1.5,
                match_count: 1,
                needed_count: 1,
                missing: vec![],
            },
        );

        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["score"], json!(1.5));
        assert_eq!(json["servings"], json!(2));
        assert_eq!(json["matchCount"], json!(1));
        assert_eq!(json["neededCount"], json!(1));
        assert_eq!(json["missing"], json!([]));
        assert_eq!(json["id"], json!("r1"));
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut recipes: Vec<ScoredRecipe> = [("a", 1.0), ("b", 3.0), ("c", 1.0), ("d", 3.0)]
            .into_iter()
            .map(|(id, score)| {
                ScoredRecipe::new(
                    Recipe::new(id, id),
                    RecipeScore {
                        score,
                        ..Default::default()
                    },
                )
            })
            .collect();

        sort_by_score(&mut recipes);

        let ids: Vec<&str> = recipes.iter().map(|r| r.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_signed_zero_scores_tie() {
        let mut recipes: Vec<ScoredRecipe> = [("neg", -0.0), ("pos", 0.0), ("low", -1.0)]
            .into_iter()
            .map(|(id, score)| {
                ScoredRecipe::new(
                    Recipe::new(id, id),
                    RecipeScore {
                        score,
                        ..Default::default()
                    },
                )
            })
            .collect();

        sort_by_score(&mut recipes);

        let ids: Vec<&str> = recipes.iter().map(|r| r.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["neg", "pos", "low"]);
    }

    #[test]
    fn test_default_options() {
        let options = RecommendOptions::default();
        assert_eq!(options.top_k, 20);
        assert_eq!(options.max_missing, None);
        assert!(!options.only_full_match);
        assert_eq!(options.weights, Weights::default());
    }
}
