//! Recipe detail view helpers
//!
//! Stateless services behind the recipe detail screen:
//! - UtensilFilter: drops cookware that crawled recipes list as ingredients
//! - SeasoningDetector: spots seasoning keywords in ingredients and steps
//! - ServingsParser: derives a servings label from loosely structured data
//!
//! [`RecipeDetail::build`] combines them with per-ingredient pantry
//! availability.

use std::sync::LazyLock;

use eatsoon_shared::{Ingredient, PantryItem, Quantity, Recipe};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::matching::{find_matching_pantry_items, is_water};
use crate::pantry_index::PantryIndex;

/// Availability of one recipe ingredient in the pantry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientStatus<'a> {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub is_available: bool,
    pub matching_items: Vec<&'a PantryItem>,
}

impl<'a> IngredientStatus<'a> {
    /// Water is always available and is never looked up.
    pub fn resolve(ingredient: &Ingredient, index: &PantryIndex<'a>) -> Self {
        let name = ingredient.display_name();
        let matching_items = if is_water(name) {
            Vec::new()
        } else {
            find_matching_pantry_items(name, index)
        };

        Self {
            name: name.to_owned(),
            quantity: ingredient.quantity.as_ref().map(format_quantity).unwrap_or_default(),
            unit: ingredient.unit.clone().unwrap_or_default(),
            is_available: is_water(name) || !matching_items.is_empty(),
            matching_items,
        }
    }
}

/// Everything the detail screen shows about a recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail<'a> {
    pub recipe: &'a Recipe,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    pub ingredients: Vec<IngredientStatus<'a>>,
    pub available_count: usize,
    pub has_seasoning_in_ingredients: bool,
    pub mentions_seasoning_in_steps: bool,
}

impl<'a> RecipeDetail<'a> {
    pub fn build(recipe: &'a Recipe, index: &PantryIndex<'a>) -> Self {
        let ingredients = ingredient_statuses(recipe, index);
        let available_count = ingredients.iter().filter(|s| s.is_available).count();

        Self {
            recipe,
            servings: display_servings(recipe),
            available_count,
            has_seasoning_in_ingredients: SeasoningDetector::in_ingredients(&recipe.ingredients),
            mentions_seasoning_in_steps: SeasoningDetector::in_steps(&recipe.steps),
            ingredients,
        }
    }
}

/// Availability list for the detail screen, utensils removed.
pub fn ingredient_statuses<'a>(
    recipe: &Recipe,
    index: &PantryIndex<'a>,
) -> Vec<IngredientStatus<'a>> {
    UtensilFilter::retain(&recipe.ingredients)
        .map(|ingredient| IngredientStatus::resolve(ingredient, index))
        .collect()
}

/// Servings label shown on the detail screen, if one can be derived.
pub fn display_servings(recipe: &Recipe) -> Option<String> {
    ServingsParser::parse(recipe)
}

/// Whether the recipe uses any seasoning, in its steps or its ingredients.
pub fn mentions_seasoning(recipe: &Recipe) -> bool {
    SeasoningDetector::in_steps(&recipe.steps) || SeasoningDetector::in_ingredients(&recipe.ingredients)
}

/// Written form, except a numeric zero which shows as nothing.
fn format_quantity(quantity: &Quantity) -> String {
    match quantity {
        Quantity::Number(value) if *value == 0.0 => String::new(),
        quantity => quantity.to_string(),
    }
}

/// Cookware filter
///
/// Crawled recipes often list the cutting board or the pan next to the
/// food. Those entries are matched by keyword and hidden.
pub struct UtensilFilter;

impl UtensilFilter {
    const KEYWORDS: [&'static str; 27] = [
        "도마",
        "칼",
        "조리용나이프",
        "나이프",
        "스푼",
        "수저",
        "숟가락",
        "젓가락",
        "집게",
        "뒤집개",
        "국자",
        "거품기",
        "볼",
        "그릇",
        "냄비",
        "팬",
        "프라이팬",
        "오븐",
        "전자레인지",
        "믹서기",
        "블렌더",
        "체",
        "망",
        "찜기",
        "압력솥",
        "계량컵",
        "계량스푼",
    ];

    pub fn is_utensil(ingredient: &Ingredient) -> bool {
        let text = ingredient.display_name().to_lowercase();
        Self::KEYWORDS.iter().any(|keyword| text.contains(keyword))
    }

    pub fn retain(ingredients: &[Ingredient]) -> impl Iterator<Item = &Ingredient> {
        ingredients.iter().filter(|ingredient| !Self::is_utensil(ingredient))
    }
}

/// Seasoning keyword detector
pub struct SeasoningDetector;

impl SeasoningDetector {
    const KEYWORDS: [&'static str; 16] = [
        "양념",
        "양념장",
        "간장",
        "고추장",
        "고춧가루",
        "설탕",
        "소금",
        "참기름",
        "깨",
        "다진마늘",
        "다진 생강",
        "후추",
        "맛술",
        "미림",
        "물엿",
        "올리고당",
    ];

    fn contains_keyword(text: &str) -> bool {
        Self::KEYWORDS.iter().any(|keyword| text.contains(keyword))
    }

    pub fn in_ingredients(ingredients: &[Ingredient]) -> bool {
        ingredients
            .iter()
            .any(|ingredient| Self::contains_keyword(ingredient.display_name()))
    }

    pub fn in_steps(steps: &[String]) -> bool {
        steps.iter().any(|step| Self::contains_keyword(step))
    }
}

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:\s*[~\-]\s*(\d+))?").expect("valid regex"));

static SERVINGS_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\s*[~\-]\s*(\d+))?\s*인(?:분)?").expect("valid regex")
});

/// Servings label parser
///
/// Catalog documents store servings under several keys and formats
/// ("2", 2, "2~3인분"). Falls back to a "N인분" hint in the recipe name,
/// then in the ingredient list.
pub struct ServingsParser;

impl ServingsParser {
    const FIELDS: [&'static str; 5] = ["servings", "serving", "people", "portions", "cookingServings"];

    pub fn parse(recipe: &Recipe) -> Option<String> {
        if let Some(raw) = Self::FIELDS
            .iter()
            .filter_map(|field| recipe.extra.get(*field))
            .find(|value| !value.is_null())
        {
            let text = match raw {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };

            if !text.trim().is_empty() {
                return Some(match AMOUNT.find(&text) {
                    Some(amount) => amount.as_str().split_whitespace().collect(),
                    None => text,
                });
            }
        }

        Self::leading_count(&recipe.name).or_else(|| {
            recipe
                .ingredients
                .iter()
                .find_map(|ingredient| Self::leading_count(ingredient.display_name()))
        })
    }

    fn leading_count(text: &str) -> Option<String> {
        SERVINGS_SUFFIX
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|count| count.as_str().to_owned())
    }
}
