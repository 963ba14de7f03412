use eatsoon_shared::Recipe;

use crate::normalize::normalize_name;

/// Catalog recipes matching a free-text query.
///
/// A blank query returns the whole catalog. Otherwise the normalized query
/// must appear in the recipe name, its space-joined tags, or one of its
/// ingredient names.
pub fn search_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = normalize_name(query);
    if query.is_empty() {
        return recipes.iter().collect();
    }

    recipes
        .iter()
        .filter(|recipe| {
            let tags = recipe
                .tags
                .iter()
                .map(|tag| normalize_name(tag))
                .collect::<Vec<_>>()
                .join(" ");

            normalize_name(&recipe.name).contains(&query)
                || tags.contains(&query)
                || recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| normalize_name(ingredient.display_name()).contains(&query))
        })
        .collect()
}
