//! Snapshot files
//!
//! Pantry and recipe snapshots are JSON arrays exported from the document
//! store. Entries that do not deserialize are skipped with a warning so a
//! single broken document does not hide the rest of the catalog.

use std::path::{Path, PathBuf};

use eatsoon_shared::{PantryItem, Recipe};
use eatsoon_shopping::ShoppingList;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a JSON array: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("recipe not found: {0}")]
    RecipeNotFound(String),
}

pub async fn load_pantry(path: &Path) -> Result<Vec<PantryItem>, CatalogError> {
    load_snapshot(path, "pantry item").await
}

pub async fn load_recipes(path: &Path) -> Result<Vec<Recipe>, CatalogError> {
    load_snapshot(path, "recipe").await
}

pub fn find_recipe<'a>(recipes: &'a [Recipe], id: &str) -> Result<&'a Recipe, CatalogError> {
    recipes
        .iter()
        .find(|recipe| recipe.id == id)
        .ok_or_else(|| CatalogError::RecipeNotFound(id.to_owned()))
}

/// Reads a saved shopping list. A missing file is an empty list.
pub async fn load_shopping_list(path: &Path) -> Result<ShoppingList, CatalogError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ShoppingList::new());
        }
        Err(source) => {
            return Err(CatalogError::Read {
                path: path.to_owned(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_owned(),
        source,
    })
}

pub async fn save_shopping_list(path: &Path, list: &ShoppingList) -> Result<(), CatalogError> {
    let content = encode(path, list)?;

    tokio::fs::write(path, content)
        .await
        .map_err(|source| CatalogError::Write {
            path: path.to_owned(),
            source,
        })
}

fn encode<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<String, CatalogError> {
    serde_json::to_string_pretty(value).map_err(|source| CatalogError::Serialize {
        path: path.to_owned(),
        source,
    })
}

async fn load_snapshot<T: DeserializeOwned>(
    path: &Path,
    kind: &'static str,
) -> Result<Vec<T>, CatalogError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_owned(),
            source,
        })?;

    let entries: Vec<Value> =
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_owned(),
            source,
        })?;

    let total = entries.len();
    let items: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(kind, position, error = %err, "skipping unreadable snapshot entry");
                None
            }
        })
        .collect();

    tracing::info!(kind, path = %path.display(), loaded = items.len(), total, "snapshot loaded");

    Ok(items)
}
