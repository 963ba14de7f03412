use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use eatsoon::config::Config;
use eatsoon_shared::{PantryItem, Recipe};
use serde::Serialize;

pub mod detail;
pub mod recommend;
pub mod search;
pub mod shopping;

/// Snapshot locations, falling back to `data.*` in the configuration.
#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Pantry snapshot (JSON array)
    #[arg(long)]
    pub pantry: Option<PathBuf>,

    /// Recipe catalog snapshot (JSON array)
    #[arg(long)]
    pub recipes: Option<PathBuf>,
}

impl SnapshotArgs {
    pub async fn load_pantry(&self, config: &Config) -> Result<Vec<PantryItem>> {
        let path = self
            .pantry
            .clone()
            .or_else(|| config.data.pantry_path.clone())
            .context("no pantry snapshot: pass --pantry or set data.pantry_path")?;

        Ok(eatsoon::catalog::load_pantry(&path).await?)
    }

    pub async fn load_recipes(&self, config: &Config) -> Result<Vec<Recipe>> {
        let path = recipes_path(self.recipes.clone(), config)?;

        Ok(eatsoon::catalog::load_recipes(&path).await?)
    }
}

pub fn recipes_path(recipes: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    recipes
        .or_else(|| config.data.recipes_path.clone())
        .context("no recipe catalog: pass --recipes or set data.recipes_path")
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}
