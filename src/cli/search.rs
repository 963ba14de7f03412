use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use eatsoon::config::Config;
use eatsoon_recipe::search_recipes;

use super::{print_json, recipes_path};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Recipe catalog snapshot (JSON array)
    #[arg(long)]
    pub recipes: Option<PathBuf>,

    /// Free-text query matched against names, tags and ingredients
    #[arg(long, default_value = "")]
    pub query: String,
}

pub async fn run(config: Config, args: SearchArgs) -> Result<()> {
    let path = recipes_path(args.recipes, &config)?;
    let recipes = eatsoon::catalog::load_recipes(&path).await?;

    let found = search_recipes(&recipes, &args.query);
    tracing::info!(query = %args.query, found = found.len(), "search finished");

    print_json(&found)
}
