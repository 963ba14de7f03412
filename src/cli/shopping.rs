use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use eatsoon::config::Config;
use eatsoon_recipe::{PantryIndex, score_recipe};
use eatsoon_shopping::{MergeOutcome, ShoppingList};
use serde::Serialize;

use super::{SnapshotArgs, print_json};

#[derive(Args, Debug)]
pub struct ShoppingArgs {
    #[command(flatten)]
    pub snapshots: SnapshotArgs,

    /// Recipe id
    #[arg(long)]
    pub recipe_id: String,

    /// Shopping list file, read and written back when given
    #[arg(long)]
    pub list: Option<PathBuf>,
}

#[derive(Serialize)]
struct ShoppingReport<'a> {
    outcome: MergeOutcome,
    items: &'a ShoppingList,
}

pub async fn run(config: Config, args: ShoppingArgs) -> Result<()> {
    let pantry = args.snapshots.load_pantry(&config).await?;
    let recipes = args.snapshots.load_recipes(&config).await?;
    let recipe = eatsoon::catalog::find_recipe(&recipes, &args.recipe_id)?;

    let weights = config.recommendation.weights.to_weights();
    let score = score_recipe(recipe, &PantryIndex::build(&pantry), &weights);

    let mut list = match &args.list {
        Some(path) => eatsoon::catalog::load_shopping_list(path).await?,
        None => ShoppingList::new(),
    };
    let outcome = list.add_missing(&score.missing, &recipe.id);

    if let Some(path) = &args.list {
        eatsoon::catalog::save_shopping_list(path, &list).await?;
        tracing::info!(path = %path.display(), items = list.len(), "shopping list saved");
    }

    print_json(&ShoppingReport {
        outcome,
        items: &list,
    })
}
