use anyhow::Result;
use clap::Args;
use eatsoon::config::Config;
use eatsoon_recipe::{PantryIndex, RecipeDetail};

use super::{SnapshotArgs, print_json};

#[derive(Args, Debug)]
pub struct DetailArgs {
    #[command(flatten)]
    pub snapshots: SnapshotArgs,

    /// Recipe id
    #[arg(long)]
    pub recipe_id: String,
}

pub async fn run(config: Config, args: DetailArgs) -> Result<()> {
    let pantry = args.snapshots.load_pantry(&config).await?;
    let recipes = args.snapshots.load_recipes(&config).await?;
    let recipe = eatsoon::catalog::find_recipe(&recipes, &args.recipe_id)?;

    let index = PantryIndex::build(&pantry);
    let detail = RecipeDetail::build(recipe, &index);
    tracing::info!(
        recipe_id = %recipe.id,
        available = detail.available_count,
        total = detail.ingredients.len(),
        "recipe detail built"
    );

    print_json(&detail)
}
