use anyhow::Result;
use clap::Args;
use eatsoon::config::Config;
use eatsoon_recipe::Strategy;

use super::{SnapshotArgs, print_json};

#[derive(Args, Debug)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub snapshots: SnapshotArgs,

    /// best, expiring or available
    #[arg(long, default_value_t = Strategy::Best)]
    pub strategy: Strategy,

    /// Maximum number of recipes (overrides config file)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Drop recipes missing more ingredients than this (overrides config file)
    #[arg(long)]
    pub max_missing: Option<usize>,

    /// Only recipes the pantry fully covers
    #[arg(long)]
    pub only_full_match: bool,
}

#[tracing::instrument(skip_all, fields(strategy = %args.strategy))]
pub async fn run(config: Config, args: RecommendArgs) -> Result<()> {
    let pantry = args.snapshots.load_pantry(&config).await?;
    let recipes = args.snapshots.load_recipes(&config).await?;

    let mut options = config.recommendation.to_options();
    if let Some(top_k) = args.top_k {
        options = options.top_k(top_k);
    }
    if let Some(max_missing) = args.max_missing {
        options = options.max_missing(max_missing);
    }
    if args.only_full_match {
        options = options.only_full_match(true);
    }

    let ranked = args.strategy.recommend(&recipes, &pantry, &options);
    tracing::info!(returned = ranked.len(), "recommendation finished");

    print_json(&ranked)
}
