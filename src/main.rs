use anyhow::Result;
use clap::{Parser, Subcommand};
use validator::Validate;

mod cli;

/// eatsoon - cook what is about to expire
#[derive(Parser)]
#[command(name = "eatsoon")]
#[command(about = "Recipe recommendations from your pantry", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank recipes against the pantry
    Recommend(cli::recommend::RecommendArgs),
    /// Show ingredient availability for one recipe
    Detail(cli::detail::DetailArgs),
    /// Search the recipe catalog
    Search(cli::search::SearchArgs),
    /// Put a recipe's missing ingredients on the shopping list
    Shopping(cli::shopping::ShoppingArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = eatsoon::config::Config::load(cli.config.clone())?;
    config.validate()?;

    eatsoon::observability::init_observability(
        "eatsoon",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Recommend(args) => cli::recommend::run(config, args).await,
        Commands::Detail(args) => cli::detail::run(config, args).await,
        Commands::Search(args) => cli::search::run(config, args).await,
        Commands::Shopping(args) => cli::shopping::run(config, args).await,
    }
}
