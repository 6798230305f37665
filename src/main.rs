use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// mealkit - weekly meal planning from the terminal
#[derive(Parser)]
#[command(name = "mealkit")]
#[command(about = "Browse recipes, plan the week and build a shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes by name
    Search { query: String },
    /// Show a random recipe
    Random,
    /// Show one recipe with its ingredients and instructions
    Show { id: String },
    /// List recipes by category and/or cuisine area
    Browse {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        area: Option<String>,
    },
    /// List recipe categories
    Categories,
    /// List cuisine areas
    Areas,
    /// Manage favorite recipes
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
    /// Manage the weekly meal plan
    Plan {
        #[command(subcommand)]
        command: PlanCommand,
    },
    /// Print the shopping list for the current plan
    Shopping,
}

#[derive(Subcommand)]
enum FavoritesCommand {
    /// List favorite recipes
    List,
    /// Add a recipe to favorites, or remove it if already there
    Toggle { id: String },
}

#[derive(Subcommand)]
enum PlanCommand {
    /// Print the weekly plan
    Show,
    /// Put a recipe in a slot, e.g. `plan assign wednesday dinner 52772`
    Assign {
        day: String,
        meal_type: String,
        id: String,
    },
    /// Clear a slot
    Remove { day: String, meal_type: String },
    /// Clear every slot
    Reset,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealkit::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealkit::observability::init_observability(
        "mealkit",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Search { query } => cli::recipe::search(config, query).await,
        Commands::Random => cli::recipe::random(config).await,
        Commands::Show { id } => cli::recipe::show(config, id).await,
        Commands::Browse { category, area } => cli::recipe::browse(config, category, area).await,
        Commands::Categories => cli::recipe::categories(config).await,
        Commands::Areas => cli::recipe::areas(config).await,
        Commands::Favorites { command } => match command {
            FavoritesCommand::List => cli::favorites::list(config).await,
            FavoritesCommand::Toggle { id } => cli::favorites::toggle(config, id).await,
        },
        Commands::Plan { command } => match command {
            PlanCommand::Show => cli::plan::show(config).await,
            PlanCommand::Assign { day, meal_type, id } => {
                cli::plan::assign(config, day, meal_type, id).await
            }
            PlanCommand::Remove { day, meal_type } => {
                cli::plan::remove(config, day, meal_type).await
            }
            PlanCommand::Reset => cli::plan::reset(config).await,
        },
        Commands::Shopping => cli::plan::shopping(config).await,
    }
}
