use anyhow::Result;
use clap::{Parser, Subcommand};
use popote::store::JsonStore;

mod cli;

/// popote - household meal planning
#[derive(Parser)]
#[command(name = "popote")]
#[command(about = "Recipes, weekly menus and shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the recipe catalog
    Recipe {
        #[command(subcommand)]
        command: cli::recipe::RecipeCommand,
    },
    /// List every ingredient name and unit used by the catalog
    Catalog,
    /// Plan and track menus
    Menu {
        #[command(subcommand)]
        command: cli::menu::MenuCommand,
    },
    /// Suggest recipes for the next meals
    Suggest {
        /// Number of recipes (defaults to planning.default_meals)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Print the shopping list of meals not cooked yet
    Shopping {
        /// Only this menu instead of every menu
        #[arg(long)]
        menu: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = popote::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    popote::observability::init_observability(
        "popote",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let store = JsonStore::new(&config.store);

    match cli.command {
        Commands::Recipe { command } => cli::recipe::run(&store, command).await,
        Commands::Catalog => cli::recipe::catalog(&store).await,
        Commands::Menu { command } => cli::menu::run(&config, &store, command).await,
        Commands::Suggest { count } => {
            let count = count.unwrap_or(config.planning.default_meals as usize);
            cli::menu::suggest(&store, count).await
        }
        Commands::Shopping { menu } => cli::shopping::print(&store, menu).await,
    }
}
