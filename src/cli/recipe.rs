use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use popote::store::JsonStore;
use popote_recipe::{
    Category, IngredientCatalog, RecipeFilter, Season, export_recipes, import_recipes, scale,
};
use popote_shared::RecipeCatalog;

#[derive(Subcommand)]
pub enum RecipeCommand {
    /// Replace the catalog with the recipes of a JSON file
    Import { file: PathBuf },
    /// Write the catalog as JSON, to stdout when no file is given
    Export { file: Option<PathBuf> },
    /// List recipes, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show a recipe, scaled to another number of people if asked
    Show {
        id: String,
        #[arg(long)]
        personnes: Option<u16>,
    },
}

#[derive(Args)]
pub struct FilterArgs {
    /// Part of the title
    #[arg(long)]
    name: Option<String>,
    /// Printemps, Été, Automne or Hiver
    #[arg(long)]
    season: Vec<Season>,
    /// Apéritif, Entrée, Plat, Accompagnement, Dessert or Boisson
    #[arg(long)]
    category: Vec<Category>,
    /// Part of an ingredient name, all must match
    #[arg(long)]
    ingredient: Vec<String>,
    /// Minutes
    #[arg(long)]
    max_prep_time: Option<u32>,
    #[arg(long)]
    max_cost: Option<f64>,
    #[arg(long)]
    min_personnes: Option<u16>,
    #[arg(long)]
    max_personnes: Option<u16>,
}

impl From<FilterArgs> for RecipeFilter {
    fn from(value: FilterArgs) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            seasons: value.season,
            categories: value.category,
            ingredients: value.ingredient,
            max_prep_time: value.max_prep_time,
            max_cost: value.max_cost,
            min_personnes: value.min_personnes,
            max_personnes: value.max_personnes,
        }
    }
}

pub async fn run(store: &JsonStore, command: RecipeCommand) -> Result<()> {
    match command {
        RecipeCommand::Import { file } => import(store, file).await,
        RecipeCommand::Export { file } => export(store, file).await,
        RecipeCommand::List { filter } => list(store, filter.into()).await,
        RecipeCommand::Show { id, personnes } => show(store, &id, personnes).await,
    }
}

async fn import(store: &JsonStore, file: PathBuf) -> Result<()> {
    let json = tokio::fs::read_to_string(&file).await?;
    let recipes = import_recipes(&json)?;
    let count = store.recipes.replace_all(recipes).await?;

    tracing::info!(count, file = %file.display(), "recipe catalog replaced");
    println!("{count} recipes imported");

    Ok(())
}

async fn export(store: &JsonStore, file: Option<PathBuf>) -> Result<()> {
    let recipes = store.recipes.get_all().await?;
    let json = export_recipes(&recipes)?;

    match file {
        Some(file) => {
            tokio::fs::write(&file, json).await?;
            tracing::info!(count = recipes.len(), file = %file.display(), "recipes exported");
        }
        None => println!("{json}"),
    }

    Ok(())
}

async fn list(store: &JsonStore, filter: RecipeFilter) -> Result<()> {
    let recipes = store.recipes.get_all().await?;

    for recipe in filter.apply(&recipes) {
        println!("{}\t{}", recipe.id, recipe.title);
    }

    Ok(())
}

async fn show(store: &JsonStore, id: &str, personnes: Option<u16>) -> Result<()> {
    let Some(recipe) = store.recipes.get(id).await? else {
        anyhow::bail!("recipe {id} not found");
    };

    let recipe = match personnes {
        Some(personnes) => scale(&recipe, personnes)?,
        None => recipe,
    };

    println!("{} ({} personnes)", recipe.title, recipe.base_personnes());

    if !recipe.season.is_empty() {
        let seasons = recipe.season.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        println!("Saison: {}", seasons.join(", "));
    }

    if !recipe.category.is_empty() {
        let categories = recipe.category.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        println!("Catégorie: {}", categories.join(", "));
    }

    if let Some(prep_time) = recipe.prep_time {
        println!("Préparation: {prep_time} min");
    }

    for ingredient in recipe.ingredients.iter() {
        println!(
            "- {}: {} {}",
            ingredient.name, ingredient.quantity, ingredient.unit
        );
    }

    if !recipe.description.trim().is_empty() {
        println!("\n{}", recipe.description);
    }

    Ok(())
}

pub async fn catalog(store: &JsonStore) -> Result<()> {
    let recipes = store.recipes.get_all().await?;
    let catalog = IngredientCatalog::build(&recipes);

    println!("Ingrédients:");
    for name in catalog.names.iter() {
        println!("  {name}");
    }

    println!("Unités:");
    for unit in catalog.units.iter() {
        println!("  {unit}");
    }

    Ok(())
}
