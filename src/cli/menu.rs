use std::collections::HashMap;

use anyhow::Result;
use clap::Subcommand;
use popote::config::Config;
use popote::store::JsonStore;
use popote_mealplan::{
    MenuGroup, Suggest, SuggestionEngine, clear_slot, fill_empty_slots, new_group,
    refresh_slot, set_done, set_personnes, sort_by_date_desc,
};
use popote_shared::recipe::Recipe;
use popote_shared::{MenuScheduleStore, RecipeCatalog};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

#[derive(Subcommand)]
pub enum MenuCommand {
    /// Create a menu filled with suggested recipes
    Create {
        /// First day of the menu, YYYY-MM-DD (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
        #[arg(long)]
        meals: Option<u32>,
        #[arg(long)]
        personnes: Option<u16>,
    },
    /// List menus, most recent first
    List,
    /// Replace the recipe of a meal with another suggestion
    Refresh { id: String, num: u32 },
    /// Mark a meal as cooked
    Done {
        id: String,
        num: u32,
        /// Mark it as not cooked instead
        #[arg(long)]
        undo: bool,
    },
    /// Remove the recipe of a meal
    Clear { id: String, num: u32 },
    /// Change the number of people of a meal
    Personnes { id: String, num: u32, personnes: u16 },
    /// Delete a menu
    Delete { id: String },
}

fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

pub async fn run(config: &Config, store: &JsonStore, command: MenuCommand) -> Result<()> {
    match command {
        MenuCommand::Create {
            date,
            meals,
            personnes,
        } => {
            let meals = meals.unwrap_or(config.planning.default_meals);
            let personnes = personnes.unwrap_or(config.planning.default_personnes);
            create(store, date, meals, personnes).await
        }
        MenuCommand::List => list(store).await,
        MenuCommand::Refresh { id, num } => refresh(store, &id, num).await,
        MenuCommand::Done { id, num, undo } => {
            edit(store, &id, |group| set_done(group, num, !undo)).await
        }
        MenuCommand::Clear { id, num } => edit(store, &id, |group| clear_slot(group, num)).await,
        MenuCommand::Personnes { id, num, personnes } => {
            edit(store, &id, |group| set_personnes(group, num, personnes)).await
        }
        MenuCommand::Delete { id } => delete(store, &id).await,
    }
}

async fn create(store: &JsonStore, date: Option<Date>, meals: u32, personnes: u16) -> Result<()> {
    let now = OffsetDateTime::now_utc();
    let recipes = store.recipes.get_all().await?;
    let history = store.menus.get_all().await?;

    let group = new_group(
        ulid::Ulid::new().to_string(),
        date.unwrap_or(now.date()),
        meals,
        personnes,
    )?;

    let ids = {
        let engine = SuggestionEngine::new(&recipes, &history);
        engine.suggest(&Suggest::new(meals as usize, now), &mut rand::rng())
    };

    let group = store.menus.save(fill_empty_slots(group, ids)).await?;
    tracing::info!(menu = %group.id, date = %group.date, meals, "menu created");

    print_group(&group, &titles(&recipes));

    Ok(())
}

async fn list(store: &JsonStore) -> Result<()> {
    let recipes = store.recipes.get_all().await?;
    let mut groups = store.menus.get_all().await?;
    sort_by_date_desc(&mut groups);

    let titles = titles(&recipes);
    for group in groups.iter() {
        print_group(group, &titles);
        println!();
    }

    Ok(())
}

async fn refresh(store: &JsonStore, id: &str, num: u32) -> Result<()> {
    let group = find(store, id).await?;
    let recipes = store.recipes.get_all().await?;
    let history = store.menus.get_all().await?;

    let group = {
        let engine = SuggestionEngine::new(&recipes, &history);
        refresh_slot(
            group,
            num,
            &engine,
            OffsetDateTime::now_utc(),
            &mut rand::rng(),
        )?
    };

    let group = store.menus.save(group).await?;
    tracing::info!(menu = %group.id, num, "meal refreshed");

    print_group(&group, &titles(&recipes));

    Ok(())
}

async fn edit<F>(store: &JsonStore, id: &str, f: F) -> Result<()>
where
    F: FnOnce(MenuGroup) -> popote_shared::Result<MenuGroup>,
{
    let group = f(find(store, id).await?)?;
    let group = store.menus.save(group).await?;
    let recipes = store.recipes.get_all().await?;

    print_group(&group, &titles(&recipes));

    Ok(())
}

async fn delete(store: &JsonStore, id: &str) -> Result<()> {
    if !store.menus.delete(id).await? {
        anyhow::bail!("menu {id} not found");
    }

    tracing::info!(menu = %id, "menu deleted");

    Ok(())
}

pub async fn suggest(store: &JsonStore, count: usize) -> Result<()> {
    let recipes = store.recipes.get_all().await?;
    let history = store.menus.get_all().await?;

    let ids = {
        let engine = SuggestionEngine::new(&recipes, &history);
        engine.suggest(
            &Suggest::new(count, OffsetDateTime::now_utc()),
            &mut rand::rng(),
        )
    };

    let titles = titles(&recipes);
    for id in ids.iter() {
        println!("{id}\t{}", titles.get(id.as_str()).copied().unwrap_or_default());
    }

    Ok(())
}

async fn find(store: &JsonStore, id: &str) -> Result<MenuGroup> {
    match store.menus.get(id).await? {
        Some(group) => Ok(group),
        None => anyhow::bail!("menu {id} not found"),
    }
}

fn titles(recipes: &[Recipe]) -> HashMap<&str, &str> {
    recipes
        .iter()
        .map(|r| (r.id.as_str(), r.title.as_str()))
        .collect()
}

fn print_group(group: &MenuGroup, titles: &HashMap<&str, &str>) {
    let cooked = group.slots.iter().filter(|s| s.done).count();
    println!(
        "{} {} ({cooked}/{} cooked)",
        group.id,
        group.date,
        group.slots.len()
    );

    for slot in group.slots.iter() {
        let mark = if slot.done { "x" } else { " " };
        let title = match slot.is_assigned() {
            true => titles
                .get(slot.recipe_id.as_str())
                .copied()
                .unwrap_or(slot.recipe_id.as_str()),
            false => "-",
        };

        println!("  [{mark}] {}. {title} ({} p.)", slot.num, slot.personnes);
    }
}
