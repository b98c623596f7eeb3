use anyhow::Result;
use popote::store::JsonStore;
use popote_shared::{MenuScheduleStore, RecipeCatalog};
use popote_shopping::{ShoppingListAggregator, to_clipboard_text};

pub async fn print(store: &JsonStore, menu: Option<String>) -> Result<()> {
    let recipes = store.recipes.get_all().await?;

    let items = match menu {
        Some(id) => {
            let Some(group) = store.menus.get(&id).await? else {
                anyhow::bail!("menu {id} not found");
            };

            ShoppingListAggregator::for_group(&group, &recipes)
        }
        None => {
            let groups = store.menus.get_all().await?;
            ShoppingListAggregator::pending(&groups, &recipes)
        }
    };

    if items.is_empty() {
        tracing::info!("nothing left to buy");
        return Ok(());
    }

    println!("{}", to_clipboard_text(&items));

    Ok(())
}
