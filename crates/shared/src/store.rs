use async_trait::async_trait;

use crate::mealplan::MenuGroup;
use crate::recipe::Recipe;

/// Recipe persistence. The planning logic only ever reads a `get_all`
/// snapshot; mutation stays on this side of the boundary.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    async fn get_all(&self) -> crate::Result<Vec<Recipe>>;

    async fn get(&self, id: &str) -> crate::Result<Option<Recipe>> {
        Ok(self.get_all().await?.into_iter().find(|r| r.id == id))
    }

    /// Inserts or replaces by id and returns the stored record.
    async fn save(&self, recipe: Recipe) -> crate::Result<Recipe>;

    async fn delete(&self, id: &str) -> crate::Result<bool>;

    /// Drops the whole catalog and stores `recipes` in its place.
    async fn replace_all(&self, recipes: Vec<Recipe>) -> crate::Result<usize>;
}

#[async_trait]
pub trait MenuScheduleStore: Send + Sync {
    async fn get_all(&self) -> crate::Result<Vec<MenuGroup>>;

    async fn get(&self, id: &str) -> crate::Result<Option<MenuGroup>> {
        Ok(self.get_all().await?.into_iter().find(|g| g.id == id))
    }

    async fn save(&self, group: MenuGroup) -> crate::Result<MenuGroup>;

    async fn delete(&self, id: &str) -> crate::Result<bool>;
}
