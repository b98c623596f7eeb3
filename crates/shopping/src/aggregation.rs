use std::collections::HashMap;

use popote_shared::mealplan::{MenuGroup, MenuSlot};
use popote_shared::recipe::{Ingredient, Recipe};
use popote_shared::shopping::ShoppingItem;
use popote_shared::text::{compare_ignore_case, merge_key};

/// Running shopping list keyed by case-insensitive `(name, unit)`.
///
/// The first occurrence of a key fixes the displayed name and unit, later
/// ones only add their quantity. Units are never converted: "250 g" and
/// "2 c. à soupe" of the same ingredient stay two lines.
#[derive(Debug, Default, Clone)]
pub struct ShoppingList {
    index: HashMap<String, usize>,
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_ingredient(&mut self, ingredient: &Ingredient) {
        if !ingredient.is_valid() {
            return;
        }

        self.add(ingredient.key(), || ShoppingItem {
            name: ingredient.name.to_owned(),
            quantity: 0.0,
            unit: ingredient.unit.to_owned(),
        })
        .quantity += ingredient.quantity;
    }

    pub fn add_recipe(&mut self, recipe: &Recipe) {
        for ingredient in recipe.ingredients.iter() {
            self.add_ingredient(ingredient);
        }
    }

    /// Folds `other` in, as if its ingredients had been added after ours.
    pub fn merge(&mut self, other: ShoppingList) {
        for item in other.items {
            let quantity = item.quantity;
            let key = merge_key(&item.name, &item.unit);

            self.add(key, || ShoppingItem {
                quantity: 0.0,
                ..item
            })
            .quantity += quantity;
        }
    }

    /// Items by name then unit, case-insensitively. The order does not depend
    /// on the order ingredients were added in.
    pub fn into_items(mut self) -> Vec<ShoppingItem> {
        self.items.sort_by(|a, b| {
            compare_ignore_case(&a.name, &b.name)
                .then_with(|| compare_ignore_case(&a.unit, &b.unit))
        });
        self.items
    }

    fn add(&mut self, key: String, item: impl FnOnce() -> ShoppingItem) -> &mut ShoppingItem {
        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                self.items.push(item());
                self.index.insert(key, self.items.len() - 1);
                self.items.len() - 1
            }
        };

        &mut self.items[pos]
    }
}

pub struct ShoppingListAggregator;

impl ShoppingListAggregator {
    /// Sums the ingredients of every slot that has a recipe. Slots without a
    /// recipe, or whose recipe could not be found, add nothing.
    pub fn aggregate<'a, I>(slots: I) -> Vec<ShoppingItem>
    where
        I: IntoIterator<Item = (&'a MenuSlot, Option<&'a Recipe>)>,
    {
        let mut list = ShoppingList::new();

        for (slot, recipe) in slots {
            if !slot.is_assigned() {
                continue;
            }

            if let Some(recipe) = recipe {
                list.add_recipe(recipe);
            }
        }

        list.into_items()
    }

    /// Shopping list of one schedule: meals assigned and not cooked yet.
    pub fn for_group(group: &MenuGroup, recipes: &[Recipe]) -> Vec<ShoppingItem> {
        let recipes = by_id(recipes);
        let items = Self::aggregate(
            group
                .slots
                .iter()
                .filter(|s| s.is_pending())
                .map(|s| (s, recipes.get(s.recipe_id.as_str()).copied())),
        );

        tracing::debug!(menu = %group.id, items = items.len(), "menu shopping list aggregated");

        items
    }

    /// Shopping list across every schedule, built slot by slot and merged.
    pub fn pending(groups: &[MenuGroup], recipes: &[Recipe]) -> Vec<ShoppingItem> {
        let recipes = by_id(recipes);
        let mut list = ShoppingList::new();
        let mut slots = 0;

        for slot in groups.iter().flat_map(|g| g.slots.iter()).filter(|s| s.is_pending()) {
            let Some(recipe) = recipes.get(slot.recipe_id.as_str()) else {
                tracing::debug!(recipe = %slot.recipe_id, "scheduled recipe not found");
                continue;
            };

            let mut meal = ShoppingList::new();
            meal.add_recipe(recipe);
            list.merge(meal);
            slots += 1;
        }

        tracing::debug!(
            menus = groups.len(),
            slots,
            items = list.len(),
            "global shopping list aggregated"
        );

        list.into_items()
    }
}

fn by_id(recipes: &[Recipe]) -> HashMap<&str, &Recipe> {
    let mut map = HashMap::with_capacity(recipes.len());
    for recipe in recipes {
        map.entry(recipe.id.as_str()).or_insert(recipe);
    }
    map
}
