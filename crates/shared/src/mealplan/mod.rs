use serde::{Deserialize, Serialize};
use time::Date;

use crate::recipe::DEFAULT_PERSONNES;

fn default_personnes() -> u16 {
    DEFAULT_PERSONNES
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuSlot {
    pub num: u32,
    /// Empty when no recipe is assigned. The recipe may no longer exist.
    #[serde(default)]
    pub recipe_id: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default = "default_personnes")]
    pub personnes: u16,
}

impl MenuSlot {
    pub fn empty(num: u32, personnes: u16) -> Self {
        Self {
            num,
            recipe_id: String::new(),
            done: false,
            personnes,
        }
    }

    pub fn is_assigned(&self) -> bool {
        !self.recipe_id.is_empty()
    }

    /// Assigned and not cooked yet: what still needs shopping.
    pub fn is_pending(&self) -> bool {
        self.is_assigned() && !self.done
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    pub id: String,
    pub date: Date,
    pub number_of_meals: u32,
    #[serde(rename = "menus", alias = "slots", default)]
    pub slots: Vec<MenuSlot>,
}

impl MenuGroup {
    pub fn slot(&self, num: u32) -> Option<&MenuSlot> {
        self.slots.iter().find(|s| s.num == num)
    }

    pub fn slot_mut(&mut self, num: u32) -> Option<&mut MenuSlot> {
        self.slots.iter_mut().find(|s| s.num == num)
    }

    pub fn cooked_recipe_ids(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter(|s| s.done && s.is_assigned())
            .map(|s| s.recipe_id.as_str())
    }
}
