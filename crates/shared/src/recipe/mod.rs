use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Serving count assumed by a recipe that does not declare one.
pub const DEFAULT_PERSONNES: u16 = 4;

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Season {
    #[serde(rename = "Printemps")]
    #[strum(serialize = "Printemps")]
    Spring,
    #[serde(rename = "Été")]
    #[strum(serialize = "Été")]
    Summer,
    #[serde(rename = "Automne")]
    #[strum(serialize = "Automne")]
    Autumn,
    #[serde(rename = "Hiver")]
    #[strum(serialize = "Hiver")]
    Winter,
}

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Category {
    #[serde(rename = "Apéritif")]
    #[strum(serialize = "Apéritif")]
    Appetizer,
    #[serde(rename = "Entrée")]
    #[strum(serialize = "Entrée")]
    Starter,
    #[serde(rename = "Plat")]
    #[strum(serialize = "Plat")]
    MainCourse,
    #[serde(rename = "Accompagnement")]
    #[strum(serialize = "Accompagnement")]
    Accompaniment,
    #[serde(rename = "Dessert")]
    #[strum(serialize = "Dessert")]
    Dessert,
    #[serde(rename = "Boisson")]
    #[strum(serialize = "Boisson")]
    Drink,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    /// Blank names or units and negative quantities never reach a shopping
    /// list or the autocomplete catalog.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.unit.trim().is_empty()
            && self.quantity.is_finite()
            && self.quantity >= 0.0
    }

    /// Merge identity: trimmed, lowercased name and unit.
    pub fn key(&self) -> String {
        crate::text::merge_key(&self.name, &self.unit)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<Season>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personnes: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Recipe {
    /// Serving count the stored quantities were written for.
    pub fn base_personnes(&self) -> u16 {
        match self.personnes {
            Some(personnes) if personnes > 0 => personnes,
            _ => DEFAULT_PERSONNES,
        }
    }
}
