use std::collections::HashMap;

use popote_shared::recipe::Recipe;
use popote_shared::text::{compare_ignore_case, starts_with_lowercase, starts_with_uppercase};

/// Autocomplete vocabulary: every distinct ingredient name and unit, once
/// each, in their preferred spelling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientCatalog {
    pub names: Vec<String>,
    pub units: Vec<String>,
}

impl IngredientCatalog {
    pub fn build(recipes: &[Recipe]) -> Self {
        let mut names = Vocabulary::new(starts_with_uppercase);
        let mut units = Vocabulary::new(starts_with_lowercase);

        for ingredient in recipes
            .iter()
            .flat_map(|r| r.ingredients.iter())
            .filter(|i| i.is_valid())
        {
            names.insert(&ingredient.name);
            units.insert(&ingredient.unit);
        }

        let catalog = Self {
            names: names.into_sorted(),
            units: units.into_sorted(),
        };

        tracing::debug!(
            recipes = recipes.len(),
            names = catalog.names.len(),
            units = catalog.units.len(),
            "ingredient catalog built"
        );

        catalog
    }
}

/// Case-insensitive set that remembers one display form per entry.
struct Vocabulary {
    preferred: fn(&str) -> bool,
    index: HashMap<String, usize>,
    values: Vec<String>,
}

impl Vocabulary {
    fn new(preferred: fn(&str) -> bool) -> Self {
        Self {
            preferred,
            index: HashMap::new(),
            values: Vec::new(),
        }
    }

    fn insert(&mut self, value: &str) {
        let value = value.trim();
        let lower = value.to_lowercase();

        match self.index.get(&lower) {
            Some(&pos) => {
                let existing = &self.values[pos];
                if (self.preferred)(value) && !(self.preferred)(existing) {
                    self.values[pos] = value.to_owned();
                }
            }
            None => {
                self.index.insert(lower, self.values.len());
                self.values.push(value.to_owned());
            }
        }
    }

    fn into_sorted(mut self) -> Vec<String> {
        self.values.sort_by(|a, b| compare_ignore_case(a, b));
        self.values
    }
}
