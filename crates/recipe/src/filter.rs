use popote_shared::recipe::{Category, Recipe, Season};

/// Catalog search criteria. Every active criterion must match; a recipe
/// lacking a field an active criterion looks at is rejected.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub name: String,
    pub seasons: Vec<Season>,
    pub categories: Vec<Category>,
    pub ingredients: Vec<String>,
    pub max_prep_time: Option<u32>,
    pub max_cost: Option<f64>,
    pub min_personnes: Option<u16>,
    pub max_personnes: Option<u16>,
}

impl RecipeFilter {
    pub fn is_active(&self) -> bool {
        !self.name.trim().is_empty()
            || !self.seasons.is_empty()
            || !self.categories.is_empty()
            || self.ingredients.iter().any(|i| !i.trim().is_empty())
            || self.max_prep_time.is_some()
            || self.max_cost.is_some()
            || self.min_personnes.is_some()
            || self.max_personnes.is_some()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let name = self.name.trim().to_lowercase();
        if !name.is_empty() && !recipe.title.to_lowercase().contains(&name) {
            return false;
        }

        if !self.seasons.is_empty() && !recipe.season.iter().any(|s| self.seasons.contains(s)) {
            return false;
        }

        if !self.categories.is_empty()
            && !recipe.category.iter().any(|c| self.categories.contains(c))
        {
            return false;
        }

        if let Some(max) = self.max_prep_time
            && !recipe.prep_time.is_some_and(|t| t <= max)
        {
            return false;
        }

        if let Some(max) = self.max_cost
            && !recipe.cost.is_some_and(|c| c <= max)
        {
            return false;
        }

        if let Some(min) = self.min_personnes
            && !recipe.personnes.is_some_and(|p| p >= min)
        {
            return false;
        }

        if let Some(max) = self.max_personnes
            && !recipe.personnes.is_some_and(|p| p <= max)
        {
            return false;
        }

        let names = recipe
            .ingredients
            .iter()
            .map(|i| i.name.to_lowercase())
            .collect::<Vec<_>>();

        self.ingredients
            .iter()
            .map(|needle| needle.trim().to_lowercase())
            .filter(|needle| !needle.is_empty())
            .all(|needle| names.iter().any(|name| name.contains(&needle)))
    }

    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use popote_shared::recipe::Ingredient;

    fn catalog() -> Vec<Recipe> {
        vec![
            Recipe {
                id: "ratatouille".to_owned(),
                title: "Ratatouille".to_owned(),
                ingredients: vec![
                    Ingredient::new("Courgettes", 2.0, "pièce"),
                    Ingredient::new("Aubergine", 1.0, "pièce"),
                ],
                season: vec![Season::Summer],
                category: vec![Category::MainCourse],
                personnes: Some(4),
                prep_time: Some(60),
                cost: Some(9.0),
                ..Default::default()
            },
            Recipe {
                id: "soupe".to_owned(),
                title: "Soupe de potiron".to_owned(),
                ingredients: vec![Ingredient::new("Potiron", 1.0, "kg")],
                season: vec![Season::Autumn, Season::Winter],
                category: vec![Category::Starter],
                personnes: Some(6),
                prep_time: Some(40),
                ..Default::default()
            },
            Recipe {
                id: "omelette".to_owned(),
                title: "Omelette".to_owned(),
                ingredients: vec![Ingredient::new("Oeufs", 3.0, "pièce")],
                ..Default::default()
            },
        ]
    }

    fn ids(recipes: Vec<&Recipe>) -> Vec<&str> {
        recipes.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_inactive_filter_keeps_everything() {
        let filter = RecipeFilter {
            ingredients: vec!["".to_owned(), "  ".to_owned()],
            ..Default::default()
        };

        assert!(!filter.is_active());
        assert_eq!(filter.apply(&catalog()).len(), 3);
    }

    #[test]
    fn test_name_and_season() {
        let catalog = catalog();
        let filter = RecipeFilter {
            name: " SOUPE ".to_owned(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&catalog)), vec!["soupe"]);

        let filter = RecipeFilter {
            seasons: vec![Season::Winter, Season::Summer],
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&catalog)), vec!["ratatouille", "soupe"]);
    }

    #[test]
    fn test_missing_field_rejected_when_criterion_active() {
        let catalog = catalog();
        let filter = RecipeFilter {
            max_cost: Some(10.0),
            ..Default::default()
        };

        assert_eq!(ids(filter.apply(&catalog)), vec!["ratatouille"]);
    }

    #[test]
    fn test_personnes_range_and_prep_time() {
        let catalog = catalog();
        let filter = RecipeFilter {
            min_personnes: Some(5),
            max_prep_time: Some(45),
            ..Default::default()
        };

        assert_eq!(ids(filter.apply(&catalog)), vec!["soupe"]);
    }

    #[test]
    fn test_every_ingredient_needed() {
        let catalog = catalog();
        let filter = RecipeFilter {
            ingredients: vec!["courgette".to_owned(), "AUBERG".to_owned()],
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&catalog)), vec!["ratatouille"]);

        let filter = RecipeFilter {
            ingredients: vec!["courgette".to_owned(), "potiron".to_owned()],
            ..Default::default()
        };
        assert!(filter.apply(&catalog).is_empty());
    }
}
