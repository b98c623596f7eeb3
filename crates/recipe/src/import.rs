use std::str::FromStr;

use popote_shared::recipe::{Category, Ingredient, Recipe, Season};
use serde::Deserialize;
use serde_json::Value;
use ulid::Ulid;

/// `season` / `category` as found in exported files: a single label or a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Labels {
    One(String),
    Many(Vec<String>),
}

impl Labels {
    fn parse<T: FromStr>(labels: Option<Labels>, recipe: &str) -> Vec<T> {
        let labels = match labels {
            Some(Labels::One(label)) => vec![label],
            Some(Labels::Many(labels)) => labels,
            None => return vec![],
        };

        let mut values = vec![];
        for label in labels {
            match T::from_str(label.trim()) {
                Ok(value) => values.push(value),
                Err(_) => tracing::warn!(recipe = %recipe, label = %label, "unknown label dropped"),
            }
        }

        values
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportedRecipe {
    #[serde(default)]
    id: Option<Value>,
    title: String,
    ingredients: Vec<Value>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    season: Option<Labels>,
    #[serde(default)]
    category: Option<Labels>,
    #[serde(default)]
    personnes: Option<u16>,
    #[serde(default)]
    prep_time: Option<u32>,
    #[serde(default)]
    cost: Option<f64>,
    #[serde(default)]
    image: Option<String>,
}

impl From<ImportedRecipe> for Recipe {
    fn from(value: ImportedRecipe) -> Self {
        let id = match value.id {
            Some(Value::String(id)) if !id.trim().is_empty() => id,
            _ => Ulid::new().to_string(),
        };

        let mut ingredients = vec![];
        for ingredient in value.ingredients {
            match serde_json::from_value::<Ingredient>(ingredient) {
                Ok(ingredient) => ingredients.push(ingredient),
                Err(err) => tracing::warn!(recipe = %id, err = %err, "malformed ingredient dropped"),
            }
        }

        Recipe {
            season: Labels::parse::<Season>(value.season, &id),
            category: Labels::parse::<Category>(value.category, &id),
            id,
            title: value.title,
            ingredients,
            description: value.description.unwrap_or_default(),
            personnes: value.personnes,
            prep_time: value.prep_time,
            cost: value.cost,
            image: value.image,
        }
    }
}

/// Parses a JSON array of recipes as produced by [`export_recipes`] or by
/// hand.
///
/// Entries without a string `title` or an `ingredients` array are skipped,
/// missing ids are generated and `season` / `category` labels are normalized
/// to typed lists.
pub fn import_recipes(json: &str) -> popote_shared::Result<Vec<Recipe>> {
    let value = serde_json::from_str::<Value>(json)
        .map_err(|err| popote_shared::Error::User(format!("recipe file is not valid JSON: {err}")))?;

    let Value::Array(items) = value else {
        popote_shared::user!("recipe file must contain an array of recipes");
    };

    let total = items.len();
    let mut recipes = Vec::with_capacity(total);

    for (pos, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<ImportedRecipe>(item) {
            Ok(imported) => recipes.push(Recipe::from(imported)),
            Err(err) => tracing::warn!(pos, err = %err, "invalid recipe skipped"),
        }
    }

    if recipes.is_empty() {
        popote_shared::user!("no valid recipe found");
    }

    tracing::info!(imported = recipes.len(), skipped = total - recipes.len(), "recipes imported");

    Ok(recipes)
}

pub fn export_recipes(recipes: &[Recipe]) -> popote_shared::Result<String> {
    Ok(serde_json::to_string_pretty(recipes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use popote_shared::Error;

    #[test]
    fn test_season_scalar_and_array() {
        let recipes = import_recipes(
            r#"[
                {"id":"a","title":"Ratatouille","ingredients":[],"season":"Été"},
                {"id":"b","title":"Pot-au-feu","ingredients":[],"season":["Automne","Hiver"]},
                {"id":"c","title":"Omelette","ingredients":[]}
            ]"#,
        )
        .unwrap();

        assert_eq!(recipes[0].season, vec![Season::Summer]);
        assert_eq!(recipes[1].season, vec![Season::Autumn, Season::Winter]);
        assert!(recipes[2].season.is_empty());
    }

    #[test]
    fn test_unknown_labels_dropped() {
        let recipes = import_recipes(
            r#"[{"id":"a","title":"Soupe","ingredients":[],"season":["Hiver","Mousson"],"category":"Plat"}]"#,
        )
        .unwrap();

        assert_eq!(recipes[0].season, vec![Season::Winter]);
        assert_eq!(recipes[0].category, vec![Category::MainCourse]);
    }

    #[test]
    fn test_invalid_entries_skipped() {
        let recipes = import_recipes(
            r#"[
                {"id":"a","title":"Quiche","ingredients":[{"name":"Oeufs","quantity":3,"unit":"pièce"}]},
                {"id":"b","ingredients":[]},
                {"id":"c","title":"Sans ingrédients"},
                {"id":"d","title":42,"ingredients":[]},
                "not a recipe"
            ]"#,
        )
        .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "a");
        assert_eq!(recipes[0].ingredients[0].quantity, 3.0);
    }

    #[test]
    fn test_missing_id_generated() {
        let recipes = import_recipes(
            r#"[{"title":"Gratin","ingredients":[]},{"id":"","title":"Flan","ingredients":[]}]"#,
        )
        .unwrap();

        assert!(!recipes[0].id.is_empty());
        assert!(!recipes[1].id.is_empty());
        assert_ne!(recipes[0].id, recipes[1].id);
    }

    #[test]
    fn test_malformed_ingredient_dropped() {
        let recipes = import_recipes(
            r#"[{"id":"a","title":"Pain","ingredients":[{"name":"Farine","quantity":"beaucoup","unit":"g"},{"name":"Eau","quantity":300,"unit":"ml"},{"name":"Sel"}]}]"#,
        )
        .unwrap();

        let ingredients = &recipes[0].ingredients;
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name, "Eau");
        assert!(!ingredients[1].is_valid());
    }

    #[test]
    fn test_not_an_array() {
        assert!(matches!(
            import_recipes(r#"{"id":"a"}"#),
            Err(Error::User(_))
        ));
        assert!(matches!(import_recipes("[]"), Err(Error::User(_))));
    }

    #[test]
    fn test_malformed_json_is_user_error() {
        assert!(matches!(import_recipes("nope"), Err(Error::User(_))));
        assert!(matches!(
            import_recipes(r#"[{"title":"Crêpes","#),
            Err(Error::User(_))
        ));
    }

    #[test]
    fn test_export_then_import() {
        let recipes = import_recipes(
            r#"[{"id":"a","title":"Tarte","ingredients":[{"name":"Pommes","quantity":4,"unit":"pièce"}],"season":"Automne","personnes":6,"prepTime":45,"cost":8.5}]"#,
        )
        .unwrap();

        let json = export_recipes(&recipes).unwrap();
        assert!(json.contains("\"prepTime\": 45"));
        assert_eq!(import_recipes(&json).unwrap(), recipes);
    }
}
