use popote_shared::recipe::Recipe;

/// Rescales a recipe to a number of diners.
///
/// Quantities are multiplied by `personnes / base` with no rounding, `base`
/// being the recipe's declared serving count or [`crate::DEFAULT_PERSONNES`].
/// The returned copy carries `personnes` as its serving count.
pub fn scale(recipe: &Recipe, personnes: u16) -> popote_shared::Result<Recipe> {
    if personnes == 0 {
        popote_shared::user!("personnes must be greater than 0");
    }

    let base = recipe.base_personnes();
    let mut scaled = recipe.clone();
    scaled.personnes = Some(personnes);

    if personnes == base {
        return Ok(scaled);
    }

    let factor = f64::from(personnes) / f64::from(base);
    for ingredient in scaled.ingredients.iter_mut() {
        ingredient.quantity *= factor;
    }

    tracing::debug!(recipe = %recipe.id, base, personnes, factor, "recipe scaled");

    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use popote_shared::Error;
    use popote_shared::recipe::{Ingredient, Season};

    fn crepes() -> Recipe {
        Recipe {
            id: "crepes".to_owned(),
            title: "Crêpes".to_owned(),
            description: "Mélanger, laisser reposer, cuire.".to_owned(),
            season: vec![Season::Winter],
            personnes: Some(4),
            ingredients: vec![
                Ingredient::new("Farine", 250.0, "g"),
                Ingredient::new("Lait", 0.55, "l"),
                Ingredient::new("Oeufs", 3.0, "pièce"),
                Ingredient::new("Sel", 0.1, "pincée"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_scale_to_base_is_identity() {
        let recipe = crepes();
        let scaled = scale(&recipe, 4).unwrap();

        for (a, b) in recipe.ingredients.iter().zip(scaled.ingredients.iter()) {
            assert_eq!(a.quantity.to_bits(), b.quantity.to_bits());
        }
        assert_eq!(scaled, recipe);
    }

    #[test]
    fn test_scale_doubles() {
        let recipe = crepes();
        let scaled = scale(&recipe, 8).unwrap();

        for (a, b) in recipe.ingredients.iter().zip(scaled.ingredients.iter()) {
            assert_eq!(b.quantity, a.quantity * 2.0);
            assert_eq!(a.name, b.name);
            assert_eq!(a.unit, b.unit);
        }
        assert_eq!(scaled.personnes, Some(8));
        assert_eq!(scaled.title, recipe.title);
        assert_eq!(scaled.description, recipe.description);
        assert_eq!(scaled.season, recipe.season);
        assert_eq!(recipe.personnes, Some(4));
    }

    #[test]
    fn test_scale_without_base_uses_default() {
        let mut recipe = crepes();
        recipe.personnes = None;

        let scaled = scale(&recipe, 2).unwrap();
        assert_eq!(scaled.ingredients[0].quantity, 125.0);
        assert_eq!(scaled.personnes, Some(2));
    }

    #[test]
    fn test_scale_chain_matches_direct() {
        let recipe = crepes();
        let chained = scale(&scale(&recipe, 2).unwrap(), 8).unwrap();
        let direct = scale(&recipe, 8).unwrap();

        assert_eq!(chained.ingredients[0].quantity, direct.ingredients[0].quantity);
        assert_eq!(chained.ingredients[2].quantity, direct.ingredients[2].quantity);
    }

    #[test]
    fn test_scale_zero_rejected() {
        assert!(matches!(scale(&crepes(), 0), Err(Error::User(_))));
    }
}
