use std::collections::HashSet;

use popote_mealplan::{
    MenuGroup, MenuSlot, Suggest, SuggestionEngine, fill_empty_slots, new_group,
};
use popote_shared::recipe::Recipe;
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::macros::{date, datetime};

fn catalog(ids: &[&str]) -> Vec<Recipe> {
    ids.iter()
        .map(|id| Recipe {
            id: id.to_string(),
            title: id.to_string(),
            ..Default::default()
        })
        .collect()
}

fn cooked(id: &str, date: time::Date, ids: &[&str]) -> MenuGroup {
    MenuGroup {
        id: id.to_owned(),
        date,
        number_of_meals: ids.len() as u32,
        slots: ids
            .iter()
            .enumerate()
            .map(|(pos, recipe_id)| MenuSlot {
                num: pos as u32 + 1,
                recipe_id: recipe_id.to_string(),
                done: true,
                personnes: 4,
            })
            .collect(),
    }
}

#[test]
fn test_empty_catalog() {
    let engine = SuggestionEngine::new(&[], &[]);
    let ids = engine.suggest(
        &Suggest::new(5, datetime!(2025-10-19 09:00:00 UTC)),
        &mut StdRng::seed_from_u64(0),
    );

    assert!(ids.is_empty());
}

#[test]
fn test_fresh_first_then_recent() {
    let recipes = catalog(&["a", "b", "c", "d", "e"]);
    let history = vec![cooked("menu_1", date!(2025 - 10 - 05), &["a", "c"])];
    let engine = SuggestionEngine::new(&recipes, &history);

    let now = datetime!(2025-10-19 09:00:00 UTC);

    for seed in 0..20 {
        let ids = engine.suggest(&Suggest::new(5, now), &mut StdRng::seed_from_u64(seed));

        let fresh = ids[..3].iter().map(String::as_str).collect::<HashSet<_>>();
        let recent = ids[3..].iter().map(String::as_str).collect::<HashSet<_>>();
        assert_eq!(fresh, HashSet::from(["b", "d", "e"]));
        assert_eq!(recent, HashSet::from(["a", "c"]));
    }
}

#[test]
fn test_enough_fresh_means_no_recent() {
    let recipes = catalog(&["a", "b", "c", "d", "e"]);
    let history = vec![cooked("menu_1", date!(2025 - 10 - 05), &["a", "b"])];
    let engine = SuggestionEngine::new(&recipes, &history);
    let now = datetime!(2025-10-19 09:00:00 UTC);

    for seed in 0..20 {
        let ids = engine.suggest(&Suggest::new(3, now), &mut StdRng::seed_from_u64(seed));

        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| id != "a" && id != "b"));
    }
}

#[test]
fn test_old_history_is_fresh_again() {
    let recipes = catalog(&["a", "b"]);
    let history = vec![cooked("menu_1", date!(2025 - 08 - 01), &["a"])];
    let engine = SuggestionEngine::new(&recipes, &history);

    assert!(engine
        .recently_cooked(datetime!(2025-10-19 09:00:00 UTC))
        .is_empty());
}

#[test]
fn test_exclusion_and_count() {
    let recipes = catalog(&["a", "b", "c", "d", "e", "f"]);
    let engine = SuggestionEngine::new(&recipes, &[]);
    let now = datetime!(2025-10-19 09:00:00 UTC);

    for seed in 0..20 {
        let input = Suggest::new(4, now).excluding(["a", "f"]);
        let ids = engine.suggest(&input, &mut StdRng::seed_from_u64(seed));

        let unique = ids.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.len() <= 4);
        assert!(!unique.contains(&"a".to_owned()));
        assert!(!unique.contains(&"f".to_owned()));
    }
}

#[test]
fn test_new_menu_filled_from_suggestions() {
    let recipes = catalog(&["a", "b", "c"]);
    let engine = SuggestionEngine::new(&recipes, &[]);
    let now = datetime!(2025-10-19 09:00:00 UTC);

    let group = new_group("menu_1", date!(2025 - 10 - 20), 5, 2).unwrap();
    let ids = engine.suggest(&Suggest::new(5, now), &mut StdRng::seed_from_u64(9));
    let group = fill_empty_slots(group, ids);

    let assigned = group.slots[..3]
        .iter()
        .map(|s| s.recipe_id.as_str())
        .collect::<HashSet<_>>();
    assert_eq!(assigned, HashSet::from(["a", "b", "c"]));
    assert!(group.slots[3..].iter().all(|s| !s.is_assigned()));
}
