//! Edits on a schedule snapshot. Every function takes the group by value and
//! hands back the edited copy for the caller to store.

use popote_shared::mealplan::{MenuGroup, MenuSlot};
use rand::Rng;
use time::{Date, OffsetDateTime};

use crate::suggestion::{Suggest, SuggestionEngine};

pub fn new_group(
    id: impl Into<String>,
    date: Date,
    meals: u32,
    personnes: u16,
) -> popote_shared::Result<MenuGroup> {
    if meals == 0 {
        popote_shared::user!("a menu needs at least one meal");
    }

    if personnes == 0 {
        popote_shared::user!("personnes must be greater than 0");
    }

    Ok(MenuGroup {
        id: id.into(),
        date,
        number_of_meals: meals,
        slots: (1..=meals).map(|num| MenuSlot::empty(num, personnes)).collect(),
    })
}

/// Assigns `suggestions` in order to the slots that have no recipe yet.
pub fn fill_empty_slots(mut group: MenuGroup, suggestions: Vec<String>) -> MenuGroup {
    let mut suggestions = suggestions.into_iter();

    for slot in group.slots.iter_mut().filter(|s| !s.is_assigned()) {
        let Some(recipe_id) = suggestions.next() else {
            break;
        };

        slot.recipe_id = recipe_id;
        slot.done = false;
    }

    group
}

/// Replaces the recipe of slot `num` with a new suggestion that is neither
/// its current recipe nor used by another slot of the group. The group comes
/// back unchanged when no candidate is left.
pub fn refresh_slot<R: Rng + ?Sized>(
    mut group: MenuGroup,
    num: u32,
    engine: &SuggestionEngine<'_>,
    now: OffsetDateTime,
    rng: &mut R,
) -> popote_shared::Result<MenuGroup> {
    meal(&mut group, num)?;

    let used = group
        .slots
        .iter()
        .filter(|s| s.is_assigned())
        .map(|s| s.recipe_id.to_owned());

    let input = Suggest::new(1, now).excluding(used);
    let Some(recipe_id) = engine.suggest(&input, rng).into_iter().next() else {
        tracing::debug!(menu = %group.id, num, "no recipe left to refresh meal");
        return Ok(group);
    };

    if let Some(slot) = group.slot_mut(num) {
        slot.recipe_id = recipe_id;
        slot.done = false;
    }

    Ok(group)
}

pub fn set_done(mut group: MenuGroup, num: u32, done: bool) -> popote_shared::Result<MenuGroup> {
    let slot = meal(&mut group, num)?;
    slot.done = done;

    Ok(group)
}

pub fn clear_slot(mut group: MenuGroup, num: u32) -> popote_shared::Result<MenuGroup> {
    let slot = meal(&mut group, num)?;
    slot.recipe_id.clear();
    slot.done = false;

    Ok(group)
}

pub fn set_personnes(
    mut group: MenuGroup,
    num: u32,
    personnes: u16,
) -> popote_shared::Result<MenuGroup> {
    if personnes == 0 {
        popote_shared::user!("personnes must be greater than 0");
    }

    let slot = meal(&mut group, num)?;
    slot.personnes = personnes;

    Ok(group)
}

fn meal(group: &mut MenuGroup, num: u32) -> popote_shared::Result<&mut MenuSlot> {
    let pos = group.slots.iter().position(|s| s.num == num);

    match pos {
        Some(pos) => Ok(&mut group.slots[pos]),
        None => Err(popote_shared::Error::User(format!(
            "menu {} has no meal {num}",
            group.id
        ))),
    }
}

/// Most recent schedule first.
pub fn sort_by_date_desc(groups: &mut [MenuGroup]) {
    groups.sort_by(|a, b| b.date.cmp(&a.date));
}
