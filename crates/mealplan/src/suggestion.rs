use std::collections::HashSet;

use popote_shared::mealplan::MenuGroup;
use popote_shared::recipe::Recipe;
use rand::Rng;
use rand::seq::SliceRandom;
use time::OffsetDateTime;

pub struct Suggest {
    pub count: usize,
    pub now: OffsetDateTime,
    /// Ids already used elsewhere in the batch being edited.
    pub exclude: HashSet<String>,
}

impl Suggest {
    pub fn new(count: usize, now: OffsetDateTime) -> Self {
        Self {
            count,
            now,
            exclude: HashSet::new(),
        }
    }

    pub fn excluding<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(ids.into_iter().map(Into::into));
        self
    }
}

/// Proposes recipes for upcoming meals from a catalog snapshot, preferring
/// recipes that were not cooked during the last month.
pub struct SuggestionEngine<'a> {
    recipes: &'a [Recipe],
    history: &'a [MenuGroup],
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(recipes: &'a [Recipe], history: &'a [MenuGroup]) -> Self {
        Self { recipes, history }
    }

    /// Ids cooked in a schedule dated on or after `now - 1 month`.
    pub fn recently_cooked(&self, now: OffsetDateTime) -> HashSet<&'a str> {
        let cutoff = crate::recent_cutoff(now);

        self.history
            .iter()
            .filter(|group| group.date >= cutoff)
            .flat_map(|group| group.cooked_recipe_ids())
            .collect()
    }

    /// At most `input.count` distinct ids: every fresh candidate in random
    /// order, then recently cooked ones. Returns fewer ids when the catalog
    /// runs out; never fails. Pass a seeded `StdRng` for a reproducible order.
    pub fn suggest<R: Rng + ?Sized>(&self, input: &Suggest, rng: &mut R) -> Vec<String> {
        let recent = self.recently_cooked(input.now);
        let mut seen = HashSet::new();
        let mut fresh_ids = vec![];
        let mut recent_ids = vec![];

        for recipe in self.recipes {
            let id = recipe.id.as_str();
            if id.is_empty() || input.exclude.contains(id) || !seen.insert(id) {
                continue;
            }

            if recent.contains(id) {
                recent_ids.push(id);
            } else {
                fresh_ids.push(id);
            }
        }

        fresh_ids.shuffle(rng);
        recent_ids.shuffle(rng);

        let ids = fresh_ids
            .iter()
            .chain(recent_ids.iter())
            .take(input.count)
            .map(|id| (*id).to_owned())
            .collect::<Vec<_>>();

        tracing::debug!(
            requested = input.count,
            fresh = fresh_ids.len(),
            recent = recent_ids.len(),
            excluded = input.exclude.len(),
            suggested = ids.len(),
            "recipes suggested"
        );

        ids
    }
}
