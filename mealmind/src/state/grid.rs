//! Recipe grid: the cards currently shown on the home page and the derived
//! views (type filter, healthy swaps) computed from the session cache.

use itertools::Itertools;
use mealmind_api::endpoints::meals::{Recipe, RecipeType};

use super::SessionState;

pub const MSG_EMPTY_INPUT: &str = "Please enter at least one ingredient.";
pub const MSG_FETCH_FAILED: &str = "Unable to fetch recipes. Please try again later.";
pub const MSG_NO_RECIPES: &str = "No recipes found.";
pub const MSG_FETCH_FIRST: &str = "Click Get Suggestions first.";
pub const MSG_NO_SWAPS_AVAILABLE: &str = "No swaps available.";
pub const MSG_NO_SWAPS_FOUND: &str = "No healthy swaps found.";

pub fn no_type_message(recipe_type: RecipeType) -> String {
    format!("No {} recipes found for your ingredients.", recipe_type)
}

/// Identifies one card within one render batch.
///
/// Cards are resolved by id rather than by recipe name, so two recipes
/// sharing a name each open their own details, and an id from an older
/// batch never resolves against a newer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    batch: u64,
    index: usize,
}

impl CardId {
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub id: CardId,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeGrid {
    batch: u64,
    cards: Vec<RecipeCard>,
}

impl RecipeGrid {
    fn new(batch: u64, recipes: Vec<Recipe>) -> Self {
        let duplicates: Vec<&str> = recipes
            .iter()
            .map(|r| r.name.as_str())
            .duplicates()
            .collect();
        if !duplicates.is_empty() {
            tracing::warn!(
                "Render batch {} contains duplicate recipe names: {}",
                batch,
                duplicates.join(", ")
            );
        }

        let cards = recipes
            .into_iter()
            .enumerate()
            .map(|(index, recipe)| RecipeCard {
                id: CardId { batch, index },
                recipe,
            })
            .collect();

        Self { batch, cards }
    }

    pub fn cards(&self) -> &[RecipeCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_at(&self, index: usize) -> Option<&RecipeCard> {
        self.cards.get(index)
    }

    pub fn get(&self, id: CardId) -> Option<&Recipe> {
        if id.batch != self.batch {
            return None;
        }
        self.cards.get(id.index).map(|card| &card.recipe)
    }
}

/// What the results region currently shows
#[derive(Default, Debug, Clone, PartialEq)]
pub enum GridView {
    /// Nothing rendered yet this session
    #[default]
    Empty,
    Message(String),
    Cards(RecipeGrid),
}

impl GridView {
    pub fn message(text: impl Into<String>) -> Self {
        GridView::Message(text.into())
    }

    pub fn grid(&self) -> Option<&RecipeGrid> {
        match self {
            GridView::Cards(grid) => Some(grid),
            _ => None,
        }
    }

    pub fn card_count(&self) -> usize {
        self.grid().map(RecipeGrid::len).unwrap_or(0)
    }
}

/// Shared render path: drops recipes without a single matched ingredient and
/// keeps response order.
pub fn render_recipes(recipes: &[Recipe], batch: u64) -> GridView {
    let visible: Vec<Recipe> = recipes.iter().filter(|r| r.has_matches()).cloned().collect();

    if visible.is_empty() {
        return GridView::message(MSG_NO_RECIPES);
    }

    GridView::Cards(RecipeGrid::new(batch, visible))
}

/// Re-render the session cache restricted to one recipe type
pub fn filter_by_type(session: &SessionState, recipe_type: RecipeType, batch: u64) -> GridView {
    let suggestions = match session.suggestions.as_deref() {
        Some(suggestions) if !suggestions.is_empty() => suggestions,
        _ => return GridView::message(MSG_FETCH_FIRST),
    };

    let filtered: Vec<Recipe> = suggestions
        .iter()
        .filter(|r| r.recipe_type == recipe_type)
        .cloned()
        .collect();

    if filtered.is_empty() {
        return GridView::message(no_type_message(recipe_type));
    }

    render_recipes(&filtered, batch)
}

/// Re-render the whole session cache
pub fn show_all(session: &SessionState, batch: u64) -> GridView {
    match session.suggestions.as_deref() {
        Some(suggestions) if !suggestions.is_empty() => render_recipes(suggestions, batch),
        _ => GridView::message(MSG_FETCH_FIRST),
    }
}

/// Lines for the healthy swaps panel, derived from the session cache
pub fn healthy_swaps(session: &SessionState) -> Vec<String> {
    let Some(suggestions) = session.suggestions.as_deref() else {
        return vec![MSG_NO_SWAPS_AVAILABLE.to_string()];
    };

    let swaps: Vec<String> = suggestions
        .iter()
        .filter_map(|r| {
            r.healthy_alternative()
                .map(|alternative| format!("{}: {}", r.name, alternative))
        })
        .collect();

    if swaps.is_empty() {
        vec![MSG_NO_SWAPS_FOUND.to_string()]
    } else {
        swaps
    }
}
