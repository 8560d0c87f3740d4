use super::grid::{self, GridView};
use super::ingredients::pantry_tokens;
use super::{focus, AppState, LoadingState, PANTRY_EMPTY, PANTRY_ERROR};
use crate::events::{DataEvent, Effect};

/// Pure state transition function for data events.
///
/// Returns the follow-up effect a transition requests, if any.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) -> Option<Effect> {
    match event {
        // Suggestions loaded from API
        DataEvent::SuggestionsLoaded {
            request_id,
            ingredients,
            suggestions,
        } => {
            if state.home.active_request != Some(request_id) {
                tracing::debug!("Ignoring superseded suggestion response {}", request_id);
                return None;
            }

            tracing::info!(
                "Received {} suggestions for '{}'",
                suggestions.len(),
                ingredients
            );

            state.home.active_request = None;
            state.home.loading = LoadingState::Loaded;

            let batch = state.home.next_batch();
            let view = grid::render_recipes(&suggestions, batch);
            state.session.suggestions = Some(suggestions);
            state.home.show(view);
            focus::scroll_into_view(&mut state.home, state.preferences.reduced_motion);

            let tokens = pantry_tokens(&ingredients);
            if tokens.is_empty() {
                None
            } else {
                Some(Effect::SaveToPantry { ingredients: tokens })
            }
        }

        // Suggestion request failed
        DataEvent::SuggestionsFailed { request_id, error } => {
            if state.home.active_request != Some(request_id) {
                tracing::debug!("Ignoring superseded suggestion failure {}", request_id);
                return None;
            }

            state.home.active_request = None;
            state.home.loading = LoadingState::Error(error);
            state.home.show(GridView::message(grid::MSG_FETCH_FAILED));
            None
        }

        // Image generated for the open recipe
        DataEvent::ImageGenerated { generation, image } => {
            let modal = &mut state.recipe_modal;
            if !modal.visible || modal.generation != generation {
                tracing::debug!("Discarding image for closed or replaced recipe modal");
                return None;
            }

            modal.image = Some(image);
            None
        }

        // Image generation failed; the placeholder stays
        DataEvent::ImageFailed { generation, error } => {
            if state.recipe_modal.generation == generation {
                tracing::debug!("Keeping placeholder image: {}", error);
            }
            None
        }

        // Pantry contents loaded
        DataEvent::PantryLoaded { ingredients } => {
            state.pantry.loading = LoadingState::Loaded;
            state.pantry.items = if ingredients.is_empty() {
                vec![PANTRY_EMPTY.to_string()]
            } else {
                ingredients
            };
            None
        }

        // Pantry load failed
        DataEvent::PantryLoadFailed { error } => {
            state.pantry.loading = LoadingState::Error(error);
            state.pantry.items = vec![PANTRY_ERROR.to_string()];
            None
        }
    }
}
