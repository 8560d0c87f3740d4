use crate::background::{
    data_loader::DataLoader, BackgroundTaskManager, GENERATE_IMAGE_TASK, LOAD_PANTRY_TASK,
    SUGGEST_MEALS_TASK,
};
use crate::events::{AppCommand, Effect};
use crate::export;
use crate::state::grid::{self, GridView};
use crate::state::*;
use crate::ui::screens::Screen;
use throbber_widgets_tui::ThrobberState;

const LOGS_PAGE_SIZE: usize = 20;

/// Execute a command: apply its state transition, then run the effect it
/// requests on a background task
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    if let Some(effect) = apply_command(command, state) {
        perform_effect(effect, state, task_manager, data_loader);
    }
}

/// Pure state transition for a command.
///
/// Never touches the network or the filesystem; whatever needs doing outside
/// the state is returned as an [`Effect`].
pub fn apply_command(command: AppCommand, state: &mut AppState) -> Option<Effect> {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    let effect = match command {
        // Ingredient input
        AppCommand::EnterEditMode => {
            focus::cancel(&mut state.home);
            state.home.focus = Focus::Input;
            None
        }
        AppCommand::ExitEditMode => {
            state.home.focus = Focus::Results;
            None
        }
        AppCommand::AppendInputChar(c) => {
            state.home.input.push(c);
            None
        }
        AppCommand::DeleteInputChar => {
            state.home.input.pop();
            None
        }
        AppCommand::ClearInput => {
            state.home.input.clear();
            None
        }

        // Suggestions
        AppCommand::GetMeals => get_meals(state),
        AppCommand::FilterByType(recipe_type) => {
            let batch = state.home.next_batch();
            let view = grid::filter_by_type(&state.session, recipe_type, batch);
            state.home.show(view);
            None
        }
        AppCommand::ShowAllSuggestions => {
            let batch = state.home.next_batch();
            let view = grid::show_all(&state.session, batch);
            state.home.show(view);
            None
        }

        // Page navigation
        AppCommand::SelectNext => {
            if let Screen::Home = state.current_screen() {
                state.home.select_next();
            }
            None
        }
        AppCommand::SelectPrevious => {
            if let Screen::Home = state.current_screen() {
                state.home.select_prev();
            }
            None
        }
        AppCommand::NavigateToTop => {
            match state.current_screen_mut() {
                Screen::Home => state.home.select_first(),
                Screen::Logs(s) => s.scroll_offset = s.total_entries.saturating_sub(1),
            }
            None
        }
        AppCommand::NavigateToBottom => {
            match state.current_screen_mut() {
                Screen::Home => state.home.select_last(),
                Screen::Logs(s) => s.scroll_offset = 0,
            }
            None
        }
        AppCommand::ScrollPageUp => {
            state.home.scroll_page(false);
            None
        }
        AppCommand::ScrollPageDown => {
            state.home.scroll_page(true);
            None
        }
        AppCommand::NavigateBack => {
            // Navigate back in history (pop from navigation stack)
            state.navigate_back();
            None
        }

        // Recipe modal
        AppCommand::OpenRecipe { card } => open_recipe(state, card),
        AppCommand::CloseRecipe => {
            state.recipe_modal.visible = false;
            None
        }
        AppCommand::ExportRecipe => match (&state.recipe_modal.recipe, state.recipe_modal.visible) {
            (Some(recipe), true) => Some(Effect::ExportRecipe {
                recipe: Box::new(recipe.clone()),
                dir: state.preferences.export_dir.clone(),
            }),
            _ => None,
        },
        AppCommand::OpenRecipeImage => match state.recipe_modal.image_url() {
            Some(url) => Some(Effect::OpenUrl {
                url: url.to_string(),
            }),
            None => {
                state.status = Some("No image to open yet".to_string());
                None
            }
        },

        // Pantry
        AppCommand::OpenPantry => {
            state.pantry.visible = true;
            state.pantry.loading = LoadingState::Loading(ThrobberState::default());
            state.pantry.items.clear();
            Some(Effect::LoadPantry)
        }
        AppCommand::ClosePantry => {
            state.pantry.visible = false;
            None
        }
        AppCommand::DownloadPantry => Some(Effect::OpenPantryDownload),

        // Healthy swaps
        AppCommand::OpenHealthySwaps => {
            state.swaps.items = grid::healthy_swaps(&state.session);
            state.swaps.visible = true;
            None
        }
        AppCommand::CloseHealthySwaps => {
            state.swaps.visible = false;
            None
        }

        AppCommand::ToggleTheme => {
            state.theme.toggle();
            tracing::debug!("Theme switched to {:?}", state.theme.mode);
            None
        }
        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
            None
        }

        AppCommand::NavigateToLogs => {
            // Navigate to logs screen (no logging to avoid feedback loop)
            state.navigate_to(Screen::Logs(LogsState::default()));
            None
        }
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                // Scroll up means going back in time (increase offset)
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
            None
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
            None
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset =
                    (s.scroll_offset + LOGS_PAGE_SIZE).min(s.total_entries.saturating_sub(1));
            }
            None
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(LOGS_PAGE_SIZE);
            }
            None
        }
        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.total_entries.saturating_sub(1);
            }
            None
        }
        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = 0;
            }
            None
        }

        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
            None
        }
        AppCommand::ClearPendingKey => {
            state.pending_key = None;
            None
        }
        AppCommand::Quit => {
            state.should_quit = true;
            None
        }
    };

    // Clear pending key after any command except SetPendingKey
    // This ensures multi-key sequences are properly reset after completion
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }

    effect
}

fn get_meals(state: &mut AppState) -> Option<Effect> {
    let ingredients = state.home.input.trim().to_string();
    if ingredients.is_empty() {
        state.home.show(GridView::message(grid::MSG_EMPTY_INPUT));
        return None;
    }

    state.home.searched = ingredients.clone();
    state.home.loading = LoadingState::Loading(ThrobberState::default());
    let request_id = state.home.next_request();

    Some(Effect::FetchSuggestions {
        request_id,
        ingredients,
    })
}

fn open_recipe(state: &mut AppState, card: CardId) -> Option<Effect> {
    let Some(recipe) = state.home.grid.grid().and_then(|grid| grid.get(card)).cloned() else {
        tracing::warn!("Card {:?} is no longer on screen", card);
        return None;
    };

    let modal = &mut state.recipe_modal;
    modal.generation += 1;
    modal.visible = true;
    modal.image = None;
    let recipe_name = recipe.name.clone();
    modal.recipe = Some(recipe);

    Some(Effect::GenerateImage {
        generation: modal.generation,
        recipe_name,
    })
}

/// Run an effect: network effects go to background tasks, local ones run
/// inline and report through the status bar
pub fn perform_effect(
    effect: Effect,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    match effect {
        Effect::FetchSuggestions {
            request_id,
            ingredients,
        } => {
            let data_loader = data_loader.clone();
            task_manager.spawn_load_task(SUGGEST_MEALS_TASK, async move {
                data_loader.suggest_meals(request_id, ingredients).await;
            });
        }

        Effect::GenerateImage {
            generation,
            recipe_name,
        } => {
            let data_loader = data_loader.clone();
            task_manager.spawn_load_task(GENERATE_IMAGE_TASK, async move {
                data_loader.generate_image(generation, recipe_name).await;
            });
        }

        Effect::LoadPantry => {
            let data_loader = data_loader.clone();
            task_manager.spawn_load_task(LOAD_PANTRY_TASK, async move {
                data_loader.load_pantry().await;
            });
        }

        Effect::SaveToPantry { ingredients } => {
            let data_loader = data_loader.clone();
            task_manager.spawn_detached(async move {
                data_loader.save_to_pantry(ingredients).await;
            });
        }

        Effect::OpenPantryDownload => match data_loader.pantry_download_url() {
            Ok(url) => open_url(state, url.as_str()),
            Err(e) => {
                tracing::error!("Cannot build pantry download URL: {}", e);
                state.status = Some(format!("Pantry download unavailable: {}", e));
            }
        },

        Effect::OpenUrl { url } => open_url(state, &url),

        Effect::ExportRecipe { recipe, dir } => match export::export_recipe(&recipe, &dir) {
            Ok(path) => state.status = Some(format!("Saved {}", path.display())),
            Err(e) => {
                tracing::error!("Recipe export failed: {}", e);
                state.status = Some(e.to_string());
            }
        },
    }
}

fn open_url(state: &mut AppState, url: &str) {
    tracing::info!("Opening {}", url);
    if let Err(e) = open::that(url) {
        tracing::error!("Failed to open {}: {}", url, e);
        state.status = Some(format!("Could not open {}", url));
    }
}
