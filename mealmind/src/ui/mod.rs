pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use ratatui::{widgets::Block, Frame};
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    let palette = state.theme.palette();
    f.render_widget(Block::default().style(palette.base_style()), f.area());

    // Render the current screen
    match state.current_screen() {
        Screen::Home => {
            home_screen::render(f, state);
        }
        Screen::Logs(logs_state) => {
            logs_screen::render(f, logs_state, log_buffer, &palette, state.status.as_deref());
        }
    }

    // Popups, bottom to top
    if state.recipe_modal.visible {
        components::recipe_modal::render_recipe_modal(f, &state.recipe_modal, &palette);
    }
    if state.pantry.visible {
        components::pantry_popup::render_pantry_popup(f, &state.pantry, &palette);
    }
    if state.swaps.visible {
        components::swaps_popup::render_swaps_popup(f, &state.swaps, &palette);
    }
    if state.home.loading.is_loading() {
        components::loading_popup::render_loading_popup(f, &state.home, &palette);
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen(), &palette);
    }
}
