use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;
use mealmind_api::endpoints::meals::RecipeType;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: Ctrl+C always quits
    if event.modifiers.ctrl && key == Key::Char('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 1: Loading popup blocks everything but quit
    if state.home.loading.is_loading() {
        return match key {
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 2: Open popups capture keys, background stays inert
    if state.recipe_modal.visible {
        return handle_recipe_modal_keys(key);
    }
    if state.pantry.visible {
        return match key {
            Key::Esc | Key::Char('p') => Some(AppCommand::ClosePantry),
            Key::Char('d') => Some(AppCommand::DownloadPantry),
            _ => None,
        };
    }
    if state.swaps.visible {
        return match key {
            Key::Esc | Key::Char('s') => Some(AppCommand::CloseHealthySwaps),
            _ => None,
        };
    }

    // Priority 3: Help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 4: Typing into the ingredient box
    if matches!(state.current_screen(), Screen::Home) && state.home.focus == Focus::Input {
        return handle_editing_keys(event);
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        // We have a pending key, handle the second key in the sequence
        return match (pending, key) {
            // 'g' followed by 'g' -> navigate to top
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            // 'g' followed by 'l' -> go to logs
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Global quit command
        (_, Key::Char('q')) => Some(AppCommand::Quit),

        // Multi-key sequence initiator: 'g' sets pending key
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        // Navigate to bottom: 'G' (Shift+g)
        (_, Key::Char('G')) => Some(AppCommand::NavigateToBottom),

        (_, Key::Char('t')) => Some(AppCommand::ToggleTheme),

        // Home screen
        (Screen::Home, Key::Char('i') | Key::Char('/')) => Some(AppCommand::EnterEditMode),
        (Screen::Home, Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Home, Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Home, Key::PageUp) => Some(AppCommand::ScrollPageUp),
        (Screen::Home, Key::PageDown) => Some(AppCommand::ScrollPageDown),
        (Screen::Home, Key::Home) => Some(AppCommand::NavigateToTop),
        (Screen::Home, Key::End) => Some(AppCommand::NavigateToBottom),
        (Screen::Home, Key::Enter | Key::Right | Key::Char('l')) => state
            .home
            .selected_card()
            .map(|card| AppCommand::OpenRecipe { card: card.id }),
        (Screen::Home, Key::Char('v')) => Some(AppCommand::FilterByType(RecipeType::Veg)),
        (Screen::Home, Key::Char('n')) => Some(AppCommand::FilterByType(RecipeType::NonVeg)),
        (Screen::Home, Key::Char('a')) => Some(AppCommand::ShowAllSuggestions),
        (Screen::Home, Key::Char('s')) => Some(AppCommand::OpenHealthySwaps),
        (Screen::Home, Key::Char('p')) => Some(AppCommand::OpenPantry),

        // Logs screen
        (Screen::Logs(..), Key::Left | Key::Char('h') | Key::Esc) => {
            Some(AppCommand::NavigateBack)
        }
        (Screen::Logs(..), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(..), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(..), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(..), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),
        (Screen::Logs(..), Key::Home) => Some(AppCommand::ScrollLogsToTop),
        (Screen::Logs(..), Key::End) => Some(AppCommand::ScrollLogsToBottom),

        // Ignore other keys
        _ => None,
    }
}

fn handle_recipe_modal_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Esc | Key::Char('q') => Some(AppCommand::CloseRecipe),
        Key::Char('d') => Some(AppCommand::ExportRecipe),
        Key::Char('o') => Some(AppCommand::OpenRecipeImage),
        _ => None,
    }
}

fn handle_editing_keys(event: KeyEvent) -> Option<AppCommand> {
    match event.key {
        Key::Char('u') if event.modifiers.ctrl => Some(AppCommand::ClearInput),
        Key::Enter => Some(AppCommand::GetMeals),
        Key::Esc | Key::Tab => Some(AppCommand::ExitEditMode),
        Key::Backspace => Some(AppCommand::DeleteInputChar),
        _ => event.typed_char().map(AppCommand::AppendInputChar),
    }
}
