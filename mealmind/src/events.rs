use mealmind_api::endpoints::meals::{Recipe, RecipeType};
use std::path::PathBuf;

use crate::state::CardId;

/// Commands to execute (user actions → state changes and effects)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Ingredient input
    EnterEditMode,
    ExitEditMode,
    AppendInputChar(char),
    DeleteInputChar,
    ClearInput,

    // Suggestions
    GetMeals,
    FilterByType(RecipeType),
    ShowAllSuggestions,

    // Page navigation
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,
    ScrollPageUp,
    ScrollPageDown,
    NavigateBack,

    // Recipe modal
    OpenRecipe { card: CardId },
    CloseRecipe,
    ExportRecipe,
    OpenRecipeImage,

    // Pantry
    OpenPantry,
    ClosePantry,
    DownloadPantry,

    // Healthy swaps
    OpenHealthySwaps,
    CloseHealthySwaps,

    // Theme
    ToggleTheme,
    ToggleHelp,

    // Log screen
    NavigateToLogs,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Side effects requested by a state transition.
///
/// State changes are applied synchronously; effects are handed to whoever
/// owns the network client and the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchSuggestions {
        request_id: u64,
        ingredients: String,
    },
    GenerateImage {
        generation: u64,
        recipe_name: String,
    },
    LoadPantry,
    SaveToPantry {
        ingredients: Vec<String>,
    },
    OpenPantryDownload,
    OpenUrl {
        url: String,
    },
    ExportRecipe {
        recipe: Box<Recipe>,
        dir: PathBuf,
    },
}

/// Events from background tasks (responses to effects)
#[derive(Debug, Clone)]
pub enum DataEvent {
    SuggestionsLoaded {
        request_id: u64,
        ingredients: String,
        suggestions: Vec<Recipe>,
    },
    SuggestionsFailed {
        request_id: u64,
        error: String,
    },

    ImageGenerated {
        generation: u64,
        image: String,
    },
    ImageFailed {
        generation: u64,
        error: String,
    },

    PantryLoaded {
        ingredients: Vec<String>,
    },
    PantryLoadFailed {
        error: String,
    },
}
