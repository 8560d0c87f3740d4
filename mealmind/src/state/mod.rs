pub mod focus;
pub mod grid;
pub mod ingredients;
pub mod page;
pub mod reducer;

pub use grid::{CardId, GridView, RecipeCard, RecipeGrid};

use crate::ui::screens::Screen;
use crate::ui::theme::{ThemeMode, ThemeState};
use focus::{PendingFocus, RegionAttributes};
use mealmind_api::endpoints::meals::Recipe;
use std::cell::Cell;
use std::path::PathBuf;
use throbber_widgets_tui::ThrobberState;

pub const PANTRY_EMPTY: &str = "No ingredients saved yet.";
pub const PANTRY_ERROR: &str = "Error loading pantry.";
pub const IMAGE_PLACEHOLDER: &str = "images/Placeholder.png";

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading(_))
    }
}

/// Which part of the home page owns keyboard input
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing into the ingredient box
    #[default]
    Input,
    /// Browsing recipe cards
    Results,
}

/// Per-session UI settings that commands need
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub reduced_motion: bool,
    pub export_dir: PathBuf,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            export_dir: std::env::temp_dir(),
        }
    }
}

/// Suggestions fetched during this session.
///
/// `None` until the first successful fetch, replaced by each later one.
/// Filters and healthy swaps read from here, never from the rendered grid.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SessionState {
    pub suggestions: Option<Vec<Recipe>>,
}

#[derive(Default, Debug, Clone)]
pub struct HomeState {
    pub input: String,
    pub focus: Focus,

    // Suggestion request
    pub loading: LoadingState,
    pub searched: String,
    pub active_request: Option<u64>,
    pub request_seq: u64,

    // Results region
    pub grid: GridView,
    pub render_batch: u64,
    pub selected: usize,
    pub results_attrs: RegionAttributes,
    pub pending_focus: Option<PendingFocus>,

    // Page scrolling
    pub page_offset: u16,
    /// Rows of the page viewport at the last draw
    pub viewport_height: Cell<u16>,
}

impl HomeState {
    /// Replace the results region wholesale
    pub fn show(&mut self, view: GridView) {
        self.grid = view;
        self.selected = 0;
    }

    pub fn next_batch(&mut self) -> u64 {
        self.render_batch += 1;
        self.render_batch
    }

    pub fn next_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.active_request = Some(self.request_seq);
        self.request_seq
    }

    pub fn selected_card(&self) -> Option<&RecipeCard> {
        self.grid.grid().and_then(|grid| grid.card_at(self.selected))
    }

    pub fn select_next(&mut self) {
        let count = self.grid.card_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
            self.reveal_selected();
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.grid.card_count();
        if count > 0 {
            self.selected = if self.selected == 0 {
                count - 1
            } else {
                self.selected - 1
            };
            self.reveal_selected();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.page_offset = 0;
    }

    pub fn select_last(&mut self) {
        let count = self.grid.card_count();
        if count > 0 {
            self.selected = count - 1;
            self.reveal_selected();
        }
    }

    pub fn scroll_page(&mut self, forward: bool) {
        let viewport = self.viewport();
        let step = viewport.saturating_sub(page::STICKY_HEADER_HEIGHT).max(1);
        let max = page::max_offset(page::page_height(self.grid.card_count()), viewport);

        self.page_offset = if forward {
            self.page_offset.saturating_add(step).min(max)
        } else {
            self.page_offset.saturating_sub(step)
        };
    }

    fn reveal_selected(&mut self) {
        self.page_offset = page::offset_to_reveal(
            self.page_offset,
            self.viewport(),
            page::card_top(self.selected),
            page::CARD_HEIGHT,
        );
    }

    fn viewport(&self) -> u16 {
        // Before the first draw assume a small terminal
        match self.viewport_height.get() {
            0 => 24,
            height => height,
        }
    }
}

/// The recipe detail popup.
///
/// Closing only hides it; the next open overwrites every field.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct RecipeModalState {
    pub visible: bool,
    /// Bumped on every open; image results from older opens are dropped
    pub generation: u64,
    pub recipe: Option<Recipe>,
    /// Generated image reference, `None` while the placeholder shows
    pub image: Option<String>,
}

impl RecipeModalState {
    pub fn title(&self) -> &str {
        self.recipe.as_ref().map(|r| r.name.as_str()).unwrap_or_default()
    }

    pub fn calories_line(&self) -> String {
        calories_line(self.recipe.as_ref())
    }

    pub fn image_ref(&self) -> &str {
        self.image.as_deref().unwrap_or(IMAGE_PLACEHOLDER)
    }

    /// Image reference that can be opened in a browser
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_deref()
            .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
    }
}

pub fn calories_line(recipe: Option<&Recipe>) -> String {
    match recipe.and_then(Recipe::calories) {
        Some(calories) => format!("Calories: {}", calories),
        None => "Calories: N/A".to_string(),
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct PantryPanelState {
    pub visible: bool,
    pub loading: LoadingState,
    pub items: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct SwapsPanelState {
    pub visible: bool,
    pub items: Vec<String>,
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    pub home: HomeState,
    pub session: SessionState,
    pub recipe_modal: RecipeModalState,
    pub pantry: PantryPanelState,
    pub swaps: SwapsPanelState,

    // UI state
    pub theme: ThemeState,
    pub preferences: Preferences,
    pub status: Option<String>,
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_preferences(Preferences::default(), ThemeMode::default())
    }

    pub fn with_preferences(preferences: Preferences, mode: ThemeMode) -> Self {
        Self {
            history: vec![Screen::Home],

            home: HomeState::default(),
            session: SessionState::default(),
            recipe_modal: RecipeModalState::default(),
            pantry: PantryPanelState::default(),
            swaps: SwapsPanelState::default(),

            theme: ThemeState::new(mode),
            preferences,
            status: None,
            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    /// Whether a popup currently captures input (page scrolling is suspended)
    pub fn popup_open(&self) -> bool {
        self.recipe_modal.visible || self.pantry.visible || self.swaps.visible
    }

    /// Advance time-based UI state by one 100ms tick
    pub fn tick(&mut self) {
        if let LoadingState::Loading(ref mut throbber_state) = self.home.loading {
            throbber_state.calc_next();
        }
        if let LoadingState::Loading(ref mut throbber_state) = self.pantry.loading {
            throbber_state.calc_next();
        }
        focus::tick(&mut self.home);
        self.theme.tick();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
