//! Centralized theme constants and style functions for consistent UI styling.
//!
//! Colors come from the palette of the active [`ThemeMode`]; layout constants
//! and style helpers that do not depend on the mode live here too.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Theme mode
// =============================================================================

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Glyph shown on the theme toggle: the mode you would switch to
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀",
        }
    }

    pub fn logo(self) -> &'static str {
        match self {
            ThemeMode::Light => LOGO_LIGHT,
            ThemeMode::Dark => LOGO_DARK,
        }
    }
}

pub const LOGO_LIGHT: &str = "🍲 MealMind";
pub const LOGO_DARK: &str = "🌮 MealMind";

/// Ticks (100ms each) the logo stays hidden while switching variants
pub const LOGO_FADE_TICKS: u8 = 2;

/// The logo next to the title, cross-faded when the theme changes
#[derive(Debug, Clone, PartialEq)]
pub struct LogoState {
    pub variant: ThemeMode,
    pub visible: bool,
    /// Ticks left before the new variant is revealed
    pub swap_in: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub logo: LogoState,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            logo: LogoState {
                variant: mode,
                visible: true,
                swap_in: None,
            },
        }
    }

    /// Flip the mode and start the logo cross-fade
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        self.logo.visible = false;
        self.logo.swap_in = Some(LOGO_FADE_TICKS);
    }

    pub fn tick(&mut self) {
        let Some(ticks) = self.logo.swap_in.as_mut() else {
            return;
        };

        *ticks = ticks.saturating_sub(1);
        if *ticks == 0 {
            self.logo.swap_in = None;
            self.logo.variant = self.mode;
            self.logo.visible = true;
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.mode)
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

// =============================================================================
// Colors
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub selection_bg: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: Color::Reset,
                text: Color::Reset,
                muted: Color::Gray,
                accent: Color::Cyan,
                selection_bg: Color::DarkGray,
            },
            ThemeMode::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Magenta,
                selection_bg: Color::Indexed(236),
            },
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for the selected card
    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent_border_style(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

/// Color for matched ingredients
pub const COLOR_MATCHED: Color = Color::Green;

/// Color for missing ingredients and inline error messages
pub const COLOR_ERROR: Color = Color::Red;

/// Color for table headers and list labels
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Border color for informational popups
pub const COLOR_BORDER_INFO: Color = Color::Blue;

/// Color for input fields when focused
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

/// Style for inline error messages in the results region
pub fn error_style() -> Style {
    Style::default().fg(COLOR_ERROR)
}

pub fn matched_style() -> Style {
    Style::default().fg(COLOR_MATCHED)
}

pub fn input_focused_style() -> Style {
    Style::default()
        .fg(COLOR_INPUT_FOCUSED)
        .add_modifier(Modifier::BOLD)
}

/// Style for info borders
pub fn info_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_INFO)
        .add_modifier(Modifier::BOLD)
}
