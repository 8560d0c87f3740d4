pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod loading_popup;
pub mod pantry_popup;
pub mod popup;
pub mod recipe_modal;
pub mod swaps_popup;
