//! Row geometry of the scrollable home page.
//!
//! The page is a single column of rows drawn under a sticky header that
//! overlays the first rows of the viewport:
//!
//! ```text
//! row 0                sticky header (overlays the viewport)
//! rows 1..=HERO        hero: logo and tagline
//! next INPUT rows      ingredient input box
//! one gap row
//! results_top()        results heading
//! card_top(0)..        one CARD_HEIGHT block per card
//! ```

pub const STICKY_HEADER_HEIGHT: u16 = 1;
pub const SCROLL_PADDING: u16 = 1;
pub const HERO_HEIGHT: u16 = 5;
pub const INPUT_HEIGHT: u16 = 3;
pub const SECTION_GAP: u16 = 1;
pub const RESULTS_HEADING_HEIGHT: u16 = 1;
pub const CARD_HEIGHT: u16 = 4;

pub fn input_top() -> u16 {
    STICKY_HEADER_HEIGHT + HERO_HEIGHT
}

pub fn results_top() -> u16 {
    input_top() + INPUT_HEIGHT + SECTION_GAP
}

pub fn card_top(index: usize) -> u16 {
    let index = u16::try_from(index).unwrap_or(u16::MAX);
    results_top()
        .saturating_add(RESULTS_HEADING_HEIGHT)
        .saturating_add(index.saturating_mul(CARD_HEIGHT))
}

/// Total page height for a results region holding `cards` cards (a message
/// occupies a single row).
pub fn page_height(cards: usize) -> u16 {
    if cards == 0 {
        results_top() + RESULTS_HEADING_HEIGHT + 1
    } else {
        card_top(cards)
    }
}

/// Offset that places `region_top` just under the sticky header, with padding.
pub fn scroll_offset_for(region_top: u16, header_height: u16, padding: u16) -> u16 {
    region_top.saturating_sub(header_height.saturating_add(padding))
}

/// Smallest change to `offset` that makes rows `[top, top + height)` visible
/// in a viewport of `viewport` rows whose first rows sit under the sticky
/// header.
pub fn offset_to_reveal(offset: u16, viewport: u16, top: u16, height: u16) -> u16 {
    let visible_top = offset + STICKY_HEADER_HEIGHT;
    let visible_bottom = offset + viewport;

    if top < visible_top {
        top.saturating_sub(STICKY_HEADER_HEIGHT)
    } else if top + height > visible_bottom {
        (top + height).saturating_sub(viewport).min(top.saturating_sub(STICKY_HEADER_HEIGHT))
    } else {
        offset
    }
}

/// Largest useful offset: the page bottom aligned with the viewport bottom
pub fn max_offset(page_height: u16, viewport: u16) -> u16 {
    page_height.saturating_sub(viewport)
}
