//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HELP_BAR_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Scrollable page above a help bar. The page draws its own sticky header.
///
/// Returns a tuple of (page_area, help_area)
pub fn page_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([Constraint::Min(5), Constraint::Length(HELP_BAR_HEIGHT)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Split a one-row header into left text and a right-aligned slot of `width`.
///
/// Returns (text_area, slot_area)
pub fn header_with_slot(area: Rect, width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(width)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Small popup (50% x 30%) - loading notice
    pub const SMALL: (u16, u16) = (50, 30);

    /// Medium popup (60% x 60%) - pantry and swaps lists
    pub const MEDIUM: (u16, u16) = (60, 60);

    /// Large popup (80% x 80%) - recipe details and help
    pub const LARGE: (u16, u16) = (80, 80);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout_reserves_help_bar() {
        let (page, help) = page_layout(Rect::new(0, 0, 80, 30));

        assert_eq!(help.height, HELP_BAR_HEIGHT);
        assert_eq!(page.height, 30 - 2 * SCREEN_MARGIN - HELP_BAR_HEIGHT);
        assert_eq!(page.y + page.height, help.y);
    }

    #[test]
    fn test_centered_popup_stays_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(60, 50, parent);

        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);
    }
}
