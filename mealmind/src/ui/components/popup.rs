//! Shared popup/modal base component.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::ui::layouts;
use crate::ui::theme::Palette;

/// Render a popup frame and return the inner area for content.
///
/// This handles:
/// - Centering the popup
/// - Clearing the background
/// - Drawing the border with title over the palette background
///
/// # Arguments
/// * `size` - Tuple of (width_percent, height_percent)
/// * `title` - The popup title
/// * `border_style` - Style for the border
///
/// # Returns
/// The inner area where popup content should be rendered
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: (u16, u16),
    title: &str,
    border_style: Style,
    palette: &Palette,
) -> Rect {
    let area = layouts::centered_popup(size.0, size.1, parent_area);

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(palette.base_style());

    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}

/// Split a popup body into content and a one-row footer for key hints
pub fn split_footer(inner: Rect) -> (Rect, Rect) {
    let footer_height = 1.min(inner.height);
    let content = Rect {
        height: inner.height - footer_height,
        ..inner
    };
    let footer = Rect {
        y: inner.y + content.height,
        height: footer_height,
        ..inner
    };
    (content, footer)
}
