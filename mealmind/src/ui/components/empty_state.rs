//! Bordered placeholder for panels that have nothing to show yet.

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Palette;

/// Center `message` one line below the top border of a titled block
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, palette: &Palette) {
    let lines = vec![Line::from(""), Line::styled(message, palette.muted_style())];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(palette.base_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.muted_style())
                .title(title),
        );

    f.render_widget(paragraph, area);
}
