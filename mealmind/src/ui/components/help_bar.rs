//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render the help bar. A pending status notice replaces the key hints until
/// the next key press.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str, status: Option<&str>) {
    let help = match status {
        Some(status) => Paragraph::new(status).style(theme::loading_style()),
        None => Paragraph::new(text).style(theme::help_text_style()),
    };

    f.render_widget(
        help.alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
