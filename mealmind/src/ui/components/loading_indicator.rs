use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_EIGHT};

use crate::state::LoadingState;
use crate::ui::theme;

/// Render a throbber followed by `label` while loading.
///
/// Other states draw nothing; callers render the loaded content instead.
pub fn render_loading_indicator(f: &mut Frame, area: Rect, loading_state: &LoadingState, label: &str) {
    let LoadingState::Loading(throbber_state) = loading_state else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let throbber = Throbber::default()
        .throbber_set(BRAILLE_EIGHT)
        .throbber_style(theme::loading_style());
    f.render_stateful_widget(throbber, chunks[0], &mut throbber_state.clone());

    f.render_widget(
        Paragraph::new(Span::styled(label, theme::loading_style())),
        chunks[1],
    );
}
