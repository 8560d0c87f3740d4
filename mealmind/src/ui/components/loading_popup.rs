use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{loading_indicator, popup};
use crate::state::HomeState;
use crate::ui::{layouts, theme::{self, Palette}};

/// Blocking notice shown while suggestions are being fetched
pub fn render_loading_popup(f: &mut Frame, home: &HomeState, palette: &Palette) {
    let inner = popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        " Getting suggestions ",
        theme::info_border_style(),
        palette,
    );

    if inner.height == 0 {
        return;
    }

    let middle = inner.y + inner.height / 2;
    let throbber_row = Rect {
        y: middle.saturating_sub(1).max(inner.y),
        height: 1,
        ..inner
    };
    loading_indicator::render_loading_indicator(f, throbber_row, &home.loading, "Cooking up ideas...");

    if middle + 1 < inner.y + inner.height {
        let searched = Paragraph::new(Line::from(vec![
            Span::styled("Searching: ", palette.muted_style()),
            Span::raw(home.searched.as_str()),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(searched, Rect { y: middle + 1, height: 1, ..inner });
    }
}
