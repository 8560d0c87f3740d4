use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph},
};

use super::{loading_indicator, popup};
use crate::state::{LoadingState, PantryPanelState};
use crate::ui::{layouts, theme::{self, Palette}};

const FOOTER: &str = "d: download pantry | Esc: close";

pub fn render_pantry_popup(f: &mut Frame, pantry: &PantryPanelState, palette: &Palette) {
    let inner = popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        " My Pantry ",
        palette.accent_border_style(),
        palette,
    );
    let (content_area, footer_area) = popup::split_footer(inner);

    if let LoadingState::Loading(_) = pantry.loading {
        let row = Rect {
            height: 1.min(content_area.height),
            ..content_area
        };
        loading_indicator::render_loading_indicator(f, row, &pantry.loading, "Loading pantry...");
    } else {
        let style = match pantry.loading {
            LoadingState::Error(_) => theme::error_style(),
            _ => palette.base_style(),
        };
        let items: Vec<ListItem> = pantry
            .items
            .iter()
            .map(|item| ListItem::new(format!("• {}", item)).style(style))
            .collect();
        f.render_widget(List::new(items), content_area);
    }

    f.render_widget(
        Paragraph::new(Span::styled(FOOTER, theme::help_text_style())).alignment(Alignment::Center),
        footer_area,
    );
}
