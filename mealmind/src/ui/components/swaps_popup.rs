use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph},
};

use super::popup;
use crate::state::SwapsPanelState;
use crate::ui::{layouts, theme::{self, Palette}};

pub fn render_swaps_popup(f: &mut Frame, swaps: &SwapsPanelState, palette: &Palette) {
    let inner = popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        " Healthy Swaps ",
        theme::info_border_style(),
        palette,
    );
    let (content_area, footer_area) = popup::split_footer(inner);

    let items: Vec<ListItem> = swaps
        .items
        .iter()
        .map(|line| match line.split_once(": ") {
            Some((name, alternative)) => ListItem::new(Line::from(vec![
                Span::styled(format!("{}: ", name), palette.title_style()),
                Span::styled(alternative, theme::matched_style()),
            ])),
            None => ListItem::new(Span::styled(line.as_str(), palette.muted_style())),
        })
        .collect();
    f.render_widget(List::new(items), content_area);

    f.render_widget(
        Paragraph::new(Span::styled("Esc: close", theme::help_text_style()))
            .alignment(Alignment::Center),
        footer_area,
    );
}
