use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme::{self, Palette}};

pub fn render_help_popup(f: &mut Frame, screen: &Screen, palette: &Palette) {
    let help_items = get_help_items(screen);

    // Use shared popup frame
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        palette.accent_border_style(),
        palette,
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).style(palette.base_style()), inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    // Screen-specific help
    match screen {
        Screen::Home => {
            items.push(("i or /", "Edit ingredients"));
            items.push(("Enter", "Get suggestions (while editing)"));
            items.push(("Esc", "Stop editing"));
            items.push(("Ctrl+U", "Clear ingredients (while editing)"));
            items.push(("↑/k", "Previous recipe"));
            items.push(("↓/j", "Next recipe"));
            items.push(("Enter/→/l", "View selected recipe"));
            items.push(("PgUp/PgDn", "Scroll the page"));
            items.push(("v", "Show veg recipes"));
            items.push(("n", "Show non-veg recipes"));
            items.push(("a", "Show all suggestions"));
            items.push(("s", "Healthy swaps"));
            items.push(("p", "My pantry (d to download)"));
            items.push(("d", "Download recipe (in recipe view)"));
            items.push(("o", "Open image (in recipe view)"));
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g then g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
            items.push(("h/←/Esc", "Back to recipes"));
        }
    }

    // Global help
    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("t", "Toggle dark mode"));
    items.push(("g then l", "Go to logs"));
    items.push(("g then g", "Navigate to top"));
    items.push(("G", "Navigate to bottom"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));

    items
}
