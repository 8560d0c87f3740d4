use itertools::Itertools;
use ratatui::{prelude::*, widgets::Paragraph};

use crate::state::focus::DEFAULT_LABEL;
use crate::state::grid::{self, GridView, RecipeCard};
use crate::state::page::{self, CARD_HEIGHT, HERO_HEIGHT, INPUT_HEIGHT, STICKY_HEADER_HEIGHT};
use crate::state::{AppState, Focus, HomeState};
use crate::ui::components::help_bar;
use crate::ui::layouts;
use crate::ui::theme::{self, Palette, ThemeState};

const TAGLINE: &str = "Turn what's in your kitchen into dinner";
const INPUT_HINT: &str = "Ingredients, separated by commas";
const EMPTY_RESULTS_HINT: &str = "Type ingredients and press Enter to get suggestions";

pub fn render(f: &mut Frame, state: &AppState) {
    let (page_area, help_area) = layouts::page_layout(f.area());
    let palette = state.theme.palette();

    // Remember the viewport so keyboard scrolling can clamp to it
    state.home.viewport_height.set(page_area.height);

    let lines = page_lines(&state.home, &state.theme, &palette, page_area.width);
    let page = Paragraph::new(lines)
        .style(palette.base_style())
        .scroll((state.home.page_offset, 0));
    f.render_widget(page, page_area);

    render_sticky_header(f, page_area, &state.theme, &palette);
    render_help(f, help_area, state);
}

/// Every row of the page, top to bottom, laid out to match [`page`] geometry
fn page_lines<'a>(
    home: &'a HomeState,
    theme_state: &ThemeState,
    palette: &Palette,
    width: u16,
) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = Vec::with_capacity(page::page_height(home.grid.card_count()) as usize);

    // Rows hidden under the sticky header at offset 0
    lines.extend((0..STICKY_HEADER_HEIGHT).map(|_| Line::from("")));

    lines.extend(hero_lines(theme_state, palette));
    lines.extend(input_lines(home, palette, width));
    lines.push(Line::from(""));
    lines.extend(results_lines(home, palette));

    lines
}

fn hero_lines(theme_state: &ThemeState, palette: &Palette) -> Vec<Line<'static>> {
    let logo = if theme_state.logo.visible {
        theme_state.logo.variant.logo()
    } else {
        ""
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(logo, palette.title_style())).centered(),
        Line::from(Span::styled(TAGLINE, palette.muted_style())).centered(),
        Line::from(""),
        Line::from(""),
    ];
    debug_assert_eq!(lines.len(), HERO_HEIGHT as usize);
    lines
}

/// A bordered single-line text box drawn as three rows of text
fn input_lines<'a>(home: &'a HomeState, palette: &Palette, width: u16) -> Vec<Line<'a>> {
    let editing = home.focus == Focus::Input;
    let border_style = if editing {
        theme::input_focused_style()
    } else {
        palette.muted_style()
    };

    let inner = usize::from(width.saturating_sub(2));
    let title = format!(" {} ", INPUT_HINT);
    let top = format!(
        "╭{}{}╮",
        title,
        "─".repeat(inner.saturating_sub(title.chars().count()))
    );
    let bottom = format!("╰{}╯", "─".repeat(inner));

    let cursor = if editing { "▏" } else { "" };
    let content = format!(" {}{}", home.input, cursor);
    let padding = " ".repeat(inner.saturating_sub(content.chars().count()));

    let lines = vec![
        Line::from(Span::styled(top, border_style)),
        Line::from(vec![
            Span::styled("│", border_style),
            Span::raw(content),
            Span::raw(padding),
            Span::styled("│", border_style),
        ]),
        Line::from(Span::styled(bottom, border_style)),
    ];
    debug_assert_eq!(lines.len(), INPUT_HEIGHT as usize);
    lines
}

fn results_lines<'a>(home: &'a HomeState, palette: &Palette) -> Vec<Line<'a>> {
    let label = home.results_attrs.label.as_deref().unwrap_or(DEFAULT_LABEL);
    let live = if home.results_attrs.is_announcing() {
        " ●"
    } else {
        ""
    };
    let count = match home.grid.card_count() {
        0 => String::new(),
        n => format!(" ({})", n),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}{}", label, count), theme::header_style()),
        Span::styled(live, palette.muted_style()),
    ])];

    match &home.grid {
        GridView::Empty => {
            lines.push(Line::from(Span::styled(
                EMPTY_RESULTS_HINT,
                palette.muted_style(),
            )));
        }
        GridView::Message(message) => {
            lines.push(Line::from(Span::styled(
                message.as_str(),
                message_style(message, palette),
            )));
        }
        GridView::Cards(cards) => {
            let browsing = home.focus == Focus::Results;
            for (index, card) in cards.cards().iter().enumerate() {
                let selected = browsing && index == home.selected;
                lines.extend(card_lines(card, selected, palette));
            }
        }
    }

    lines
}

fn message_style(message: &str, palette: &Palette) -> Style {
    match message {
        grid::MSG_FETCH_FAILED | grid::MSG_EMPTY_INPUT => theme::error_style(),
        _ => palette.muted_style(),
    }
}

fn card_lines<'a>(card: &'a RecipeCard, selected: bool, palette: &Palette) -> Vec<Line<'a>> {
    let recipe = &card.recipe;
    let marker = if selected { "▶ " } else { "  " };
    let name_style = if selected {
        palette.selection_style()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{}{}", marker, recipe.name), name_style),
            Span::styled(format!("  [{}]", recipe.recipe_type), palette.muted_style()),
        ]),
        Line::from(vec![
            Span::raw("    Matched: "),
            Span::styled(recipe.matched_ingredients.iter().join(", "), theme::matched_style()),
        ]),
        Line::from(vec![
            Span::raw("    Missing: "),
            Span::styled(
                recipe.missing_ingredients.iter().join(", "),
                palette.muted_style(),
            ),
        ]),
        Line::from(""),
    ];
    if selected {
        lines[3] = Line::from(Span::styled("    Enter: View", palette.muted_style()));
    }
    debug_assert_eq!(lines.len(), CARD_HEIGHT as usize);
    lines
}

fn render_sticky_header(f: &mut Frame, page_area: Rect, theme_state: &ThemeState, palette: &Palette) {
    let header_area = Rect {
        height: STICKY_HEADER_HEIGHT.min(page_area.height),
        ..page_area
    };
    let toggle = format!("t {} ", theme_state.mode.toggle_glyph());
    let (logo_area, toggle_area) =
        layouts::header_with_slot(header_area, toggle.chars().count() as u16 + 1);

    let logo = if theme_state.logo.visible {
        theme_state.logo.variant.logo()
    } else {
        ""
    };

    f.render_widget(
        Paragraph::new(Span::styled(logo, palette.title_style())).style(palette.base_style()),
        logo_area,
    );
    f.render_widget(
        Paragraph::new(Span::styled(toggle, palette.accent_border_style()))
            .alignment(Alignment::Right)
            .style(palette.base_style()),
        toggle_area,
    );
}

fn render_help(f: &mut Frame, area: Rect, state: &AppState) {
    let help_text = match state.home.focus {
        Focus::Input => "Enter: get suggestions | Esc: browse | Ctrl+U: clear | ?: help",
        Focus::Results => {
            "j/k: select | Enter: view | v/n/a: veg/non-veg/all | s: swaps | p: pantry | t: theme | i: edit | q: quit"
        }
    };

    help_bar::render_help_bar(f, area, help_text, state.status.as_deref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::page::{card_top, results_top};
    use crate::testing::fixtures::recipe;
    use mealmind_api::endpoints::meals::RecipeType;
    use ratatui::{backend::TestBackend, Terminal};

    fn home_with_cards(count: usize) -> HomeState {
        let recipes: Vec<_> = (0..count)
            .map(|i| recipe(&format!("Recipe {}", i), RecipeType::Veg, &["egg"]))
            .collect();
        let mut home = HomeState::default();
        let batch = home.next_batch();
        home.show(grid::render_recipes(&recipes, batch));
        home
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_page_lines_match_geometry() {
        let home = home_with_cards(3);
        let theme_state = ThemeState::default();
        let palette = theme_state.palette();

        let lines = page_lines(&home, &theme_state, &palette, 60);

        assert_eq!(lines.len(), page::page_height(3) as usize);
        assert!(line_text(&lines[results_top() as usize]).starts_with(DEFAULT_LABEL));
        assert!(line_text(&lines[card_top(2) as usize]).contains("Recipe 2"));
    }

    #[test]
    fn test_message_occupies_one_row() {
        let mut home = HomeState::default();
        home.show(GridView::message(grid::MSG_NO_RECIPES));
        let theme_state = ThemeState::default();

        let lines = page_lines(&home, &theme_state, &theme_state.palette(), 60);

        assert_eq!(lines.len(), page::page_height(0) as usize);
        assert_eq!(line_text(&lines[lines.len() - 1]), grid::MSG_NO_RECIPES);
    }

    #[test]
    fn test_input_box_is_full_width() {
        let mut home = HomeState::default();
        home.input = "egg, tomato".to_string();
        let palette = ThemeState::default().palette();

        let lines = input_lines(&home, &palette, 40);

        for line in &lines {
            assert_eq!(line_text(line).chars().count(), 40);
        }
        assert!(line_text(&lines[1]).contains("egg, tomato"));
    }

    #[test]
    fn test_render_records_viewport_height() {
        let state = AppState::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        terminal.draw(|f| render(f, &state)).unwrap();

        assert_eq!(state.home.viewport_height.get(), 30 - 2 - theme::HELP_BAR_HEIGHT);
    }
}
