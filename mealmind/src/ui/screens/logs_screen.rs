use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};
use tracing::Level;

use crate::log_buffer::LogBuffer;
use crate::state::LogsState;
use crate::ui::{
    components::{empty_state, help_bar},
    layouts,
    theme::{self, Palette},
};

const TARGET_WIDTH: usize = 25;

pub fn render(
    f: &mut Frame,
    state: &LogsState,
    log_buffer: &LogBuffer,
    palette: &Palette,
    status: Option<&str>,
) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    render_title(f, title_area, state, palette);
    render_logs(f, content_area, state, log_buffer, palette);
    render_help(f, help_area, state, status);
}

fn render_title(f: &mut Frame, area: Rect, state: &LogsState, palette: &Palette) {
    let title = format!("Logs ({} entries)", state.total_entries);
    let paragraph = Paragraph::new(title).style(palette.title_style());
    f.render_widget(paragraph, area);
}

fn render_logs(
    f: &mut Frame,
    area: Rect,
    state: &LogsState,
    log_buffer: &LogBuffer,
    palette: &Palette,
) {
    if log_buffer.is_empty() {
        empty_state::render_empty_state(f, area, "Session Logs", "No logs yet", palette);
        return;
    }

    // Newest at the bottom; the offset counts entries back from the newest
    let inner_height = area.height.saturating_sub(4) as usize; // Borders and header
    let window = log_buffer.window(state.scroll_offset, inner_height);

    let rows: Vec<Row> = window
        .entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                entry.timestamp.format("%H:%M:%S%.3f").to_string(),
                level_label(entry.level).to_string(),
                truncate_target(&entry.target, TARGET_WIDTH),
                entry.message.clone(),
            ])
            .style(level_style(entry.level, palette))
        })
        .collect();

    let widths = [
        Constraint::Length(12), // Time
        Constraint::Length(5),  // Level
        Constraint::Length(TARGET_WIDTH as u16),
        Constraint::Min(30), // Message
    ];

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Logs [{}-{} of {}] ",
            window.start + 1,
            window.end,
            window.total
        )))
        .header(
            Row::new(vec!["Time", "Level", "Target", "Message"])
                .style(theme::header_style())
                .bottom_margin(1),
        );

    f.render_widget(table, area);
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARN ",
        Level::INFO => "INFO ",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

fn level_style(level: Level, palette: &Palette) -> Style {
    match level {
        Level::ERROR => theme::error_style().add_modifier(Modifier::BOLD),
        Level::WARN => theme::loading_style(),
        Level::INFO => theme::matched_style(),
        Level::DEBUG => Style::default().fg(theme::COLOR_BORDER_INFO),
        Level::TRACE => palette.muted_style(),
    }
}

fn render_help(f: &mut Frame, area: Rect, state: &LogsState, status: Option<&str>) {
    let scroll_info = if state.scroll_offset > 0 {
        format!(" (scrolled {} from bottom)", state.scroll_offset)
    } else {
        String::new()
    };

    let help_text = format!(
        "j/k: scroll | G: bottom | gg: top | PgUp/PgDn: page | h: back | ?: help{}",
        scroll_info
    );

    help_bar::render_help_bar(f, area, &help_text, status);
}

fn truncate_target(target: &str, max_len: usize) -> String {
    let len = target.chars().count();
    if len <= max_len {
        target.to_string()
    } else {
        let tail: String = target.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}
