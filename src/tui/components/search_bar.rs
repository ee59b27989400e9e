// Search bar component
//
// Input box for the search stub. Submitting only raises a toast.

use crate::tui::app::{App, InputMode};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let editing = app.input_mode == InputMode::Search;

    let (text, style) = if app.search_query.is_empty() && !editing {
        (
            "Press / to search news".to_string(),
            Style::default().fg(theme.muted),
        )
    } else {
        (app.search_query.clone(), Style::default().fg(theme.foreground))
    };

    let border_color = if editing { theme.highlight } else { theme.border };

    let input = Paragraph::new(format!("🔍 {}", text)).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, area);

    if editing {
        f.set_cursor_position(Position::new(cursor_x(area, &app.search_query), area.y + 1));
    }
}

/// Column just past the typed query, kept inside the box
fn cursor_x(area: Rect, query: &str) -> u16 {
    let typed = u16::try_from(query.width()).unwrap_or(u16::MAX);
    // Left border plus "🔍 ", which is three columns wide
    area.x
        .saturating_add(4)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_query() {
        let area = Rect::new(0, 3, 40, 3);
        assert_eq!(cursor_x(area, ""), 4);
        assert_eq!(cursor_x(area, "rust"), 8);
    }

    #[test]
    fn test_cursor_clamped_for_long_query() {
        let area = Rect::new(2, 3, 40, 3);
        let query = "x".repeat(100_000);
        assert_eq!(cursor_x(area, &query), 40);
    }
}
