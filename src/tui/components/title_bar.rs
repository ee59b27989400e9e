// Title bar component
//
// App name, where the articles came from, and a spinner while loading.

use crate::tui::app::{App, LoadState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = match &app.load_state {
        LoadState::Loading => format!(" {} loading", app.spinner_char()),
        LoadState::Ready => String::new(),
        LoadState::Failed(_) => " ✗ offline".to_string(),
    };

    let title_text = format!(" 📰 Headlines{} ──── {}", status, app.source_label);

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
