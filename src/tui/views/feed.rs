// Feed view
//
// Draws the cards panel once articles are in, or a placeholder while
// loading, after a failure, or once no articles are left at all.

use crate::tui::app::{App, LoadState};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const LOADING_MESSAGE: &str = "Loading news articles...";
const EMPTY_MESSAGE: &str = "No news articles available.";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match &app.load_state {
        LoadState::Loading => placeholder(
            f,
            area,
            &format!("{} {}", app.spinner_char(), LOADING_MESSAGE),
            Style::default().fg(app.theme.muted),
            app,
        ),
        LoadState::Failed(message) => {
            placeholder(f, area, message, Style::default().fg(app.theme.error), app)
        }
        LoadState::Ready if app.cards.view().total == 0 => placeholder(
            f,
            area,
            EMPTY_MESSAGE,
            Style::default().fg(app.theme.muted),
            app,
        ),
        LoadState::Ready => app.cards.draw(f, area, &app.theme),
    }
}

fn placeholder(f: &mut Frame, area: Rect, text: &str, style: Style, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(" News ");

    // Drop the message roughly into the vertical middle
    let pad = area.height.saturating_sub(3) / 2;
    let mut lines: Vec<String> = vec![String::new(); pad as usize];
    lines.push(text.to_string());

    let paragraph = Paragraph::new(lines.join("\n"))
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(paragraph, area);
}
