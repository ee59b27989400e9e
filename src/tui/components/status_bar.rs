// Status bar component
//
// Feed counters and key hints at the bottom of the screen.

use crate::tui::app::{App, LoadState};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Narrow terminals get counters only; wider ones also get key hints.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let feed = &app.feed;

    let counters = match &app.load_state {
        LoadState::Loading => " loading…".to_string(),
        LoadState::Failed(_) => " load failed".to_string(),
        LoadState::Ready => format!(
            " {}/{} shown │ {} hidden",
            feed.visible_count(),
            feed.len(),
            app.hidden_count()
        ),
    };

    let hints = if !bp.at_least(Breakpoint::Normal) {
        String::new()
    } else if feed.has_more() {
        format!(
            " │ ↑↓ select  m +{}  d hide  ⏎ open  / search  ? help  q quit",
            feed.page_size()
        )
    } else {
        " │ ↑↓ select  d hide  ⏎ open  / search  ? help  q quit".to_string()
    };

    let text = if bp.at_least(Breakpoint::Wide) {
        format!("{} │ {} │ {}{}", counters, app.uptime(), app.theme_kind.name(), hints)
    } else {
        format!("{}{}", counters, hints)
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
