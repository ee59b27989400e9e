// Views module - screen-level rendering logic
//
// A single screen: title bar, search bar, the feed (with an optional logs
// panel beside it), and the status bar. Modals and toasts are drawn on top.

mod feed;
mod modal;

use super::app::App;
use super::layout::Breakpoint;
use crate::tui::components::{logs_panel, search_bar, status_bar, title_bar};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Search
            Constraint::Min(5),    // Content
            Constraint::Length(2), // Status
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    search_bar::render(f, chunks[1], app);

    let content = chunks[2];
    if app.show_logs {
        // Side by side on wide terminals, stacked otherwise
        let wide = Breakpoint::from_width(content.width).at_least(Breakpoint::Wide);
        let split = if wide {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(content)
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                .split(content)
        };
        feed::render(f, split[0], app);
        let entries = app.log_buffer.tail(logs_panel::capacity(split[1].height));
        logs_panel::render(f, split[1], &entries, &app.theme);
    } else {
        feed::render(f, content, app);
    }

    status_bar::render(f, chunks[3], app);

    if let Some(ref modal_state) = app.modal {
        modal::render(f, modal_state, app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feed::{Article, ArticleId, LoadError};
    use crate::tui::test_support::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_app(app: &mut App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn new_app() -> App {
        App::new(&Config::default(), "demo: built-in articles")
    }

    #[test]
    fn test_loading_placeholder() {
        let text = draw_app(&mut new_app());
        assert!(text.contains("Loading news articles..."));
        assert!(text.contains("Headlines"));
        assert!(text.contains("Press / to search news"));
    }

    #[test]
    fn test_failure_message() {
        let mut app = new_app();
        app.finish_load(Err(LoadError::Network("refused".into())));
        let text = draw_app(&mut app);
        assert!(text.contains("Failed to load news articles. Please try again later."));
    }

    #[test]
    fn test_empty_feed() {
        let mut app = new_app();
        app.finish_load(Ok(Vec::new()));
        let text = draw_app(&mut app);
        assert!(text.contains("No news articles available."));
    }

    #[test]
    fn test_cards_and_counters() {
        let mut app = new_app();
        app.finish_load(Ok((1..=5i64)
            .map(|i| Article::new(i, format!("Story {}", i), "technology news"))
            .collect()));
        let text = draw_app(&mut app);
        assert!(text.contains("Story 1"));
        assert!(text.contains("Story 3"));
        assert!(!text.contains("Story 4"));
        assert!(text.contains("3/5 shown"));
    }

    #[test]
    fn test_load_more_kept_after_hiding_all_shown() {
        let mut app = new_app();
        app.finish_load(Ok((1..=5i64)
            .map(|i| Article::new(i, format!("Story {}", i), "technology news"))
            .collect()));
        for i in 1..=3i64 {
            app.remove(&ArticleId::Number(i));
        }
        assert_eq!(app.feed.visible_count(), 0);
        assert!(app.feed.has_more());

        let text = draw_app(&mut app);
        assert!(!text.contains("No news articles available."));
        assert!(text.contains("[m] Load more (0/2)"));
        assert!(text.contains("0/2 shown"));
    }

    #[test]
    fn test_help_modal_drawn_on_top() {
        let mut app = new_app();
        app.finish_load(Ok(Vec::new()));
        app.open_help();
        let text = draw_app(&mut app);
        assert!(text.contains("Load more"));
        assert!(text.contains("Hide article"));
    }
}
