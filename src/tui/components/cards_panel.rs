//! Cards panel - the TUI implementation of `Renderer`
//!
//! Holds the latest `FeedView` snapshot plus a selection cursor. The feed is
//! never consulted while drawing; the app pushes a new snapshot after every
//! load, reveal or removal.

use super::scrollbar::render_scrollbar;
use crate::feed::{ArticleCard, ArticleId, FeedView, Renderer};
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use crate::util::fit_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Visible article cards with a selection cursor
#[derive(Debug, Default)]
pub struct CardsPanel {
    view: FeedView,
    selected: usize,
}

impl CardsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &FeedView {
        &self.view
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_card(&self) -> Option<&ArticleCard> {
        self.view.cards.get(self.selected)
    }

    pub fn selected_id(&self) -> Option<ArticleId> {
        self.selected_card().map(|c| c.id.clone())
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.view.cards.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.view.cards.len().saturating_sub(1);
    }

    /// Draw the cards into `area`
    pub fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let bp = Breakpoint::from_width(area.width);
        let card_height = 3 + bp.preview_lines();

        // Reserve the bottom row for the load-more affordance
        let (cards_area, more_area) = if self.view.has_more && area.height > card_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(card_height), Constraint::Length(1)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        // Every revealed card was hidden but more remain behind the cursor
        if self.view.cards.is_empty() {
            let pad = cards_area.height.saturating_sub(1) / 2;
            let mut lines = vec![Line::raw(""); pad as usize];
            lines.push(Line::styled(
                format!("0 of {} articles shown. Press m to load more.", self.view.total),
                Style::default().fg(theme.muted),
            ));
            f.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                cards_area,
            );
        }

        let per_page = (cards_area.height / card_height).max(1) as usize;
        let first = self.selected.saturating_sub(per_page - 1);
        let shown = self.view.cards.iter().enumerate().skip(first).take(per_page);

        for (slot, (idx, card)) in shown.enumerate() {
            let y = cards_area.y + slot as u16 * card_height;
            let height = card_height.min(cards_area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let card_area = Rect::new(cards_area.x, y, cards_area.width, height);
            render_card(f, card_area, card, idx == self.selected, bp, theme);
        }

        render_scrollbar(f, cards_area, self.view.cards.len(), per_page, first);

        if let Some(more_area) = more_area {
            let hint = Paragraph::new(format!(
                " [m] Load more ({}/{})",
                self.view.cards.len(),
                self.view.total
            ))
            .style(
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            );
            f.render_widget(hint, more_area);
        }
    }
}

impl Renderer for CardsPanel {
    fn render(&mut self, view: &FeedView) {
        self.view = view.clone();
        // Keep the cursor on a card that still exists
        if self.selected >= self.view.cards.len() {
            self.selected = self.view.cards.len().saturating_sub(1);
        }
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    card: &ArticleCard,
    selected: bool,
    bp: Breakpoint,
    theme: &Theme,
) {
    let border_style = if selected {
        Style::default().fg(theme.highlight)
    } else {
        Style::default().fg(theme.border)
    };

    let title_width = area.width.saturating_sub(4) as usize;
    let mut title_style = Style::default()
        .fg(theme.card_title)
        .add_modifier(Modifier::BOLD);
    if selected {
        title_style = title_style.bg(theme.selection).fg(theme.selection_fg);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", fit_width(&card.title, title_width.saturating_sub(2))),
            title_style,
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    if bp.preview_lines() > 0 {
        let preview = Paragraph::new(card.preview.as_str())
            .style(Style::default().fg(theme.foreground))
            .wrap(Wrap { trim: true });
        f.render_widget(preview, chunks[0]);
    }

    let mut meta: Vec<Span> = card
        .tags
        .iter()
        .flat_map(|tag| {
            [
                Span::styled(format!("#{}", tag), Style::default().fg(theme.tag)),
                Span::raw(" "),
            ]
        })
        .collect();
    meta.push(Span::styled(
        format!(" ID: {}", card.id),
        Style::default().fg(theme.card_id),
    ));
    f.render_widget(Paragraph::new(Line::from(meta)), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Article, ArticleFeed};
    use crate::tui::test_support::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn panel_with(n: i64, reveal_all: bool) -> (ArticleFeed, CardsPanel) {
        let mut feed = ArticleFeed::new();
        let articles = (1..=n)
            .map(|i| Article::new(i, format!("Story {}", i), "Technology moves fast"))
            .collect();
        feed.apply_load(Ok(articles)).unwrap();
        if reveal_all {
            while feed.has_more() {
                feed.reveal_more();
            }
        }
        let mut panel = CardsPanel::new();
        panel.render(&feed.view(150));
        (feed, panel)
    }

    fn draw(panel: &CardsPanel, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| panel.draw(f, f.area(), &Theme::dark()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draws_visible_cards_and_more_hint() {
        let (_, panel) = panel_with(5, false);
        let text = draw(&panel, 80, 24);

        assert!(text.contains("Story 1"));
        assert!(text.contains("Story 3"));
        assert!(!text.contains("Story 4"));
        assert!(text.contains("#technology"));
        assert!(text.contains("ID: 2"));
        assert!(text.contains("[m] Load more (3/5)"));
    }

    #[test]
    fn test_no_more_hint_when_exhausted() {
        let (_, panel) = panel_with(2, false);
        let text = draw(&panel, 80, 24);
        assert!(!text.contains("Load more"));
    }

    #[test]
    fn test_more_hint_when_every_revealed_card_is_hidden() {
        let (mut feed, mut panel) = panel_with(5, false);
        for i in 1..=3i64 {
            feed.remove(&ArticleId::Number(i));
        }
        panel.render(&feed.view(150));
        assert!(panel.view().cards.is_empty());

        let text = draw(&panel, 80, 24);
        assert!(text.contains("0 of 2 articles shown"));
        assert!(text.contains("[m] Load more (0/2)"));
    }

    #[test]
    fn test_selection_clamped_after_snapshot_shrinks() {
        let (mut feed, mut panel) = panel_with(3, false);
        panel.select_last();
        assert_eq!(panel.selected(), 2);

        let id = panel.selected_id().unwrap();
        feed.remove(&id);
        panel.render(&feed.view(150));

        assert_eq!(panel.selected(), 1);
        assert_eq!(panel.selected_id(), Some(ArticleId::Number(2)));
    }

    #[test]
    fn test_selection_bounds() {
        let (_, mut panel) = panel_with(5, true);
        panel.select_prev();
        assert_eq!(panel.selected(), 0);
        panel.select_last();
        panel.select_first();
        assert_eq!(panel.selected(), 0);
        for _ in 0..10 {
            panel.select_next();
        }
        assert_eq!(panel.selected(), 4);
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let (_, mut panel) = panel_with(9, true);
        panel.select_last();
        // Normal breakpoint: 5 rows per card, room for two cards
        let text = draw(&panel, 80, 10);
        assert!(text.contains("Story 9"));
        assert!(!text.contains("Story 1"));
    }
}
