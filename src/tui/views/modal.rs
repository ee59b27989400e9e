// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current theme
// - Detail modal: full article body with tags

use crate::feed::{tags_for, ArticleId};
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Detail { id, scroll } => render_detail(f, app, id, *scroll),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.tag);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Feed", header_style)),
        kb("↑/↓, j/k", "Select article"),
        kb("g/G", "First / last article"),
        kb("m, Space", "Load more"),
        kb("d, x, Del", "Hide article"),
        kb("Enter", "Read article"),
        Line::raw(""),
        Line::from(Span::styled("  Search", header_style)),
        kb("/", "Focus search"),
        kb("Enter", "Submit"),
        kb("Esc", "Leave search"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("l", "Toggle logs"),
        kb("t", "Cycle theme"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme_kind.name(), key_style),
        ]),
    ]);

    let area = centered_rect(44, 26, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the article detail modal
///
/// The id may no longer resolve if the article was hidden underneath.
fn render_detail(f: &mut Frame, app: &App, id: &ArticleId, scroll: u16) {
    let screen = f.area();
    let area = centered_rect(
        screen.width.saturating_sub(8).max(20),
        screen.height.saturating_sub(4).max(6),
        screen,
    );
    f.render_widget(Clear, area);

    let content = match app.feed.get(id) {
        Some(article) => {
            let mut meta: Vec<Span> = tags_for(&article.body)
                .into_iter()
                .map(|tag| Span::styled(format!("#{} ", tag), Style::default().fg(app.theme.tag)))
                .collect();
            meta.push(Span::styled(
                format!(" ID: {}", article.id),
                Style::default().fg(app.theme.card_id),
            ));

            Text::from(vec![
                Line::from(Span::styled(
                    article.title.clone(),
                    Style::default()
                        .fg(app.theme.card_title)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(meta),
                Line::raw(""),
                Line::styled(article.body.clone(), Style::default().fg(app.theme.foreground)),
            ])
        }
        None => Text::styled(
            "This article is no longer available.",
            Style::default().fg(app.theme.muted),
        ),
    };

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Article ")
                .title_bottom(Line::from(" ↑↓ scroll  d hide  Esc close ").centered()),
        );

    f.render_widget(paragraph, area);
}
