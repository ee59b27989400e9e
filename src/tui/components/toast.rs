//! Toast notification component
//!
//! A non-blocking overlay in the bottom-right corner that disappears on its
//! own. Used for the search stub and for hide/load-more feedback.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create a new toast with the default 2-second duration
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_duration(message, Duration::from_secs(2))
    }

    pub fn with_duration(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render on top of whatever is already in `area`
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let toast_area = self.placement(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }

    /// Bottom-right box sized to the message, never wider than `area`
    fn placement(&self, area: Rect) -> Rect {
        let width = u16::try_from(self.message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width.saturating_add(2));
        let y = area.bottom().saturating_sub(height + 2);
        Rect::new(x, y, width, height).intersection(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        assert!(Toast::with_duration("gone", Duration::ZERO).is_expired());
        assert!(!Toast::new("still here").is_expired());
    }

    #[test]
    fn test_placement_bottom_right() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = Toast::new("Hidden article 3").placement(area);
        assert_eq!(rect, Rect::new(58, 19, 20, 3));
    }

    #[test]
    fn test_placement_clamped_for_huge_message() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = Toast::new("a".repeat(70_000)).placement(area);
        assert_eq!(rect.width, 76);
        assert!(rect.right() <= area.right());
    }
}
