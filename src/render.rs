//! Plain-text renderer for headless mode and `headlines list`

use crate::feed::{FeedView, Renderer};
use std::io::Write;

/// Writes each snapshot as plain text to `W`
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[allow(dead_code)] // Tests read back what was written
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_view(&mut self, view: &FeedView) -> std::io::Result<()> {
        if view.total == 0 {
            writeln!(self.out, "No news articles available.")?;
            return Ok(());
        }

        for card in &view.cards {
            writeln!(self.out, "{}", card.title)?;
            writeln!(self.out, "  {}", card.preview)?;
            writeln!(self.out, "  [{}]  ID: {}", card.tags.join("] ["), card.id)?;
            writeln!(self.out)?;
        }

        if view.has_more {
            writeln!(
                self.out,
                "Showing {} of {} articles (use --all to show everything)",
                view.cards.len(),
                view.total
            )?;
        } else {
            writeln!(self.out, "Showing all {} articles", view.total)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &FeedView) {
        if let Err(e) = self.write_view(view) {
            tracing::error!("Failed to write articles: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Article, ArticleFeed};

    fn render(feed: &ArticleFeed) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&feed.view(20));
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_renders_cards_and_more_hint() {
        let mut feed = ArticleFeed::new();
        feed.apply_load(Ok(vec![
            Article::new(1, "Rates rise", "Business leaders react to the science of interest"),
            Article::new(2, "Two", "b"),
            Article::new(3, "Three", "c"),
            Article::new(4, "Four", "d"),
        ]))
        .unwrap();

        let out = render(&feed);
        assert!(out.contains("Rates rise\n"));
        assert!(out.contains("  Business leaders rea...\n"));
        assert!(out.contains("[science] [business]  ID: 1"));
        assert!(!out.contains("Four"));
        assert!(out.contains("Showing 3 of 4 articles"));
    }

    #[test]
    fn test_more_hint_survives_hiding_every_shown_card() {
        let mut feed = ArticleFeed::new();
        feed.apply_load(Ok((1..=5i64)
            .map(|i| Article::new(i, format!("Story {}", i), "text"))
            .collect()))
            .unwrap();
        for i in 1..=3i64 {
            feed.remove(&i.into());
        }

        let out = render(&feed);
        assert!(!out.contains("No news articles available."));
        assert!(out.contains("Showing 0 of 2 articles"));
    }

    #[test]
    fn test_renders_empty_message() {
        let mut feed = ArticleFeed::new();
        feed.apply_load(Ok(Vec::new())).unwrap();
        assert_eq!(render(&feed), "No news articles available.\n");
    }
}
