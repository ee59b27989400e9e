//! Render snapshots and the renderer contract
//!
//! Renderers never touch `ArticleFeed` directly. They receive a `FeedView`
//! after each mutation and draw it however they like.

use super::{tags_for, Article, ArticleId};
use crate::util::preview;

/// Everything a card needs to draw one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub id: ArticleId,
    pub title: String,
    /// Body truncated to the preview length, `...` appended if cut
    pub preview: String,
    pub tags: Vec<&'static str>,
}

impl ArticleCard {
    pub fn from_article(article: &Article, preview_chars: usize) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            preview: preview(&article.body, preview_chars),
            tags: tags_for(&article.body),
        }
    }
}

/// Snapshot of the visible prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedView {
    pub cards: Vec<ArticleCard>,
    /// Total loaded articles (visible or not)
    pub total: usize,
    /// Show the reveal-more affordance
    pub has_more: bool,
}

/// Consumer of feed snapshots
pub trait Renderer {
    fn render(&mut self, view: &FeedView);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_truncates_long_body() {
        let body = "x".repeat(200);
        let card = ArticleCard::from_article(&Article::new(1, "t", body), 150);
        assert_eq!(card.preview.chars().count(), 153);
        assert!(card.preview.ends_with("..."));
    }

    #[test]
    fn test_card_keeps_short_body() {
        let card = ArticleCard::from_article(&Article::new(1, "t", "Health news"), 150);
        assert_eq!(card.preview, "Health news");
        assert_eq!(card.tags, vec!["health"]);
    }
}
