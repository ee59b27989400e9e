//! Article feed - the pagination/removal state machine
//!
//! The feed owns the full article list and a visible-count cursor. Renderers
//! only ever see the visible prefix `items[0 .. visible_count)`.
//!
//! # Lifecycle
//!
//! ```text
//! empty ──load()──▶ items = fetched, visible = min(page, len)
//!                     │
//!                     ├── reveal_more(): visible += page (clamped)
//!                     └── remove(id):    items -= 1, visible -= 1 (floored at 0)
//! ```

pub mod source;
pub mod tags;
pub mod view;

pub use source::{ArticleSource, HttpSource};
pub use tags::tags_for;
pub use view::{ArticleCard, FeedView, Renderer};

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Articles revealed per reveal-more action
pub const PAGE_SIZE: usize = 3;

/// Body preview length in characters (before the ellipsis)
pub const PREVIEW_CHARS: usize = 150;

/// Message shown to the user for any load failure
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load news articles. Please try again later.";

// ─────────────────────────────────────────────────────────────────────────────
// Data Model
// ─────────────────────────────────────────────────────────────────────────────

/// Externally assigned article identifier
///
/// The upstream API uses integers, but string ids are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ArticleId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A single article as delivered by the source. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
}

impl Article {
    pub fn new(id: impl Into<ArticleId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Failure to populate the feed
///
/// The variants exist for logging only. Users always see
/// [`LoadError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Source unreachable (DNS, connect, timeout, body read)
    Network(String),
    /// Source answered with a non-success HTTP status
    Status(u16),
    /// Body could not be interpreted as a sequence of articles
    Payload(String),
}

impl LoadError {
    /// The single user-visible message for every failure kind
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status(code) => write!(f, "HTTP error! status: {}", code),
            Self::Payload(msg) => write!(f, "Invalid payload: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

// ─────────────────────────────────────────────────────────────────────────────
// Feed State Machine
// ─────────────────────────────────────────────────────────────────────────────

/// Full article list plus the visible-prefix cursor
///
/// Invariant: `visible_count <= items.len()`.
#[derive(Debug, Clone)]
pub struct ArticleFeed {
    items: Vec<Article>,
    visible_count: usize,
    page_size: usize,
}

impl ArticleFeed {
    /// Create an empty feed with the default page size
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// Create an empty feed; a page size of 0 is clamped to 1
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            visible_count: 0,
            page_size: page_size.max(1),
        }
    }

    /// Fetch from `source` and replace the feed contents
    ///
    /// On failure the feed is left empty.
    pub async fn load<S: ArticleSource>(&mut self, source: &S) -> Result<(), LoadError> {
        self.reset();
        tracing::debug!("Loading articles from {}", source.describe());
        let fetched = source.fetch().await;
        self.apply_load(fetched)
    }

    /// Apply the outcome of a fetch that ran elsewhere (e.g. a spawned task)
    pub fn apply_load(&mut self, fetched: Result<Vec<Article>, LoadError>) -> Result<(), LoadError> {
        self.reset();

        let articles = match fetched {
            Ok(articles) => articles,
            Err(e) => {
                tracing::error!("Error fetching news articles: {}", e);
                return Err(e);
            }
        };

        let mut seen = HashSet::with_capacity(articles.len());
        for article in articles {
            if seen.insert(article.id.clone()) {
                self.items.push(article);
            } else {
                tracing::warn!("Dropping duplicate article id {}", article.id);
            }
        }

        tracing::info!("Loaded {} articles", self.items.len());
        self.reveal_more();
        Ok(())
    }

    /// Advance the cursor by one page, clamped to the list length
    pub fn reveal_more(&mut self) -> &[Article] {
        let before = self.visible_count;
        self.visible_count = (self.visible_count + self.page_size).min(self.items.len());
        if self.visible_count != before {
            tracing::debug!(
                "Revealed articles {}..{} of {}",
                before,
                self.visible_count,
                self.items.len()
            );
        }
        self.visible()
    }

    /// Remove the article with `id`, wherever it lies in the list
    ///
    /// Unknown ids are a no-op. A successful removal always shrinks the
    /// visible window by one, even when the removed article was not visible.
    pub fn remove(&mut self, id: &ArticleId) -> &[Article] {
        let Some(pos) = self.items.iter().position(|a| &a.id == id) else {
            tracing::debug!("Remove ignored: no article with id {}", id);
            return self.visible();
        };

        self.items.remove(pos);
        self.visible_count = self.visible_count.saturating_sub(1);
        tracing::debug!(
            "Removed article {} (was at {}), {} of {} visible",
            id,
            pos,
            self.visible_count,
            self.items.len()
        );
        self.visible()
    }

    /// The visible prefix
    pub fn visible(&self) -> &[Article] {
        &self.items[..self.visible_count]
    }

    /// All loaded articles, visible or not
    #[allow(dead_code)] // Inspected by tests; renderers use `view`
    pub fn items(&self) -> &[Article] {
        &self.items
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the reveal-more affordance should be offered
    pub fn has_more(&self) -> bool {
        self.visible_count < self.items.len()
    }

    /// Look up an article by id
    pub fn get(&self, id: &ArticleId) -> Option<&Article> {
        self.items.iter().find(|a| &a.id == id)
    }

    /// Immutable snapshot of the visible prefix for renderers
    pub fn view(&self, preview_chars: usize) -> FeedView {
        FeedView {
            cards: self
                .visible()
                .iter()
                .map(|a| ArticleCard::from_article(a, preview_chars))
                .collect(),
            total: self.items.len(),
            has_more: self.has_more(),
        }
    }

    fn reset(&mut self) {
        self.items.clear();
        self.visible_count = 0;
    }
}

impl Default for ArticleFeed {
    fn default() -> Self {
        Self::new()
    }
}
