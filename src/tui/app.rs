// TUI application state
//
// Owns the ArticleFeed and everything the reader shows around it: load
// state, card selection, search input, modals, toasts and theme. The
// feed is the only source of truth for which articles exist; the cards
// panel gets a fresh snapshot after every mutation.

use super::components::{CardsPanel, Toast};
use super::input::InputHandler;
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::feed::{Article, ArticleFeed, ArticleId, LoadError, Renderer};
use crate::logging::LogBuffer;
use crossterm::event::KeyCode;
use std::time::Instant;

/// Where the one-shot fetch stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Holds the user-facing message
    Failed(String),
}

/// Which widget receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Braille spinner frames for the loading indicator
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Main application state for the TUI
pub struct App {
    /// Article list and visibility cursor
    pub feed: ArticleFeed,

    pub load_state: LoadState,

    /// Renderer for the visible slice
    pub cards: CardsPanel,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    /// Whether the logs panel is shown
    pub show_logs: bool,

    pub input_mode: InputMode,

    /// Text typed into the search bar
    pub search_query: String,

    /// Active modal overlay (captures input while open)
    pub modal: Option<Modal>,

    pub toast: Option<Toast>,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Where articles come from, shown in the title bar
    pub source_label: String,

    /// Body preview length in characters
    pub preview_chars: usize,

    /// Articles delivered by the last successful load
    loaded_total: usize,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Spinner frame counter, advanced on every tick
    animation_frame: usize,
}

impl App {
    pub fn new(config: &Config, source_label: impl Into<String>) -> Self {
        Self::with_log_buffer(config, source_label, LogBuffer::new())
    }

    pub fn with_log_buffer(
        config: &Config,
        source_label: impl Into<String>,
        log_buffer: LogBuffer,
    ) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            feed: ArticleFeed::with_page_size(config.feed.page_size),
            load_state: LoadState::Loading,
            cards: CardsPanel::new(),
            should_quit: false,
            start_time: Instant::now(),
            log_buffer,
            show_logs: false,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            modal: None,
            toast: None,
            theme_kind,
            theme: theme_kind.theme(),
            source_label: source_label.into(),
            preview_chars: config.feed.preview_chars,
            loaded_total: 0,
            input_handler: InputHandler::default(),
            animation_frame: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    // ─────────────────────────────────────────────────────────────────────
    // Feed operations
    // ─────────────────────────────────────────────────────────────────────

    /// Apply the result of the background fetch
    pub fn finish_load(&mut self, fetched: Result<Vec<Article>, LoadError>) {
        match self.feed.apply_load(fetched) {
            Ok(()) => {
                self.loaded_total = self.feed.len();
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                self.loaded_total = 0;
                self.load_state = LoadState::Failed(e.user_message().to_string());
            }
        }
        self.refresh_cards();
    }

    /// Reveal the next page; no-op while loading
    pub fn reveal_more(&mut self) {
        if self.load_state != LoadState::Ready {
            return;
        }
        if !self.feed.has_more() {
            self.show_toast("All articles shown");
            return;
        }
        self.feed.reveal_more();
        self.refresh_cards();
    }

    /// Hide the selected card
    pub fn remove_selected(&mut self) {
        if let Some(id) = self.cards.selected_id() {
            self.remove(&id);
        }
    }

    /// Hide an article by id; no-op while loading
    pub fn remove(&mut self, id: &ArticleId) {
        if self.load_state != LoadState::Ready {
            return;
        }
        let before = self.feed.len();
        self.feed.remove(id);
        if self.feed.len() < before {
            self.show_toast(format!("Hidden article {}", id));
        }
        self.refresh_cards();
    }

    /// Articles removed since the last load
    pub fn hidden_count(&self) -> usize {
        self.loaded_total.saturating_sub(self.feed.len())
    }

    /// Push a fresh snapshot to the cards panel
    fn refresh_cards(&mut self) {
        let view = self.feed.view(self.preview_chars);
        self.cards.render(&view);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Selection and overlays
    // ─────────────────────────────────────────────────────────────────────

    pub fn select_next(&mut self) {
        self.cards.select_next();
    }

    pub fn select_prev(&mut self) {
        self.cards.select_prev();
    }

    pub fn select_first(&mut self) {
        self.cards.select_first();
    }

    pub fn select_last(&mut self) {
        self.cards.select_last();
    }

    /// Open the detail modal for the selected card
    pub fn open_selected(&mut self) {
        if let Some(id) = self.cards.selected_id() {
            self.modal = Some(Modal::detail(id));
        }
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal::help());
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Cycle to the next theme
    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.show_toast(format!("Theme: {}", self.theme_kind.name()));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn cancel_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
    }

    /// Submit the search box
    ///
    /// Search is not wired to the feed; it only acknowledges the term.
    pub fn submit_search(&mut self) {
        self.input_mode = InputMode::Normal;
        let term = self.search_query.trim().to_string();
        if term.is_empty() {
            self.show_toast("Please enter a search term.");
        } else {
            tracing::info!("Search requested: {}", term);
            self.show_toast(format!("Searching for: \"{}\"", term));
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Toasts, animation, input
    // ─────────────────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.clear_expired_toast();
    }

    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.animation_frame % SPINNER_FRAMES.len()]
    }

    /// Uptime as HH:MM:SS
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::LOAD_FAILED_MESSAGE;

    fn articles(n: i64) -> Vec<Article> {
        (1..=n)
            .map(|i| Article::new(i, format!("Title {}", i), format!("Body {}", i)))
            .collect()
    }

    fn ready_app(n: i64) -> App {
        let mut app = App::new(&Config::default(), "test");
        app.finish_load(Ok(articles(n)));
        app
    }

    fn ids(raw: &[i64]) -> Vec<ArticleId> {
        raw.iter().map(|&i| ArticleId::Number(i)).collect()
    }

    fn card_ids(app: &App) -> Vec<ArticleId> {
        app.cards.view().cards.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_starts_loading() {
        let app = App::new(&Config::default(), "test");
        assert!(app.is_loading());
        assert!(app.cards.view().cards.is_empty());
    }

    #[test]
    fn test_finish_load_shows_first_page() {
        let app = ready_app(7);
        assert_eq!(app.load_state, LoadState::Ready);
        assert_eq!(card_ids(&app), ids(&[1, 2, 3]));
        assert_eq!(app.cards.view().total, 7);
        assert!(app.cards.view().has_more);
    }

    #[test]
    fn test_finish_load_failure() {
        let mut app = App::new(&Config::default(), "test");
        app.finish_load(Err(LoadError::Status(500)));
        assert_eq!(
            app.load_state,
            LoadState::Failed(LOAD_FAILED_MESSAGE.to_string())
        );
        assert!(app.cards.view().cards.is_empty());
    }

    #[test]
    fn test_reveal_more_updates_cards() {
        let mut app = ready_app(7);
        app.reveal_more();
        app.reveal_more();
        assert_eq!(app.cards.view().cards.len(), 7);
        assert!(!app.cards.view().has_more);

        app.reveal_more();
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("All articles shown")
        );
    }

    #[test]
    fn test_actions_ignored_while_loading() {
        let mut app = App::new(&Config::default(), "test");
        app.reveal_more();
        app.remove(&ArticleId::Number(1));
        assert!(app.is_loading());
        assert_eq!(app.feed.visible_count(), 0);
    }

    #[test]
    fn test_remove_selected_shrinks_window() {
        let mut app = ready_app(7);
        app.select_next();
        app.remove_selected();

        assert_eq!(card_ids(&app), ids(&[1, 3]));
        assert_eq!(app.hidden_count(), 1);
        assert_eq!(app.cards.selected(), 1);
    }

    #[test]
    fn test_remove_hidden_article_still_shrinks_window() {
        let mut app = ready_app(7);
        app.remove(&ArticleId::Number(6));
        assert_eq!(card_ids(&app), ids(&[1, 2]));
        assert_eq!(app.feed.len(), 6);
    }

    #[test]
    fn test_selection_clamped_after_remove() {
        let mut app = ready_app(3);
        app.select_next();
        app.select_next();
        app.remove_selected();
        assert_eq!(app.cards.selected(), 1);
        assert_eq!(app.cards.selected_id(), Some(ArticleId::Number(2)));
    }

    #[test]
    fn test_submit_search() {
        let mut app = ready_app(3);
        app.start_search();
        app.submit_search();
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Please enter a search term.")
        );

        app.start_search();
        for c in "rust".chars() {
            app.push_search_char(c);
        }
        app.submit_search();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Searching for: \"rust\"")
        );
        // Feed is untouched
        assert_eq!(app.feed.visible_count(), 3);
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = ready_app(1);
        assert_eq!(app.theme_kind, ThemeKind::Dark);
        app.cycle_theme();
        assert_eq!(app.theme_kind, ThemeKind::Light);
    }

    #[test]
    fn test_spinner_advances() {
        let mut app = ready_app(1);
        let first = app.spinner_char();
        app.tick_animation();
        assert_ne!(first, app.spinner_char());
    }
}
