// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - The one-shot article fetch, run on a background task
// - Event loop (keyboard input, timer ticks, fetch completion)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::feed::{Article, ArticleSource, LoadError};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, InputMode};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::oneshot;

type FetchResult = Result<Vec<Article>, LoadError>;

/// Run the TUI
///
/// Sets up the terminal, starts the fetch, runs the event loop, and
/// restores the terminal when done.
pub async fn run_tui<S>(source: S, log_buffer: LogBuffer, config: Config) -> Result<()>
where
    S: ArticleSource + Send + Sync + 'static,
{
    let mut app = App::with_log_buffer(&config, source.describe(), log_buffer);

    // Start fetching before the first frame so the spinner has work to show
    let (load_tx, mut load_rx) = oneshot::channel::<FetchResult>();
    tokio::spawn(async move {
        let fetched = source.fetch().await;
        // Receiver is gone only if the user quit mid-load
        let _ = load_tx.send(fetched);
    });

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, &mut load_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles three kinds of events:
/// 1. Keyboard input
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Completion of the background fetch
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    load_rx: &mut oneshot::Receiver<FetchResult>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        let loading = app.is_loading();

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Background fetch finished (polled only until it resolves)
            res = &mut *load_rx, if loading => {
                let fetched = res.unwrap_or_else(|_| {
                    Err(LoadError::Network("fetch task ended without a result".to_string()))
                });
                app.finish_load(fetched);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Search → Global → Feed actions
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Search bar captures typing while focused
    if handle_search_input(app, &key_event) {
        return;
    }

    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Press => {
            // Layer 3: Global keys
            if handle_global_keys(app, key) {
                return;
            }

            // Layer 4: Feed actions
            if !app.handle_key_press(key) {
                return;
            }
            match key {
                KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Home | KeyCode::Char('g') => app.select_first(),
                KeyCode::End | KeyCode::Char('G') => app.select_last(),
                KeyCode::Char('m') | KeyCode::Char(' ') => app.reveal_more(),
                KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                    app.remove_selected()
                }
                KeyCode::Enter => app.open_selected(),
                _ => {}
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.modal.is_none() {
        return false;
    }

    // Always process Release events to keep InputHandler in sync
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press || !app.handle_key_press(key_event.code) {
        return true;
    }

    let action = match app.modal.as_mut() {
        Some(modal) => modal.handle_input(key_event.code),
        None => return false,
    };

    match action {
        // Scroll offset lives in the modal itself
        ModalAction::None | ModalAction::ScrollUp | ModalAction::ScrollDown => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Hide(id) => {
            app.modal = None;
            app.remove(&id);
        }
    }

    true
}

/// Handle search bar input - returns true if the search bar absorbed it
///
/// Typed characters bypass the InputHandler so repeated letters register.
fn handle_search_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.input_mode != InputMode::Search {
        return false;
    }

    match key_event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => match key_event.code {
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Enter => {
                // Debounce Enter so a held key doesn't submit twice
                if app.handle_key_press(KeyCode::Enter) {
                    app.submit_search();
                }
            }
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) => app.push_search_char(c),
            _ => {}
        },
        KeyEventKind::Release => app.handle_key_release(key_event.code),
    }

    true
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    let is_global = matches!(
        key,
        KeyCode::Char('q')
            | KeyCode::Char('Q')
            | KeyCode::Char('?')
            | KeyCode::Char('l')
            | KeyCode::Char('t')
            | KeyCode::Char('/')
    );
    if !is_global {
        return false;
    }

    if app.handle_key_press(key) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
            KeyCode::Char('?') => app.open_help(),
            KeyCode::Char('l') => app.toggle_logs(),
            KeyCode::Char('t') => app.cycle_theme(),
            KeyCode::Char('/') => app.start_search(),
            _ => {}
        }
    }
    true
}
