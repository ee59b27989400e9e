// Headlines - terminal news reader
//
// Fetches a list of articles once, then lets the reader page through them
// a few at a time and hide the ones they don't care about.
//
// Architecture:
// - Feed: ArticleFeed state machine (load, reveal more, remove) and tagging
// - Sources: HTTP JSON endpoint or built-in demo articles
// - Renderers: ratatui cards panel (TUI) or plain text (headless / `list`)
// - Config: env > ~/.config/headlines/config.toml > defaults
// - Logging: tracing into the TUI log panel, stderr, and optional JSON files

mod cli;
mod config;
mod demo;
mod feed;
mod logging;
mod render;
mod startup;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use demo::DemoSource;
use feed::{ArticleSource, HttpSource};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management never touches the network or the terminal
    if let Some(Commands::Config { show, reset, path }) = cli.command {
        return cli::handle_config(show, reset, path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // `list` always prints and exits, whatever the TUI setting says
    let list_all = match cli.command {
        Some(Commands::List { all }) => Some(all),
        _ => None,
    };
    let use_tui = config.enable_tui && list_all.is_none();

    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, use_tui, &log_buffer);

    if config.demo_mode {
        run(DemoSource::new(), config, use_tui, list_all, log_buffer).await
    } else {
        let source = HttpSource::from_config(&config)?;
        run(source, config, use_tui, list_all, log_buffer).await
    }
}

/// Drive the chosen front end with `source`
async fn run<S>(
    source: S,
    config: Config,
    use_tui: bool,
    list_all: Option<bool>,
    log_buffer: LogBuffer,
) -> Result<()>
where
    S: ArticleSource + Send + Sync + 'static,
{
    if use_tui {
        let label = source.describe();
        startup::print_startup(&config, &label);
        startup::log_startup(&config, &label);
        tui::run_tui(source, log_buffer, config).await
    } else {
        startup::log_startup(&config, &source.describe());
        let stdout = std::io::stdout();
        cli::run_list(&source, &config, list_all.unwrap_or(false), stdout.lock()).await
    }
}

/// Initialize tracing/logging with conditional output
///
/// In TUI mode logs go to the in-memory buffer (prevents garbling the
/// display); otherwise to stderr so stdout stays clean for articles. File
/// logging writes JSON to rotating files in addition to either.
///
/// Precedence: RUST_LOG env var > config file > default "info".
/// The returned guard must live until exit so buffered file logs flush.
fn init_tracing(
    config: &Config,
    use_tui: bool,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("headlines={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = use_tui.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!use_tui).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Rolling, non-blocking log file writer if file logging is enabled
fn file_writer(
    config: &Config,
) -> Option<(
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
)> {
    let log_file = config.logging.file.as_ref()?;

    if let Err(e) = std::fs::create_dir_all(&log_file.dir) {
        // Subscriber isn't up yet, so this can only go to stderr
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            log_file.dir, e
        );
        return None;
    }

    Some(tracing_appender::non_blocking(log_file.appender()))
}
