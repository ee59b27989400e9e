// CLI module - command-line argument parsing and handlers
//
// Provides subcommands:
// - list [--all]: Load the feed once and print it (no TUI)
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use crate::feed::{ArticleFeed, ArticleSource, Renderer};
use crate::render::TextRenderer;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Terminal news reader
#[derive(Parser)]
#[command(name = "headlines")]
#[command(version = VERSION)]
#[command(about = "Browse, page through and hide news articles in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the feed without starting the TUI
    List {
        /// Reveal every page instead of only the first
        #[arg(long)]
        all: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Load the feed from `source` and print it through a `TextRenderer`
///
/// # Errors
/// Returns the load error (after printing the user-facing message) so the
/// process exits non-zero.
pub async fn run_list<S: ArticleSource, W: Write>(
    source: &S,
    config: &Config,
    all: bool,
    out: W,
) -> Result<()> {
    let mut feed = ArticleFeed::with_page_size(config.feed.page_size);

    if let Err(e) = feed.load(source).await {
        eprintln!("{}", e.user_message());
        return Err(e).context(format!("Loading articles from {}", source.describe()));
    }

    if all {
        while feed.has_more() {
            feed.reveal_more();
        }
    }

    let mut renderer = TextRenderer::new(out);
    renderer.render(&feed.view(config.feed.preview_chars));
    Ok(())
}

/// Handle `config` subcommand flags
pub fn handle_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show();
        Ok(())
    } else if reset {
        handle_config_reset()
    } else {
        println!("Usage: headlines config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!();
    println!("# Runtime flags");
    println!("# enable_tui = {}", config.enable_tui);
    println!("# demo_mode = {}", config.demo_mode);

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Article, LoadError};

    struct StaticSource(Result<Vec<Article>, LoadError>);

    impl ArticleSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn fetch(&self) -> Result<Vec<Article>, LoadError> {
            self.0.clone()
        }
    }

    fn five() -> Vec<Article> {
        (1..=5i64)
            .map(|i| Article::new(i, format!("Headline {}", i), "body"))
            .collect()
    }

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from(["headlines", "list", "--all"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { all: true })));

        let cli = Cli::try_parse_from(["headlines"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[tokio::test]
    async fn test_list_first_page() {
        let mut out = Vec::new();
        run_list(&StaticSource(Ok(five())), &Config::default(), false, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Headline 3"));
        assert!(!text.contains("Headline 4"));
    }

    #[tokio::test]
    async fn test_list_all() {
        let mut out = Vec::new();
        run_list(&StaticSource(Ok(five())), &Config::default(), true, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Headline 5"));
        assert!(text.contains("Showing all 5 articles"));
    }

    #[tokio::test]
    async fn test_list_failure_is_error() {
        let mut out = Vec::new();
        let result = run_list(
            &StaticSource(Err(LoadError::Status(500))),
            &Config::default(),
            false,
            &mut out,
        )
        .await;

        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
