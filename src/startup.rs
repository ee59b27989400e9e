// Startup module - displays banner before the TUI takes over
//
// Shows version, where the config came from, and where articles will be
// loaded from.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Print the startup banner (TUI mode, before entering the alternate screen)
pub fn print_startup(config: &Config, source: &str) {
    for line in banner_lines(config, source) {
        println!("{}", line);
    }
}

/// Log the same information through tracing (lands in the logs panel / log file)
pub fn log_startup(config: &Config, source: &str) {
    tracing::info!("headlines v{} starting", VERSION);
    tracing::info!(
        "Source: {} (page size {}, preview {} chars)",
        source,
        config.feed.page_size,
        config.feed.preview_chars
    );
    if let Some(log_file) = &config.logging.file {
        tracing::info!(
            "File logging: {} ({} rotation)",
            log_file.dir.display(),
            log_file.rotation
        );
    }
}

fn banner_lines(config: &Config, source: &str) -> Vec<String> {
    use colors::*;

    let mut lines = vec![
        String::new(),
        format!("  {BOLD}{CYAN}headlines{RESET} {DIM}v{VERSION}{RESET}"),
        format!("  {DIM}Terminal news reader{RESET}"),
        String::new(),
    ];

    if let Some(path) = Config::config_path() {
        if path.exists() {
            lines.push(format!(
                "  {DIM}Config:{RESET} {GREEN}✓{RESET} {}",
                path.display()
            ));
        } else {
            lines.push(format!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}"));
        }
    }

    lines.push(format!(
        "  {MAGENTA}▸{RESET} Loading from {BOLD}{}{RESET} {DIM}({} per page){RESET}",
        source, config.feed.page_size
    ));
    if config.demo_mode {
        lines.push(format!(
            "  {YELLOW}▸{RESET} {YELLOW}Demo mode active{RESET} {DIM}(built-in articles){RESET}"
        ));
    }
    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_mentions_source_and_demo() {
        let mut config = Config::default();
        config.demo_mode = true;

        let text = banner_lines(&config, "demo articles").join("\n");
        assert!(text.contains("demo articles"));
        assert!(text.contains("Demo mode active"));
        assert!(text.contains("3 per page"));
    }
}
