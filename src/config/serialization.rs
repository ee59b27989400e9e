//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    ///
    /// Runtime-only flags (`HEADLINES_NO_TUI`, `HEADLINES_DEMO`) are not persisted.
    pub fn to_toml(&self) -> String {
        // A disabled file still gets its keys written, with defaults
        let log_file = self.logging.file.clone().unwrap_or_default();
        format!(
            r#"# headlines configuration

# Article endpoint (HTTP GET returning JSON)
api_url = "{api_url}"

# Theme: Dark, Light, Nord (press 't' in the TUI to cycle)
theme = "{theme}"

# Feed behavior
[feed]
# JSON field holding the article array
posts_field = "{posts_field}"
# Articles revealed per "load more"
page_size = {page_size}
# Body preview length in characters
preview_chars = {preview_chars}
request_timeout_secs = {timeout}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            api_url = self.api_url,
            theme = self.theme,
            posts_field = self.feed.posts_field,
            page_size = self.feed.page_size,
            preview_chars = self.feed.preview_chars,
            timeout = self.feed.request_timeout_secs,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file.is_some(),
            log_file_dir = log_file.dir.display().to_string().replace('\\', "/"),
            log_file_rotation = log_file.rotation,
            log_file_prefix = log_file.prefix,
        )
    }
}
