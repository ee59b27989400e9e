//! Feed configuration
//!
//! Page size, preview length and the shape of the upstream payload.

use serde::Deserialize;

use crate::feed::{PAGE_SIZE, PREVIEW_CHARS};

/// Feed behavior settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// JSON field holding the article array
    pub posts_field: String,
    /// Articles revealed per "load more" (minimum 1)
    pub page_size: usize,
    /// Body preview length in characters
    pub preview_chars: usize,
    /// HTTP request timeout
    pub request_timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            posts_field: "posts".to_string(),
            page_size: PAGE_SIZE,
            preview_chars: PREVIEW_CHARS,
            request_timeout_secs: 10,
        }
    }
}

/// Feed settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeed {
    pub posts_field: Option<String>,
    pub page_size: Option<usize>,
    pub preview_chars: Option<usize>,
    pub request_timeout_secs: Option<u64>,
}

impl FeedConfig {
    /// Create from file config with defaults; `page_size_override` comes from the environment
    pub fn from_file(file: Option<FileFeed>, page_size_override: Option<usize>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            posts_field: file.posts_field.unwrap_or(defaults.posts_field),
            page_size: page_size_override
                .or(file.page_size)
                .unwrap_or(defaults.page_size)
                .max(1),
            preview_chars: file.preview_chars.unwrap_or(defaults.preview_chars),
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
