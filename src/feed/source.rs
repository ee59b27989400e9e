//! Article sources
//!
//! A source produces the full article list in one shot. The HTTP source
//! talks to a JSON endpoint shaped like `{"posts": [{id, title, body}, ...]}`.

use super::{Article, LoadError};
use crate::config::Config;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// Something that can produce the feed's articles
pub trait ArticleSource {
    /// Human-readable origin for logs and the title bar
    fn describe(&self) -> String;

    /// Fetch every article, in source order
    fn fetch(&self) -> impl Future<Output = Result<Vec<Article>, LoadError>> + Send;
}

// ═══════════════════════════════════════════════════════════════════════════
// HTTP Source
// ═══════════════════════════════════════════════════════════════════════════

/// Fetches articles with a single GET request
///
/// No retries: any failure is reported once as a `LoadError`.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    posts_field: String,
}

impl HttpSource {
    /// Create a source for `url`, reading the article array from `posts_field`
    ///
    /// # Errors
    /// Returns `LoadError::Network` if the HTTP client cannot be built
    pub fn new(
        url: impl Into<String>,
        posts_field: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("headlines/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LoadError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            posts_field: posts_field.into(),
        })
    }

    /// Create from application config
    pub fn from_config(config: &Config) -> Result<Self, LoadError> {
        Self::new(
            config.api_url.clone(),
            config.feed.posts_field.clone(),
            Duration::from_secs(config.feed.request_timeout_secs),
        )
    }
}

impl ArticleSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Article>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Network(format!("Failed to read body: {}", e)))?;

        tracing::debug!("Received {} bytes from {}", body.len(), self.url);
        parse_articles(&body, &self.posts_field)
    }
}

/// Interpret a response body as a sequence of articles
///
/// Accepts an object holding the array under `posts_field`, or a bare array.
/// Fields beyond `id`, `title` and `body` are ignored.
pub fn parse_articles(body: &[u8], posts_field: &str) -> Result<Vec<Article>, LoadError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| LoadError::Payload(format!("invalid JSON: {}", e)))?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map
            .remove(posts_field)
            .ok_or_else(|| LoadError::Payload(format!("missing `{}` field", posts_field)))?,
        other => {
            return Err(LoadError::Payload(format!(
                "expected an object or array, got {}",
                json_kind(&other)
            )))
        }
    };

    serde_json::from_value(list)
        .map_err(|e| LoadError::Payload(format!("`{}` is not a list of articles: {}", posts_field, e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{ArticleFeed, ArticleId};
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    /// Serve `router` on an ephemeral port, returning the `/posts` URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/posts", addr)
    }

    fn source(url: &str) -> HttpSource {
        HttpSource::new(url, "posts", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_parse_posts_field() {
        let body = br#"{
            "posts": [
                {"id": 1, "title": "One", "body": "Science!", "tags": ["x"], "reactions": {"likes": 3}},
                {"id": "two", "title": "Two", "body": "Plain"}
            ],
            "total": 2, "skip": 0, "limit": 30
        }"#;

        let articles = parse_articles(body, "posts").unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, ArticleId::Number(1));
        assert_eq!(articles[1].id, ArticleId::from("two"));
        assert_eq!(articles[0].body, "Science!");
    }

    #[test]
    fn test_parse_bare_array() {
        let body = br#"[{"id": 5, "title": "t", "body": "b"}]"#;
        assert_eq!(parse_articles(body, "posts").unwrap().len(), 1);
    }

    #[test]
    fn test_parse_custom_field() {
        let body = br#"{"items": [{"id": 5, "title": "t", "body": "b"}]}"#;
        assert_eq!(parse_articles(body, "items").unwrap().len(), 1);
        assert!(matches!(
            parse_articles(body, "posts"),
            Err(LoadError::Payload(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_payloads() {
        let cases: [&[u8]; 5] = [
            b"not json",
            br#"{"posts": "nope"}"#,
            br#"{"posts": [{"id": 1, "title": "missing body"}]}"#,
            br#"{"posts": [{"id": 1.5, "title": "t", "body": "b"}]}"#,
            b"42",
        ];
        for body in cases {
            assert!(
                matches!(parse_articles(body, "posts"), Err(LoadError::Payload(_))),
                "should reject {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve(Router::new().route(
            "/posts",
            get(|| async {
                Json(json!({
                    "posts": [
                        {"id": 1, "title": "a", "body": "technology"},
                        {"id": 2, "title": "b", "body": "sports"},
                        {"id": 3, "title": "c", "body": "health"},
                        {"id": 4, "title": "d", "body": "politics"},
                        {"id": 5, "title": "e", "body": "none"}
                    ]
                }))
            }),
        ))
        .await;

        let mut feed = ArticleFeed::new();
        feed.load(&source(&url)).await.unwrap();

        assert_eq!(feed.len(), 5);
        assert_eq!(feed.visible_count(), 3);
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let url = serve(Router::new().route(
            "/posts",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;

        let mut feed = ArticleFeed::new();
        let err = feed.load(&source(&url)).await.unwrap_err();

        assert_eq!(err, LoadError::Status(500));
        assert!(feed.is_empty());
        assert_eq!(feed.visible_count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let url = serve(Router::new()).await;
        let err = source(&url).fetch().await.unwrap_err();
        assert_eq!(err, LoadError::Status(404));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let url = serve(Router::new().route("/posts", get(|| async { "<html>oops</html>" }))).await;
        let err = source(&url).fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Payload(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        // Bind then drop to get a port nobody is listening on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(&format!("http://{}/posts", addr))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Network(_)));
    }
}
