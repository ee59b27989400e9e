// Demo mode: serve a built-in article set without touching the network
//
// Useful for trying the TUI offline or on a plane. The short delay keeps the
// loading placeholder visible for a moment, like a real fetch would.
//
// Run with: HEADLINES_DEMO=1 cargo run --release

use crate::feed::{Article, ArticleSource, LoadError};
use std::time::Duration;
use tokio::time::sleep;

/// Offline article source
pub struct DemoSource {
    delay: Duration,
}

impl DemoSource {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(800))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleSource for DemoSource {
    fn describe(&self) -> String {
        "demo articles".to_string()
    }

    async fn fetch(&self) -> Result<Vec<Article>, LoadError> {
        sleep(self.delay).await;
        Ok(demo_articles())
    }
}

/// The built-in article set
pub fn demo_articles() -> Vec<Article> {
    vec![
        Article::new(
            1,
            "Chip makers race to shrink transistors again",
            "The latest technology roadmap promises two more process shrinks before the decade \
             is out. Analysts say the business case depends on demand from data centres, while \
             researchers warn the science of lithography is running into hard physical limits.",
        ),
        Article::new(
            2,
            "City council approves new cycling lanes",
            "After months of debate the council voted seven to two in favour of protected lanes \
             on the main avenue. Residents packed the chamber; the politics of parking, as ever, \
             dominated the evening.",
        ),
        Article::new(
            3,
            "Marathon season opens with a record field",
            "More than forty thousand runners lined up on Sunday morning. Organisers credit a \
             surge of interest in amateur sports and a renewed focus on public health.",
        ),
        Article::new(
            4,
            "A quiet afternoon at the harbour",
            "Fishing boats came in early as the fog rolled over the breakwater. Gulls circled; \
             somebody's radio played an old song that nobody could quite name.",
        ),
        Article::new(
            5,
            "Streaming platforms bet on live events",
            "Live concerts and award shows are the new battleground in entertainment. Executives \
             say the business model rewards appointment viewing, and sports rights are next.",
        ),
        Article::new(
            6,
            "Schools pilot four-day week",
            "Twelve districts will trial a shortened week from September. Supporters argue it \
             improves staff retention; critics worry about the effect on education outcomes \
             and on parents' childcare costs.",
        ),
        Article::new(
            7,
            "Telescope captures faint early galaxy",
            "Astronomers published images of a galaxy whose light left it thirteen billion years \
             ago. The science team says the result tightens models of early star formation.",
        ),
        Article::new(
            8,
            "Local bakery celebrates fifty years",
            "Three generations of the same family have run the shop on Mill Street. The queue on \
             Saturday stretched round the corner for free slices of the anniversary cake.",
        ),
        Article::new(
            9,
            "Hospitals adopt AI triage tools",
            "A new generation of technology is helping emergency departments prioritise patients. \
             Health regulators have asked for independent audits before wider rollout.",
        ),
        Article::new(
            10,
            "Election debate draws record audience",
            "Both candidates sparred over tax and housing in a ninety-minute broadcast. Viewers \
             described the politics as bruising, but the entertainment value was undeniable.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{tags_for, ArticleFeed};
    use std::collections::HashSet;

    #[test]
    fn test_demo_ids_unique() {
        let articles = demo_articles();
        let ids: HashSet<_> = articles.iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids.len(), articles.len());
    }

    #[test]
    fn test_demo_covers_fallback_tag() {
        assert!(demo_articles()
            .iter()
            .any(|a| tags_for(&a.body) == vec!["general"]));
    }

    #[tokio::test]
    async fn test_demo_source_loads() {
        let mut feed = ArticleFeed::new();
        feed.load(&DemoSource::with_delay(Duration::ZERO))
            .await
            .unwrap();
        assert_eq!(feed.len(), 10);
        assert_eq!(feed.visible_count(), 3);
    }
}
