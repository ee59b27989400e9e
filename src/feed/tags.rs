//! Category tags derived from article bodies

/// Category words in priority order
pub const VOCABULARY: [&str; 8] = [
    "technology",
    "science",
    "health",
    "business",
    "politics",
    "entertainment",
    "sports",
    "education",
];

/// Tag used when no vocabulary word matches
pub const FALLBACK_TAG: &str = "general";

/// Maximum number of tags per article
pub const MAX_TAGS: usize = 3;

/// Derive up to three tags by case-insensitive substring match
///
/// Always returns at least one tag.
pub fn tags_for(body: &str) -> Vec<&'static str> {
    let body = body.to_lowercase();

    let mut tags: Vec<&'static str> = VOCABULARY
        .iter()
        .copied()
        .filter(|word| body.contains(word))
        .take(MAX_TAGS)
        .collect();

    if tags.is_empty() {
        tags.push(FALLBACK_TAG);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_when_nothing_matches() {
        assert_eq!(tags_for("His mother had always taught him"), vec!["general"]);
        assert_eq!(tags_for(""), vec!["general"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(tags_for("SCIENCE fiction"), vec!["science"]);
        // substring, not word match
        assert_eq!(tags_for("biotechnology stocks"), vec!["technology"]);
    }

    #[test]
    fn test_priority_order_not_body_order() {
        let body = "Sports, then health, then technology.";
        assert_eq!(tags_for(body), vec!["technology", "health", "sports"]);
    }

    #[test]
    fn test_capped_at_three() {
        let body = "education sports entertainment politics business health science technology";
        let tags = tags_for(body);
        assert_eq!(tags, vec!["technology", "science", "health"]);
    }

    #[test]
    fn test_deterministic() {
        let body = "A business case for better education";
        assert_eq!(tags_for(body), tags_for(body));
        assert_eq!(tags_for(body), vec!["business", "education"]);
    }
}
