//! narrative.rs — Human-readable coverage comparison statements.
//!
//! Rules fire in a fixed order, each contributing at most one entry and
//! skipping silently when its precondition fails; generic fallback entries
//! pad the list to three whenever at least one valid article is present.
//! Order in the result is significant: the most specific contrasts come
//! first, the overall trend last among the rule-driven entries.

use serde::{Deserialize, Serialize};

use crate::article::{AnnotatedArticle, Sentiment};
use crate::ranking::TopicRanking;
use crate::tally::SentimentDistribution;
use crate::verdict::Trend;

/// How many topics a single narrative sentence names per side.
const TOPICS_PER_SENTENCE: usize = 3;

/// Minimum number of entries for a non-empty corpus.
const MIN_ENTRIES: usize = 3;

/// One narrative observation: what differs, and why it matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDifference {
    pub comparison: String,
    pub impact: String,
}

impl CoverageDifference {
    pub fn new(comparison: impl Into<String>, impact: impl Into<String>) -> Self {
        Self {
            comparison: comparison.into(),
            impact: impact.into(),
        }
    }
}

/// Generic fallback entries, appended in order until the minimum count is
/// reached. Two distinct texts so padded reports never repeat themselves.
const FALLBACKS: [(&str, &str); 2] = [
    (
        "Coverage depth varies by source, with some outlets reporting in detail and others \
         only briefly.",
        "Readers consulting a single source may come away with an incomplete picture.",
    ),
    (
        "The focus of coverage differs between articles, with little repetition of themes \
         across outlets.",
        "Topic emphasis depends heavily on which source a reader follows.",
    ),
];

/// Build the ordered coverage-difference list for a corpus.
///
/// Returns an empty list when no valid article is present; otherwise the
/// result always has at least three entries.
pub fn build_coverage_narrative(
    articles: &[AnnotatedArticle],
    dist: &SentimentDistribution,
    ranking: &TopicRanking,
    trend: Trend,
    top_k: usize,
) -> Vec<CoverageDifference> {
    if dist.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(MIN_ENTRIES);

    // Rule 1: positive/negative contrast. Needs both camps present and both
    // scoped rankings non-empty (a camp of topicless articles has nothing to
    // contrast, so the rule skips rather than emit empty text).
    if dist.positive > 0 && dist.negative > 0 {
        let pos = TopicRanking::scoped(articles, Sentiment::Positive).top_k(TOPICS_PER_SENTENCE);
        let neg = TopicRanking::scoped(articles, Sentiment::Negative).top_k(TOPICS_PER_SENTENCE);
        if !pos.is_empty() && !neg.is_empty() {
            out.push(CoverageDifference::new(
                format!(
                    "Positive coverage focuses on {}, while negative coverage centers on {}.",
                    pos.join(", "),
                    neg.join(", ")
                ),
                "Divergent framing between positive and negative stories may pull public \
                 perception in opposite directions.",
            ));
        }
    }

    // Rule 2: diversity contrast. Fires only when some topic is covered by a
    // single article.
    let singly = ranking.singly_covered();
    if !singly.is_empty() {
        let widely: Vec<String> = ranking
            .top_k(top_k)
            .into_iter()
            .take(TOPICS_PER_SENTENCE)
            .collect();
        let singly: Vec<String> = singly.into_iter().take(TOPICS_PER_SENTENCE).collect();
        out.push(CoverageDifference::new(
            format!(
                "Widely covered topics such as {} stand alongside themes raised by a single \
                 article only, such as {}.",
                widely.join(", "),
                singly.join(", ")
            ),
            "The spread of themes suggests readers receive a broad rather than uniform \
             picture of the company.",
        ));
    }

    // Rule 3: overall trend, always emitted for a non-empty corpus.
    out.push(CoverageDifference::new(
        format!("The overall news trend is {}.", trend.tone()),
        "The prevailing tone is likely to shape public and investor perception of the \
         company.",
    ));

    // Rule 4: pad with generic entries until the minimum holds.
    let mut fallbacks = FALLBACKS.iter().cycle();
    while out.len() < MIN_ENTRIES {
        let (comparison, impact) = fallbacks.next().expect("cycled iterator never ends");
        out.push(CoverageDifference::new(*comparison, *impact));
    }

    out
}
