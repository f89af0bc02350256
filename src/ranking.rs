//! ranking.rs — Corpus-wide topic frequency ranking.
//!
//! Topics are ordered by descending frequency; ties break by first
//! occurrence across the article sequence. The tie-break is recorded
//! explicitly while scanning (never left to hash-map iteration order), so
//! two runs over the same input produce the same ranking.

use std::collections::HashMap;

use crate::article::{AnnotatedArticle, Sentiment};

/// One ranked topic with its corpus-wide frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTopic {
    pub topic: String,
    pub count: usize,
}

/// Frequency ranking over the topics of a corpus (or a sentiment-scoped
/// subset of it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicRanking {
    ordered: Vec<RankedTopic>,
}

impl TopicRanking {
    /// Rank topics across all valid articles.
    pub fn from_articles(articles: &[AnnotatedArticle]) -> Self {
        Self::build(articles, None)
    }

    /// Rank topics across valid articles carrying the given label only.
    /// Used for the positive-vs-negative narrative contrast.
    pub fn scoped(articles: &[AnnotatedArticle], sentiment: Sentiment) -> Self {
        Self::build(articles, Some(sentiment))
    }

    fn build(articles: &[AnnotatedArticle], scope: Option<Sentiment>) -> Self {
        // topic -> (count, first-seen position across the whole scan)
        let mut stats: HashMap<String, (usize, usize)> = HashMap::new();
        let mut next_pos = 0usize;

        for aa in articles {
            if !aa.is_valid() {
                continue;
            }
            if let Some(wanted) = scope {
                if aa.sentiment() != Some(wanted) {
                    continue;
                }
            }
            for topic in aa.normalized_topics() {
                let entry = stats.entry(topic).or_insert((0, next_pos));
                entry.0 += 1;
                next_pos += 1;
            }
        }

        let mut ordered: Vec<(String, usize, usize)> = stats
            .into_iter()
            .map(|(topic, (count, first))| (topic, count, first))
            .collect();
        ordered.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        Self {
            ordered: ordered
                .into_iter()
                .map(|(topic, count, _)| RankedTopic { topic, count })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Full ranking, most frequent first.
    pub fn ranked(&self) -> &[RankedTopic] {
        &self.ordered
    }

    /// The `k` most frequent topics, in rank order.
    pub fn top_k(&self, k: usize) -> Vec<String> {
        self.ordered
            .iter()
            .take(k)
            .map(|r| r.topic.clone())
            .collect()
    }

    /// Topics whose total corpus frequency is exactly 1 ("singly covered"),
    /// in rank order. Feeds the diversity narrative; distinct from the
    /// per-article unique sets in `overlap`.
    pub fn singly_covered(&self) -> Vec<String> {
        self.ordered
            .iter()
            .filter(|r| r.count == 1)
            .map(|r| r.topic.clone())
            .collect()
    }
}
