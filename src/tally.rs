//! tally.rs — Sentiment distribution over a corpus of annotated articles.
//!
//! Pure counting, no ordering dependency. Invalid annotations (missing or
//! unrecognized label, absent topics field) are excluded, so the three
//! counts always sum to the number of valid articles.

use serde::{Deserialize, Serialize};

use crate::article::{AnnotatedArticle, Sentiment};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn new(positive: usize, negative: usize, neutral: usize) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// Number of valid articles behind this distribution.
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Count valid annotations by label. Empty input yields `{0, 0, 0}`.
pub fn tally_sentiments(articles: &[AnnotatedArticle]) -> SentimentDistribution {
    let mut dist = SentimentDistribution::default();
    for aa in articles {
        if !aa.is_valid() {
            continue;
        }
        match aa.sentiment() {
            Some(Sentiment::Positive) => dist.positive += 1,
            Some(Sentiment::Negative) => dist.negative += 1,
            Some(Sentiment::Neutral) => dist.neutral += 1,
            None => {} // excluded by is_valid above
        }
    }
    dist
}
