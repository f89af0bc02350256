//! verdict.rs — Qualitative trend classification over a sentiment tally.
//!
//! A fixed threshold table, evaluated top to bottom, first match wins; the
//! ordering resolves the overlap between the two positive rows and the two
//! negative rows. The `NoData` variant is never produced by the table — the
//! assembler assigns it when the corpus has no valid articles.

use serde::{Deserialize, Serialize};

use crate::tally::SentimentDistribution;

/// Qualitative sentiment trend over the whole corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    OverwhelminglyPositive,
    GenerallyPositive,
    OverwhelminglyNegative,
    GenerallyNegative,
    MixedOrNeutral,
    NoData,
}

impl Trend {
    /// Qualitative wording for this trend, used in narrative sentences.
    pub fn tone(&self) -> &'static str {
        match self {
            Trend::OverwhelminglyPositive => {
                "overwhelmingly positive, suggesting strong performance and optimistic outlook"
            }
            Trend::GenerallyPositive => "generally positive, with some areas of concern",
            Trend::OverwhelminglyNegative => {
                "predominantly negative, indicating significant challenges"
            }
            Trend::GenerallyNegative => "somewhat negative, with some positive aspects",
            Trend::MixedOrNeutral => "mixed or neutral, reflecting a complex situation",
            Trend::NoData => "not assessable, as no articles were available",
        }
    }
}

/// Threshold table over `{p, n, u}`. Rows in order:
///   p > n + u  -> OverwhelminglyPositive
///   p > n      -> GenerallyPositive
///   n > p + u  -> OverwhelminglyNegative
///   n > p      -> GenerallyNegative
///   otherwise  -> MixedOrNeutral
pub fn classify(dist: &SentimentDistribution) -> Trend {
    let (p, n, u) = (dist.positive, dist.negative, dist.neutral);
    if p > n + u {
        Trend::OverwhelminglyPositive
    } else if p > n {
        Trend::GenerallyPositive
    } else if n > p + u {
        Trend::OverwhelminglyNegative
    } else if n > p {
        Trend::GenerallyNegative
    } else {
        Trend::MixedOrNeutral
    }
}

/// Final report sentence for a trend. This is the text a speech/translation
/// collaborator would consume downstream.
pub fn narrative(trend: Trend) -> String {
    match trend {
        Trend::NoData => {
            "No news articles were available for analysis, so no sentiment trend could be \
             established."
                .to_string()
        }
        t => format!("Overall news coverage is {}.", t.tone()),
    }
}
