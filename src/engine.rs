//! # Report Engine
//! Pure, testable assembly of the comparative report: `AnnotatedArticle* →
//! ComparativeReport`. No I/O, no shared state between calls; two runs over
//! identical input produce byte-identical serialized reports.
//!
//! Invalid annotations are excluded from every aggregate and surface only as
//! telemetry. A corpus with no valid article yields the explicit no-data
//! report rather than a misleading "mixed or neutral" verdict.

use metrics::{counter, gauge};
use serde::{Deserialize, Serialize};

use crate::article::AnnotatedArticle;
use crate::metrics::{
    ensure_metrics_described, ANNOTATIONS_SKIPPED_TOTAL, REPORT_LAST_RUN_TS, REPORT_RUNS_TOTAL,
    TOPICS_DROPPED_TOTAL,
};
use crate::narrative::{build_coverage_narrative, CoverageDifference};
use crate::overlap::{analyze_topic_overlap, TopicOverlap};
use crate::ranking::TopicRanking;
use crate::tally::{tally_sentiments, SentimentDistribution};
use crate::verdict::{classify, narrative, Trend};

/// Default K for top-topic selection (overridable via config or parameter).
pub const DEFAULT_TOP_K_TOPICS: usize = 5;

/// The single immutable value this crate produces. Field names are part of
/// the wire contract consumed by presentation collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparativeReport {
    pub distribution: SentimentDistribution,
    pub topic_overlap: TopicOverlap,
    pub coverage_differences: Vec<CoverageDifference>,
    pub final_sentiment_label: Trend,
    pub final_sentiment_narrative: String,
}

impl ComparativeReport {
    /// Distinguished result for a corpus with no valid articles.
    pub fn no_data() -> Self {
        Self {
            distribution: SentimentDistribution::default(),
            topic_overlap: TopicOverlap::default(),
            coverage_differences: Vec::new(),
            final_sentiment_label: Trend::NoData,
            final_sentiment_narrative: narrative(Trend::NoData),
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.final_sentiment_label == Trend::NoData
    }
}

/// Compute the cross-article comparative report.
///
/// `top_k` bounds the topic lists used in narrative sentences; values below
/// 1 are clamped rather than rejected (the engine never fails for any input
/// shape).
pub fn compute_comparative_report(
    articles: &[AnnotatedArticle],
    top_k: usize,
) -> ComparativeReport {
    ensure_metrics_described();
    counter!(REPORT_RUNS_TOTAL).increment(1);
    gauge!(REPORT_LAST_RUN_TS).set(chrono::Utc::now().timestamp().max(0) as f64);

    let top_k = top_k.max(1);

    let skipped = articles.iter().filter(|aa| !aa.is_valid()).count();
    if skipped > 0 {
        counter!(ANNOTATIONS_SKIPPED_TOTAL).increment(skipped as u64);
        tracing::debug!(skipped, total = articles.len(), "annotations skipped");
    }

    // Dropped-topic telemetry: raw length vs. what survives normalization.
    let dropped: usize = articles
        .iter()
        .filter(|aa| aa.is_valid())
        .map(|aa| {
            let raw = aa.annotation.topics.as_deref().map_or(0, |t| t.len());
            raw.saturating_sub(aa.normalized_topics().len())
        })
        .sum();
    if dropped > 0 {
        counter!(TOPICS_DROPPED_TOTAL).increment(dropped as u64);
    }

    let distribution = tally_sentiments(articles);
    if distribution.is_empty() {
        return ComparativeReport::no_data();
    }

    let topic_overlap = analyze_topic_overlap(articles);
    let ranking = TopicRanking::from_articles(articles);
    let final_sentiment_label = classify(&distribution);
    let coverage_differences = build_coverage_narrative(
        articles,
        &distribution,
        &ranking,
        final_sentiment_label,
        top_k,
    );
    let final_sentiment_narrative = narrative(final_sentiment_label);

    ComparativeReport {
        distribution,
        topic_overlap,
        coverage_differences,
        final_sentiment_label,
        final_sentiment_narrative,
    }
}

/// Convenience wrapper with the default top-K.
pub fn compute_report(articles: &[AnnotatedArticle]) -> ComparativeReport {
    compute_comparative_report(articles, DEFAULT_TOP_K_TOPICS)
}
