// src/pipeline.rs
//! One-shot analysis run: acquisition → annotation → comparative report.
//!
//! Mirrors the upstream service flow: query every configured source for one
//! company, cap per source and in total, dedup by URL, annotate each
//! article, and hand the annotated corpus to the report engine. Source and
//! annotator failures are tolerated (logged + counted) — the run always
//! produces a well-formed result, possibly the no-data report.

use metrics::counter;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::article::{AnnotatedArticle, Sentiment};
use crate::config::AnalyzerConfig;
use crate::debug::anon_hash;
use crate::engine::{compute_comparative_report, ComparativeReport};
use crate::metrics::{ensure_metrics_described, ANNOTATOR_ERRORS_TOTAL, SOURCE_ERRORS_TOTAL};
use crate::provider::{Annotator, ArticleSource, FetchedArticle};

/// Per-article view for presentation collaborators, alongside the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    pub title: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    pub topics: Vec<String>,
}

/// Result of one analysis run for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRun {
    pub company: String,
    pub articles: Vec<ArticleAnalysis>,
    pub report: ComparativeReport,
}

/// Run acquisition + annotation + report assembly once.
///
/// Never fails: a source error shortens the article sequence, an annotator
/// error skips that article, and an empty corpus yields the no-data report.
pub async fn run_analysis_once(
    company: &str,
    sources: &[Box<dyn ArticleSource>],
    annotator: &dyn Annotator,
    cfg: &AnalyzerConfig,
) -> AnalysisRun {
    ensure_metrics_described();

    // 1) Acquire, capped per source.
    let mut fetched: Vec<FetchedArticle> = Vec::new();
    for source in sources {
        match source.fetch_latest(company).await {
            Ok(mut batch) => {
                batch.truncate(cfg.max_per_source);
                fetched.append(&mut batch);
            }
            Err(e) => {
                warn!(error = ?e, source = source.name(), "article source error");
                counter!(SOURCE_ERRORS_TOTAL).increment(1);
            }
        }
    }

    // 2) Dedup by URL (multi-source scrapes repeat stories); articles
    // without a URL are never deduped away. Then apply the total cap.
    let mut seen_urls: HashSet<String> = HashSet::new();
    fetched.retain(|fa| match &fa.article.url {
        Some(url) => seen_urls.insert(url.clone()),
        None => true,
    });
    fetched.truncate(cfg.max_articles);

    // 3) Annotate each article; failures skip the article.
    let mut annotated: Vec<AnnotatedArticle> = Vec::with_capacity(fetched.len());
    for fa in &fetched {
        match annotator.annotate(fa).await {
            Ok(annotation) => {
                annotated.push(AnnotatedArticle::new(fa.article.clone(), annotation));
            }
            Err(e) => {
                // Never log raw article text; a short hashed id is enough to
                // correlate with upstream logs.
                warn!(
                    error = ?e,
                    article = %fa.article.id,
                    text_id = %anon_hash(&fa.text),
                    "annotator error, skipping article"
                );
                counter!(ANNOTATOR_ERRORS_TOTAL).increment(1);
            }
        }
    }

    // 4) Assemble.
    let report = compute_comparative_report(&annotated, cfg.top_k_topics);

    let articles = annotated
        .iter()
        .map(|aa| ArticleAnalysis {
            title: aa.article.title.clone(),
            source: aa.article.source.clone(),
            summary: aa.annotation.summary.clone(),
            sentiment: aa.annotation.sentiment,
            topics: aa.normalized_topics(),
        })
        .collect();

    AnalysisRun {
        company: company.to_string(),
        articles,
        report,
    }
}
