//! article.rs — Data model for articles and their annotations.
//!
//! The analysis core consumes `(Article, Annotation)` pairs produced by the
//! acquisition and annotation collaborators. Articles are immutable once
//! acquired; annotations may arrive incomplete (missing label, missing
//! topics) and are then excluded from every aggregate without aborting the
//! run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::normalize;

/// Opaque article identifier, assigned by the acquisition collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One acquired news article. The body text stays with the acquisition
/// collaborator (see `provider::FetchedArticle`); only the metadata travels
/// into reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// E.g. "Reuters", "BBC".
    pub source: String,
    pub published_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Sentiment label as classified upstream. Wire form is UPPERCASE to match
/// the classifier output ("POSITIVE", "NEGATIVE", "NEUTRAL").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Lenient label parsing for annotator adapters: trims and ignores case.
    /// Returns `None` for anything outside the three known labels.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

/// Per-article annotation: sentiment, classifier confidence, topics.
///
/// `sentiment: None` means the upstream label was missing or unrecognized;
/// `topics: None` means topic extraction did not run. Either makes the
/// annotation invalid and the article is skipped by the aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    /// Classifier confidence in <0.0, 1.0>.
    pub confidence: f32,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    /// Optional upstream summary, passed through for presentation; the core
    /// never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Annotation {
    pub fn new(sentiment: Sentiment, confidence: f32, topics: Vec<String>) -> Self {
        Self {
            sentiment: Some(sentiment),
            confidence: clamp01(confidence),
            topics: Some(topics),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Valid = recognized sentiment label AND topics field present.
    pub fn is_valid(&self) -> bool {
        self.sentiment.is_some() && self.topics.is_some()
    }
}

/// The atomic unit the analysis core consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedArticle {
    pub article: Article,
    pub annotation: Annotation,
}

impl AnnotatedArticle {
    pub fn new(article: Article, annotation: Annotation) -> Self {
        Self {
            article,
            annotation,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.annotation.is_valid()
    }

    pub fn id(&self) -> &ArticleId {
        &self.article.id
    }

    pub fn sentiment(&self) -> Option<Sentiment> {
        self.annotation.sentiment
    }

    /// Normalized topics in first-occurrence order: trimmed, inner
    /// whitespace collapsed, empties dropped, in-article duplicates removed.
    /// Empty when the topics field is absent.
    pub fn normalized_topics(&self) -> Vec<String> {
        self.annotation
            .topics
            .as_deref()
            .map(normalize::normalize_topics)
            .unwrap_or_default()
    }
}

fn clamp01(x: f32) -> f32 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
