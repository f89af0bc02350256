// src/provider.rs
//! Collaborator seams: article acquisition and per-article annotation.
//!
//! The engine itself never performs I/O; scraping, search APIs, and model
//! inference live behind these traits. Implementations may fail per call —
//! the pipeline translates failures into a shorter input sequence.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::article::{Annotation, Article};

/// Raw article as returned by an acquisition source, body text included.
/// The text is consumed by the annotator and never enters the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub text: String,
}

#[async_trait::async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the latest articles mentioning `company`, deterministically
    /// ordered by the source's own notion of relevance.
    async fn fetch_latest(&self, company: &str) -> Result<Vec<FetchedArticle>>;
    fn name(&self) -> &'static str;
}

#[async_trait::async_trait]
pub trait Annotator: Send + Sync {
    /// Classify sentiment and extract topics for one article.
    async fn annotate(&self, article: &FetchedArticle) -> Result<Annotation>;
}
