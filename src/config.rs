// src/config.rs
//! Analyzer configuration. Supports TOML or JSON files with an env-var
//! path override:
//!   1) $ANALYZER_CONFIG_PATH
//!   2) config/analyzer.toml
//!   3) config/analyzer.json
//!   4) built-in defaults
//! Values are validated on load; `top_k_topics` is clamped to >= 1.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";

const DEFAULT_TOML_PATH: &str = "config/analyzer.toml";
const DEFAULT_JSON_PATH: &str = "config/analyzer.json";

const DEFAULT_TOP_K_TOPICS: usize = 5;
const DEFAULT_MAX_ARTICLES: usize = 10;
const DEFAULT_MAX_PER_SOURCE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// How many top-ranked topics narrative sentences may draw from.
    pub top_k_topics: usize,
    /// Total article cap per run.
    pub max_articles: usize,
    /// Article cap per acquisition source.
    pub max_per_source: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_k_topics: DEFAULT_TOP_K_TOPICS,
            max_articles: DEFAULT_MAX_ARTICLES,
            max_per_source: DEFAULT_MAX_PER_SOURCE,
        }
    }
}

impl AnalyzerConfig {
    /// Load from an explicit path. The extension hints the format; both
    /// TOML and JSON are attempted before giving up.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading analyzer config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::parse(&content, &ext).map(Self::validated)
    }

    /// Load using the env override + fallback chain; missing files fall
    /// back to defaults, unreadable ones are errors.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
        let toml_p = PathBuf::from(DEFAULT_TOML_PATH);
        if toml_p.exists() {
            return Self::load_from(&toml_p);
        }
        let json_p = PathBuf::from(DEFAULT_JSON_PATH);
        if json_p.exists() {
            return Self::load_from(&json_p);
        }
        Ok(Self::default())
    }

    fn parse(s: &str, hint_ext: &str) -> Result<Self> {
        let try_toml_first = hint_ext == "toml" || !s.trim_start().starts_with('{');
        if try_toml_first {
            if let Ok(v) = toml::from_str::<Self>(s) {
                return Ok(v);
            }
        }
        if let Ok(v) = serde_json::from_str::<Self>(s) {
            return Ok(v);
        }
        if !try_toml_first {
            if let Ok(v) = toml::from_str::<Self>(s) {
                return Ok(v);
            }
        }
        Err(anyhow!("unsupported analyzer config format"))
    }

    /// Clamp values the engine requires to be at least 1.
    fn validated(mut self) -> Self {
        self.top_k_topics = self.top_k_topics.max(1);
        self.max_articles = self.max_articles.max(1);
        self.max_per_source = self.max_per_source.max(1);
        self
    }
}
