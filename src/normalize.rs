// src/normalize.rs
//! Topic-string normalization applied before any set operation.
//!
//! Upstream annotators promise trimmed, case-folded topics, but the core
//! re-applies normalization so that a sloppy collaborator cannot poison the
//! set algebra: inner whitespace is collapsed, surrounding whitespace
//! trimmed, empty strings dropped, and duplicates within one article removed
//! (case-insensitive compare, first spelling wins).

use once_cell::sync::OnceCell;
use regex::Regex;

/// Normalize a single topic string. Returns `None` when nothing is left
/// after trimming.
pub fn normalize_topic(raw: &str) -> Option<String> {
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"));

    let out = re_ws.replace_all(raw.trim(), " ").to_string();
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Normalize one article's topic list, preserving first-occurrence order.
/// Duplicates are detected case-insensitively; the first spelling is kept.
pub fn normalize_topics(raw: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());
    for t in raw {
        let Some(norm) = normalize_topic(t) else {
            continue;
        };
        let key = norm.to_lowercase();
        if seen.iter().any(|s| *s == key) {
            continue;
        }
        seen.push(key);
        out.push(norm);
    }
    out
}
