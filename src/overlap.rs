//! overlap.rs — Topic overlap across a corpus: common vs. per-article unique.
//!
//! `common` is the n-ary intersection over every valid article's topic set;
//! `unique_per_article[a]` is `topics(a)` minus the union of all *other*
//! articles' sets. The degenerate cases are explicit contracts instead of
//! panics:
//!   - 0 articles: empty intersection, empty map.
//!   - 1 article: intersection of a singleton family is the set itself, and
//!     the union of "all other articles" is empty, so nothing is subtracted.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::article::{AnnotatedArticle, ArticleId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicOverlap {
    /// Topics present in every valid article's set.
    pub common: BTreeSet<String>,
    /// Per article: topics absent from the union of all other articles.
    pub unique_per_article: BTreeMap<ArticleId, BTreeSet<String>>,
}

impl TopicOverlap {
    pub fn is_empty(&self) -> bool {
        self.common.is_empty() && self.unique_per_article.is_empty()
    }
}

/// Compute the overlap for a corpus. Invalid annotations are skipped; an
/// article whose topic set is empty after normalization still participates
/// (it forces `common` empty and gets an empty unique set).
pub fn analyze_topic_overlap(articles: &[AnnotatedArticle]) -> TopicOverlap {
    let sets: Vec<(&ArticleId, BTreeSet<String>)> = articles
        .iter()
        .filter(|aa| aa.is_valid())
        .map(|aa| (aa.id(), aa.normalized_topics().into_iter().collect()))
        .collect();

    if sets.is_empty() {
        return TopicOverlap::default();
    }

    let mut common = sets[0].1.clone();
    for (_, set) in sets.iter().skip(1) {
        common = common.intersection(set).cloned().collect();
        if common.is_empty() {
            break;
        }
    }

    let mut unique_per_article = BTreeMap::new();
    for (i, (id, set)) in sets.iter().enumerate() {
        let mut others: BTreeSet<String> = BTreeSet::new();
        for (j, (_, other)) in sets.iter().enumerate() {
            if i != j {
                others.extend(other.iter().cloned());
            }
        }
        let unique: BTreeSet<String> = set.difference(&others).cloned().collect();
        unique_per_article.insert((*id).clone(), unique);
    }

    TopicOverlap {
        common,
        unique_per_article,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{Annotation, Article, Sentiment};
    use chrono::{TimeZone, Utc};

    fn aa(id: &str, topics: &[&str]) -> AnnotatedArticle {
        AnnotatedArticle::new(
            Article {
                id: ArticleId::new(id),
                title: id.to_string(),
                source: "BBC".into(),
                published_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
                url: None,
            },
            Annotation::new(
                Sentiment::Neutral,
                0.9,
                topics.iter().map(|t| t.to_string()).collect(),
            ),
        )
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zero_articles_is_all_empty() {
        let overlap = analyze_topic_overlap(&[]);
        assert!(overlap.common.is_empty());
        assert!(overlap.unique_per_article.is_empty());
    }

    #[test]
    fn single_article_owns_everything() {
        let corpus = vec![aa("a1", &["A", "B"])];
        let overlap = analyze_topic_overlap(&corpus);
        assert_eq!(overlap.common, set(&["A", "B"]));
        assert_eq!(overlap.unique_per_article[&ArticleId::new("a1")], set(&["A", "B"]));
    }

    #[test]
    fn three_articles_general_case() {
        let corpus = vec![
            aa("a1", &["A", "B"]),
            aa("a2", &["A", "C"]),
            aa("a3", &["A", "D"]),
        ];
        let overlap = analyze_topic_overlap(&corpus);
        assert_eq!(overlap.common, set(&["A"]));
        assert_eq!(overlap.unique_per_article[&ArticleId::new("a1")], set(&["B"]));
        assert_eq!(overlap.unique_per_article[&ArticleId::new("a2")], set(&["C"]));
        assert_eq!(overlap.unique_per_article[&ArticleId::new("a3")], set(&["D"]));
    }

    #[test]
    fn identical_topic_sets_leave_no_uniques() {
        let corpus = vec![
            aa("a1", &["Earnings", "Guidance"]),
            aa("a2", &["Earnings", "Guidance"]),
            aa("a3", &["Guidance", "Earnings"]),
        ];
        let overlap = analyze_topic_overlap(&corpus);
        assert_eq!(overlap.common, set(&["Earnings", "Guidance"]));
        for unique in overlap.unique_per_article.values() {
            assert!(unique.is_empty());
        }
    }

    #[test]
    fn empty_topic_set_still_participates() {
        let corpus = vec![aa("a1", &["A"]), aa("a2", &[])];
        let overlap = analyze_topic_overlap(&corpus);
        assert!(overlap.common.is_empty());
        assert_eq!(overlap.unique_per_article[&ArticleId::new("a1")], set(&["A"]));
        assert!(overlap.unique_per_article[&ArticleId::new("a2")].is_empty());
    }

    #[test]
    fn invalid_articles_are_skipped() {
        let mut corpus = vec![aa("a1", &["A", "B"])];
        let mut broken = aa("a2", &["C"]);
        broken.annotation.sentiment = None;
        corpus.push(broken);

        let overlap = analyze_topic_overlap(&corpus);
        // Only a1 is valid, so the singleton contracts apply.
        assert_eq!(overlap.common, set(&["A", "B"]));
        assert_eq!(overlap.unique_per_article.len(), 1);
    }
}
