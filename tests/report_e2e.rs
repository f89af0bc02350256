// tests/report_e2e.rs
//
// End-to-end scenario over the public engine API: three articles with one
// sentiment each, disjoint topics, mixed verdict.

use chrono::{TimeZone, Utc};
use std::collections::BTreeSet;

use company_news_analyzer::{
    compute_report, AnnotatedArticle, Annotation, Article, ArticleId, Sentiment, Trend,
};

fn article(id: &str, title: &str) -> Article {
    Article {
        id: ArticleId::new(id),
        title: title.to_string(),
        source: "Reuters".into(),
        published_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        url: Some(format!("https://example.com/{id}")),
    }
}

fn annotated(id: &str, sentiment: Sentiment, topics: &[&str]) -> AnnotatedArticle {
    AnnotatedArticle::new(
        article(id, id),
        Annotation::new(
            sentiment,
            0.9,
            topics.iter().map(|t| t.to_string()).collect(),
        ),
    )
}

fn corpus() -> Vec<AnnotatedArticle> {
    vec![
        annotated(
            "a1",
            Sentiment::Positive,
            &["Financial Performance", "Market Growth"],
        ),
        annotated("a2", Sentiment::Negative, &["Regulations", "Compliance"]),
        annotated("a3", Sentiment::Neutral, &["Leadership"]),
    ]
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn mixed_three_article_scenario() {
    let report = compute_report(&corpus());

    // Distribution 1/1/1.
    assert_eq!(report.distribution.positive, 1);
    assert_eq!(report.distribution.negative, 1);
    assert_eq!(report.distribution.neutral, 1);

    // Disjoint topic sets: nothing common, everything unique.
    assert!(report.topic_overlap.common.is_empty());
    assert_eq!(
        report.topic_overlap.unique_per_article[&ArticleId::new("a1")],
        set(&["Financial Performance", "Market Growth"])
    );
    assert_eq!(
        report.topic_overlap.unique_per_article[&ArticleId::new("a2")],
        set(&["Regulations", "Compliance"])
    );
    assert_eq!(
        report.topic_overlap.unique_per_article[&ArticleId::new("a3")],
        set(&["Leadership"])
    );

    // Verdict: perfectly balanced corpus.
    assert_eq!(report.final_sentiment_label, Trend::MixedOrNeutral);
    assert!(report.final_sentiment_narrative.contains("mixed or neutral"));

    // Narrative: at least three entries, with the expected contrast first
    // and the trend entry trailing the rule-driven ones.
    assert!(report.coverage_differences.len() >= 3);
    let contrast = &report.coverage_differences[0].comparison;
    assert!(contrast.contains("Financial Performance, Market Growth"));
    assert!(contrast.contains("Regulations, Compliance"));
    assert!(report
        .coverage_differences
        .iter()
        .any(|d| d.comparison.contains("mixed or neutral")));
}

#[test]
fn distribution_sums_to_valid_count() {
    let mut articles = corpus();
    // One unrecognized label, one absent topics field.
    articles.push(AnnotatedArticle::new(
        article("a4", "a4"),
        Annotation {
            sentiment: None,
            confidence: 0.5,
            topics: Some(vec!["Noise".into()]),
            summary: None,
        },
    ));
    articles.push(AnnotatedArticle::new(
        article("a5", "a5"),
        Annotation {
            sentiment: Some(Sentiment::Positive),
            confidence: 0.5,
            topics: None,
            summary: None,
        },
    ));

    let report = compute_report(&articles);
    let valid = articles.iter().filter(|a| a.is_valid()).count();
    assert_eq!(report.distribution.total(), valid);

    // The invalid articles leak into no aggregate.
    assert!(!report
        .topic_overlap
        .unique_per_article
        .contains_key(&ArticleId::new("a4")));
    assert!(!report
        .coverage_differences
        .iter()
        .any(|d| d.comparison.contains("Noise")));
}

#[test]
fn topicless_article_counts_toward_distribution_only() {
    let mut articles = corpus();
    // Topics present but all empty after normalization.
    articles.push(AnnotatedArticle::new(
        article("a6", "a6"),
        Annotation::new(Sentiment::Positive, 0.7, vec!["   ".into(), "".into()]),
    ));

    let report = compute_report(&articles);
    assert_eq!(report.distribution.positive, 2);
    // The article participates in overlap with an empty set.
    assert!(report.topic_overlap.unique_per_article[&ArticleId::new("a6")].is_empty());
}
