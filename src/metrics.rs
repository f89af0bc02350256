// src/metrics.rs
//! Metric names and one-time registration.
//!
//! The crate records through the `metrics` facade only; the host process
//! decides which recorder (if any) to install. Skipped annotations and
//! dropped topic strings are observability signals, never report fields.

use metrics::{describe_counter, describe_gauge};
use once_cell::sync::OnceCell;

pub const REPORT_RUNS_TOTAL: &str = "report_runs_total";
pub const ANNOTATIONS_SKIPPED_TOTAL: &str = "annotations_skipped_total";
pub const TOPICS_DROPPED_TOTAL: &str = "topics_dropped_total";
pub const SOURCE_ERRORS_TOTAL: &str = "pipeline_source_errors_total";
pub const ANNOTATOR_ERRORS_TOTAL: &str = "pipeline_annotator_errors_total";
pub const REPORT_LAST_RUN_TS: &str = "report_last_run_ts";

/// One-time metrics registration (so series carry descriptions wherever a
/// recorder is installed).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(REPORT_RUNS_TOTAL, "Comparative reports computed.");
        describe_counter!(
            ANNOTATIONS_SKIPPED_TOTAL,
            "Annotated articles excluded for a missing or unrecognized label or absent topics."
        );
        describe_counter!(
            TOPICS_DROPPED_TOTAL,
            "Topic strings dropped as empty after normalization."
        );
        describe_counter!(SOURCE_ERRORS_TOTAL, "Article source fetch errors.");
        describe_counter!(
            ANNOTATOR_ERRORS_TOTAL,
            "Annotator failures (article skipped)."
        );
        describe_gauge!(REPORT_LAST_RUN_TS, "Unix ts when a report was last computed.");
    });
}
