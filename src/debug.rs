// src/debug.rs
//! Dev-only observability helpers. Raw article or topic text never reaches
//! the logs; dev events carry a short hashed id instead.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Short anonymized id for a piece of text (first 6 bytes of SHA-256, hex).
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Dev logging gate: requires ANALYZER_DEV_LOG=1 and a debug build.
pub(crate) fn dev_logging_enabled() -> bool {
    let on = std::env::var("ANALYZER_DEV_LOG").ok().as_deref() == Some("1");
    on && cfg!(debug_assertions)
}

/// Enable compact tracing logs in development only. No-op unless the dev
/// gate is open; safe to call more than once (init errors are ignored).
pub fn enable_dev_tracing() {
    if !dev_logging_enabled() {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("analyzer=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}
