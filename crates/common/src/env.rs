//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected assets exist at startup.

use tracing::warn;

/// Warn when the static assets directory is missing; the landing page
/// route will 404 without it, but the API keeps working.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "static assets directory not found; landing page may 404");
    }
    Ok(())
}
