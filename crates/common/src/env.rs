//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{debug, info};

/// Ensure the data directory holding the collection files exists.
pub async fn ensure_data_dir(data_dir: &Path) -> anyhow::Result<()> {
    if tokio::fs::metadata(data_dir).await.is_ok() {
        debug!(data_dir = %data_dir.display(), "data directory present");
        return Ok(());
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", data_dir.display()))?;
    info!(data_dir = %data_dir.display(), "created data directory");
    Ok(())
}
