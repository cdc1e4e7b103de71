// src/sync.rs

use anyhow::Result;
use tracing::{info, instrument};

use crate::{
    config::SyncConfig,
    dataset::{self, normalize_notification_rate},
    fetch::{cache::ensure_cached, HttpClient},
    forward::forward,
    store::FileStore,
};

/// What a single run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// The cache was absent and the dataset was downloaded.
    pub downloaded: bool,
    /// Length of the `records` array, when the document has one.
    pub records: Option<usize>,
    /// Empty rates replaced with `null`; `None` when the variant skips normalization.
    pub normalized: Option<usize>,
    /// Status returned by the forward endpoint.
    pub forward_status: u16,
}

/// Run the sync pipeline for `config.variant`:
/// ensure-cached → load → [normalize → persist] → forward.
///
/// Every failure is returned as-is; nothing is retried or rolled back.
#[instrument(level = "info", skip_all, fields(variant = ?config.variant))]
pub async fn run(
    config: &SyncConfig,
    store: &impl FileStore,
    http: &impl HttpClient,
) -> Result<SyncReport> {
    let path = config.cache_path.as_path();

    let downloaded = ensure_cached(store, http, path, &config.source_url).await?;
    let mut doc = dataset::load(store, path).await?;

    let normalized = if config.normalizes() {
        let replaced = normalize_notification_rate(&mut doc)?;
        info!(replaced, "normalized notification rates");
        dataset::persist(store, path, &doc).await?;
        Some(replaced)
    } else {
        None
    };

    let forward_status = forward(http, &config.forward_url, &doc).await?;

    Ok(SyncReport {
        downloaded,
        records: dataset::record_count(&doc),
        normalized,
        forward_status,
    })
}
