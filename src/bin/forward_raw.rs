//! Forward the cached dataset as-is: no normalization, no rewrite of the cache.

use anyhow::Result;
use ecdc_sync::{logging, run, DiskStore, SyncConfig, Variant};
use reqwest::Client;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();

    let config = SyncConfig::new(Variant::Forward)?;
    let report = run(&config, &DiskStore, &Client::new()).await?;

    info!(
        downloaded = report.downloaded,
        records = ?report.records,
        status = report.forward_status,
        "all done"
    );
    Ok(())
}
