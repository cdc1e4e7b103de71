use anyhow::Result;
use ecdc_sync::{logging, run, DiskStore, SyncConfig, Variant};
use reqwest::Client;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    logging::init();
    info!("startup");

    // ─── 2) fixed configuration ──────────────────────────────────────
    let config = SyncConfig::new(Variant::NormalizeAndPersist)?;
    let client = Client::new();

    // ─── 3) fetch, normalize, persist, forward ───────────────────────
    let report = run(&config, &DiskStore, &client).await?;

    info!(
        downloaded = report.downloaded,
        records = ?report.records,
        normalized = ?report.normalized,
        status = report.forward_status,
        "all done"
    );
    Ok(())
}
