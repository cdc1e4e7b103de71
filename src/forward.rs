// src/forward.rs

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::time::Instant;
use tracing::info;
use url::Url;

use crate::fetch::HttpClient;

/// POST `doc` as compact JSON text to `endpoint`.
///
/// The response status is logged and returned, never checked.
pub async fn forward(http: &impl HttpClient, endpoint: &Url, doc: &Value) -> Result<u16> {
    let body = serde_json::to_string(doc).context("serializing dataset for forward")?;
    let bytes = body.len();

    let start = Instant::now();
    let status = http.post_text(endpoint, body).await?;
    info!(%endpoint, bytes, status, elapsed = ?start.elapsed(), "forwarded");
    Ok(status)
}
