// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// HTTP operations the sync pipeline needs.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    /// GET `url` and return the raw body. The status code is not checked.
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>>;

    /// POST `body` to `url` with the client's default headers only.
    /// Returns the response status; callers decide whether it matters.
    async fn post_text(&self, url: &Url, body: String) -> Result<u16>;
}

impl HttpClient for Client {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let resp = self
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;
        debug!(%url, status = %resp.status(), "response");
        let bytes = resp
            .bytes()
            .await
            .with_context(|| format!("reading body from {}", url))?;
        Ok(bytes.to_vec())
    }

    async fn post_text(&self, url: &Url, body: String) -> Result<u16> {
        let resp = self
            .post(url.clone())
            .body(body)
            .send()
            .await
            .with_context(|| format!("POST {}", url))?;
        Ok(resp.status().as_u16())
    }
}

/// Download-once cache of the source dataset.
pub mod cache {
    use super::*;
    use crate::store::FileStore;
    use std::path::Path;
    use tokio::time::Instant;
    use tracing::info;

    /// Download `url` into `path` unless `path` already exists.
    ///
    /// The body is written verbatim, error pages included. Returns `true`
    /// when a download happened.
    pub async fn ensure_cached(
        store: &impl FileStore,
        http: &impl HttpClient,
        path: &Path,
        url: &Url,
    ) -> Result<bool> {
        if store.exists(path).await? {
            info!(path = %path.display(), "cache hit; skipping download");
            return Ok(false);
        }

        info!(%url, "downloading");
        let start = Instant::now();
        let body = http.fetch(url).await?;
        store.write(path, &body).await?;
        info!(
            path = %path.display(),
            bytes = body.len(),
            elapsed = ?start.elapsed(),
            "cached"
        );
        Ok(true)
    }
}
