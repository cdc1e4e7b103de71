// src/store.rs

use anyhow::{Context, Result};
use std::{io::ErrorKind, path::Path};
use tokio::fs;
use tracing::debug;

/// File-system operations the sync pipeline needs.
#[allow(async_fn_in_trait)]
pub trait FileStore {
    /// True when `path` is an existing regular file.
    async fn exists(&self, path: &Path) -> Result<bool>;
    async fn read(&self, path: &Path) -> Result<Vec<u8>>;
    /// Create or truncate `path` with `bytes`. The parent directory must exist.
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<()>;
    async fn remove(&self, path: &Path) -> Result<()>;
}

/// `FileStore` backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl FileStore for DiskStore {
    async fn exists(&self, path: &Path) -> Result<bool> {
        match fs::metadata(path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("stat {}", path.display())),
        }
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path)
            .await
            .with_context(|| format!("reading {}", path.display()))
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(path, bytes)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
        Ok(())
    }

    async fn remove(&self, path: &Path) -> Result<()> {
        fs::remove_file(path)
            .await
            .with_context(|| format!("deleting {}", path.display()))
    }
}
