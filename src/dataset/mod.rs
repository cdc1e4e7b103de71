// src/dataset/mod.rs

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use std::path::Path;
use tracing::info;

use crate::store::FileStore;

pub mod normalize;

pub use normalize::{normalize_notification_rate, NOTIFICATION_RATE_FIELD};

/// Parse the cached file as JSON. No other validation is done.
pub async fn load(store: &impl FileStore, path: &Path) -> Result<Value> {
    let bytes = store.read(path).await?;
    let doc: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing JSON from {}", path.display()))?;
    info!(path = %path.display(), records = ?record_count(&doc), "loaded");
    Ok(doc)
}

/// Replace the file at `path` with `doc` as 4-space indented JSON.
///
/// The old file is deleted first; a failed delete aborts before writing.
pub async fn persist(store: &impl FileStore, path: &Path, doc: &Value) -> Result<()> {
    let text = to_indented_json(doc)?;
    store.remove(path).await?;
    store.write(path, &text).await?;
    info!(path = %path.display(), bytes = text.len(), "persisted");
    Ok(())
}

/// Number of elements in the top-level `records` array, if there is one.
pub fn record_count(doc: &Value) -> Option<usize> {
    doc.get("records").and_then(Value::as_array).map(Vec::len)
}

fn to_indented_json(doc: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    doc.serialize(&mut ser).context("serializing dataset")?;
    Ok(buf)
}
