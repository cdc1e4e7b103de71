// src/config.rs

use anyhow::{Context, Result};
use std::path::PathBuf;
use url::Url;

/// ECDC weekly case distribution, served as a single JSON document.
pub const DEFAULT_SOURCE_URL: &str =
    "https://opendata.ecdc.europa.eu/covid19/casedistribution/json/";

/// Records endpoint of the locally running service.
pub const DEFAULT_FORWARD_URL: &str = "http://localhost:8080/api/v1/records";

/// Relative to the working directory at invocation time.
pub const DEFAULT_CACHE_PATH: &str = "./data/records.json";

/// Which of the two sync behaviors to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// ensure-cached → load → forward
    Forward,
    /// ensure-cached → load → normalize → persist → forward
    NormalizeAndPersist,
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub cache_path: PathBuf,
    pub source_url: Url,
    pub forward_url: Url,
    pub variant: Variant,
}

impl SyncConfig {
    /// The fixed endpoints and cache path for `variant`.
    pub fn new(variant: Variant) -> Result<Self> {
        let source_url = Url::parse(DEFAULT_SOURCE_URL)
            .with_context(|| format!("parsing source URL {}", DEFAULT_SOURCE_URL))?;
        let forward_url = Url::parse(DEFAULT_FORWARD_URL)
            .with_context(|| format!("parsing forward URL {}", DEFAULT_FORWARD_URL))?;

        Ok(Self {
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            source_url,
            forward_url,
            variant,
        })
    }

    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    pub fn with_source_url(mut self, url: Url) -> Self {
        self.source_url = url;
        self
    }

    pub fn with_forward_url(mut self, url: Url) -> Self {
        self.forward_url = url;
        self
    }

    pub fn normalizes(&self) -> bool {
        self.variant == Variant::NormalizeAndPersist
    }
}
