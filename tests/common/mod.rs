#![allow(dead_code)]

use anyhow::{anyhow, Result};
use ecdc_sync::{FileStore, HttpClient};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex,
};
use url::Url;

/// In-memory `FileStore`.
#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStore {
    pub fn with_file(path: impl Into<PathBuf>, bytes: &[u8]) -> Self {
        let store = Self::default();
        store.files.lock().unwrap().insert(path.into(), bytes.to_vec());
        store
    }

    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl FileStore for MemoryStore {
    async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(self.files.lock().unwrap().contains_key(path))
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.contents(path)
            .ok_or_else(|| anyhow!("no such file: {}", path.display()))
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    async fn remove(&self, path: &Path) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| anyhow!("no such file: {}", path.display()))
    }
}

/// `HttpClient` that serves one canned GET body and records every call.
pub struct FakeHttp {
    body: Vec<u8>,
    status: u16,
    pub gets: Mutex<Vec<Url>>,
    pub posts: Mutex<Vec<(Url, String)>>,
}

impl FakeHttp {
    pub fn serving(body: &[u8]) -> Self {
        Self {
            body: body.to_vec(),
            status: 201,
            gets: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn get_count(&self) -> usize {
        self.gets.lock().unwrap().len()
    }

    pub fn posted(&self) -> Vec<(Url, String)> {
        self.posts.lock().unwrap().clone()
    }
}

impl HttpClient for FakeHttp {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        self.gets.lock().unwrap().push(url.clone());
        Ok(self.body.clone())
    }

    async fn post_text(&self, url: &Url, body: String) -> Result<u16> {
        self.posts.lock().unwrap().push((url.clone(), body));
        Ok(self.status)
    }
}

/// `HttpClient` whose every request fails at the transport level.
pub struct DownHttp;

impl HttpClient for DownHttp {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        Err(anyhow!("connection refused: GET {}", url))
    }

    async fn post_text(&self, url: &Url, _body: String) -> Result<u16> {
        Err(anyhow!("connection refused: POST {}", url))
    }
}
