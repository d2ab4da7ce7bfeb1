// server/src/blob.rs

//! Blob storage seam for uploaded product images.
//!
//! The endpoint only depends on the trait; deployments can back it with a
//! hosted blob service, while the default (and the tests) write to local
//! disk served as static files.

use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

/// Public, name-addressed blob storage. `put` returns the public URL the
/// stored blob is reachable under. Single attempt; callers do not retry.
#[async_trait]
pub trait BlobStore: Send + Sync {
  async fn put(&self, name: &str, bytes: Vec<u8>, content_type: &str) -> anyhow::Result<String>;
}

/// Disk-backed store: writes under `root`, URLs under `public_base_url`.
pub struct LocalBlobStore {
  root: PathBuf,
  public_base_url: String,
}

impl LocalBlobStore {
  pub fn new(root: PathBuf, public_base_url: String) -> Self {
    Self { root, public_base_url }
  }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
  async fn put(&self, name: &str, bytes: Vec<u8>, _content_type: &str) -> anyhow::Result<String> {
    tokio::fs::create_dir_all(&self.root)
      .await
      .with_context(|| format!("creating upload dir {}", self.root.display()))?;
    let path = self.root.join(name);
    tokio::fs::write(&path, &bytes)
      .await
      .with_context(|| format!("writing blob {}", path.display()))?;
    tracing::info!(blob = name, size = bytes.len(), "stored uploaded image");
    Ok(format!("{}/{}", self.public_base_url.trim_end_matches('/'), name))
  }
}
