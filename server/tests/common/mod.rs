// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use carniceria_server::blob::{BlobStore, LocalBlobStore};
use carniceria_server::config::AppConfig;
use carniceria_server::state::AppState;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tracing::Level;

static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

/// Fresh app state writing blobs into a per-test scratch directory.
pub fn test_state() -> (AppState, PathBuf) {
  let upload_dir = std::env::temp_dir().join(format!(
    "carniceria-test-{}-{}",
    std::process::id(),
    DIR_SEQ.fetch_add(1, Ordering::SeqCst)
  ));
  let config = Arc::new(AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    app_base_url: "http://shop.test".to_string(),
    upload_dir: upload_dir.clone(),
  });
  let blob_store = Arc::new(LocalBlobStore::new(upload_dir.clone(), config.public_upload_base()));
  (
    AppState {
      config,
      blob_store,
    },
    upload_dir,
  )
}

/// Blob store double whose writes always fail, for the storage-error path.
pub struct FailingBlobStore;

#[async_trait]
impl BlobStore for FailingBlobStore {
  async fn put(&self, _name: &str, _bytes: Vec<u8>, _content_type: &str) -> anyhow::Result<String> {
    Err(anyhow::anyhow!("blob backend unavailable"))
  }
}

/// App state wired to the failing store.
pub fn failing_state() -> AppState {
  let (state, _dir) = test_state();
  AppState {
    config: state.config,
    blob_store: Arc::new(FailingBlobStore),
  }
}

pub const BOUNDARY: &str = "test-boundary-7MA4YWxk";

/// Hand-built multipart body with a single file field.
pub fn multipart_file_body(field: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
  let mut body = Vec::with_capacity(bytes.len() + 256);
  body.extend_from_slice(
    format!(
      "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .as_bytes(),
  );
  body.extend_from_slice(bytes);
  body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
  body
}

pub fn multipart_content_type() -> String {
  format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Asserts `product-<digits>-<alphanumeric>.<ext>`.
pub fn assert_blob_name(name: &str, ext: &str) {
  let stem = name
    .strip_suffix(&format!(".{ext}"))
    .unwrap_or_else(|| panic!("blob name {name} should end in .{ext}"));
  let rest = stem
    .strip_prefix("product-")
    .unwrap_or_else(|| panic!("blob name {name} should start with product-"));
  let (millis, nonce) = rest
    .split_once('-')
    .unwrap_or_else(|| panic!("blob name {name} should be product-<millis>-<nonce>"));
  assert!(!millis.is_empty() && millis.bytes().all(|b| b.is_ascii_digit()), "millis part: {millis}");
  assert!(
    !nonce.is_empty() && nonce.bytes().all(|b| b.is_ascii_alphanumeric()),
    "nonce part: {nonce}"
  );
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
