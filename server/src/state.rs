// server/src/state.rs
use crate::blob::BlobStore;
use crate::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>, // Share loaded config
  pub blob_store: Arc<dyn BlobStore>,
}
