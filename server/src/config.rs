// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Public origin of the deployment; redirect targets and blob URLs are
  /// built against it.
  pub app_base_url: String,
  /// Directory the local blob store writes uploaded images into.
  pub upload_dir: PathBuf,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let app_base_url = get_env("APP_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));
    let upload_dir = get_env("UPLOAD_DIR")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from("uploads"));

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      app_base_url,
      upload_dir,
    })
  }

  /// Base URL uploaded blobs are served under.
  pub fn public_upload_base(&self) -> String {
    format!("{}/uploads", self.app_base_url.trim_end_matches('/'))
  }
}
