// server/src/web/handlers/upload_handlers.rs

use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{web, HttpResponse};
use rand::Rng;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use carniceria_core::{image_file_name, validate_image_upload};

// --- Request form ---
#[derive(Debug, MultipartForm)]
pub struct UploadImageForm {
  // Limit well above the 5 MiB cap so oversized files reach our own
  // validation and get the structured 400, not a transport-level abort.
  #[multipart(rename = "file", limit = "20MiB")]
  pub file: Option<TempFile>,
}

// Counterpart of Math.random().toString(36): lowercase base36, 11 chars.
fn base36_nonce() -> String {
  const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
  let mut rng = rand::thread_rng();
  (0..11).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char).collect()
}

// --- Handler Implementation ---

/// `POST /api/upload-image`: validates the multipart `file` field server-side
/// (declared media type must be `image/*`, size capped at 5 MiB — client
/// checks are never trusted), stores it under a collision-resistant name and
/// returns the public URL.
#[instrument(name = "handler::upload_image", skip(app_state, form))]
pub async fn upload_image_handler(
  app_state: web::Data<AppState>,
  MultipartForm(form): MultipartForm<UploadImageForm>,
) -> Result<HttpResponse, AppError> {
  let file = form
    .file
    .ok_or_else(|| AppError::Validation("No file found".to_string()))?;

  let content_type = file
    .content_type
    .as_ref()
    .map(|mime| mime.essence_str().to_string())
    .unwrap_or_default();
  validate_image_upload(&content_type, file.size)?;

  let original_name = file.file_name.clone().unwrap_or_default();
  let millis = chrono::Utc::now().timestamp_millis() as u64;
  let blob_name = image_file_name(&original_name, millis, &base36_nonce());

  let bytes = tokio::fs::read(file.file.path())
    .await
    .map_err(|e| AppError::Storage(e.into()))?;
  let url = app_state
    .blob_store
    .put(&blob_name, bytes, &content_type)
    .await
    .map_err(AppError::Storage)?;

  info!(%blob_name, %url, size = file.size, "image uploaded");

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "url": url,
      "fileName": blob_name
  })))
}
