// core/src/upload.rs

//! Image upload validation, shared by the client helper and the server
//! endpoint (the server never trusts client-side checks).

use thiserror::Error;
use url::Url;

/// Upload size cap: 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Path extensions accepted by [`is_valid_image_url`].
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Bundled placeholder asset; always accepted regardless of extension.
const PLACEHOLDER_ASSET: &str = "placeholder.svg";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
  #[error("File must be an image")]
  NotAnImage,

  #[error("File size exceeds 5MB")]
  TooLarge,
}

/// Checks the declared media type and size of an upload candidate.
pub fn validate_image_upload(content_type: &str, size: usize) -> Result<(), UploadError> {
  if !content_type.starts_with("image/") {
    return Err(UploadError::NotAnImage);
  }
  if size > MAX_IMAGE_BYTES {
    return Err(UploadError::TooLarge);
  }
  Ok(())
}

/// Builds a collision-resistant blob name: `product-<millis>-<nonce>.<ext>`.
///
/// The extension comes from the original file name (lowercased), falling back
/// to `jpg` when the name carries none. Timestamp and nonce are passed in so
/// the result is deterministic under test.
pub fn image_file_name(original: &str, millis: u64, nonce: &str) -> String {
  let ext = original
    .rsplit_once('.')
    .map(|(_, ext)| ext.to_ascii_lowercase())
    .filter(|ext| !ext.is_empty())
    .unwrap_or_else(|| "jpg".to_string());
  format!("product-{millis}-{nonce}.{ext}")
}

/// Whether a product image URL is usable: parses as a URL and either points
/// at the placeholder asset or carries a known image extension
/// (case-insensitive). Malformed input returns false, never panics.
pub fn is_valid_image_url(raw: &str) -> bool {
  let parsed = match Url::parse(raw) {
    Ok(url) => url,
    Err(_) => return false,
  };
  let path = parsed.path();
  if path.contains(PLACEHOLDER_ASSET) {
    return true;
  }
  match path.rsplit_once('.') {
    Some((_, ext)) => IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
    None => false,
  }
}
