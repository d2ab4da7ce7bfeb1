// server/src/client.rs

//! Upload client helper.
//!
//! Mirrors the storefront's client-side upload flow: validate locally first
//! (a rejected file never produces a network call), then POST the file as
//! multipart form data and surface the outcome as a discriminated result —
//! failures are values to display verbatim, never errors thrown across this
//! boundary.

use carniceria_core::validate_image_upload;
use reqwest::multipart::{Form, Part};
use tracing::{instrument, warn};

const GENERIC_FAILURE: &str = "Failed to upload image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
  Success { url: String, file_name: String },
  Failure { reason: String },
}

impl UploadOutcome {
  fn failure(reason: impl Into<String>) -> Self {
    UploadOutcome::Failure { reason: reason.into() }
  }
}

pub struct UploadClient {
  http: reqwest::Client,
  endpoint: String,
}

impl UploadClient {
  /// `endpoint` is the full URL of the upload route, e.g.
  /// `https://shop.example/api/upload-image`.
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      endpoint: endpoint.into(),
    }
  }

  /// Uploads one image. Single attempt, no retry.
  #[instrument(name = "client::upload_image", skip(self, bytes), fields(size = bytes.len()))]
  pub async fn upload_image(&self, file_name: &str, content_type: &str, bytes: Vec<u8>) -> UploadOutcome {
    // Local validation happens before any network traffic.
    if let Err(e) = validate_image_upload(content_type, bytes.len()) {
      return UploadOutcome::failure(e.to_string());
    }

    let part = match Part::bytes(bytes).file_name(file_name.to_string()).mime_str(content_type) {
      Ok(part) => part,
      Err(e) => {
        warn!(error = %e, "unparseable content type");
        return UploadOutcome::failure(GENERIC_FAILURE);
      }
    };
    let form = Form::new().part("file", part);

    let response = match self.http.post(&self.endpoint).multipart(form).send().await {
      Ok(response) => response,
      Err(e) => {
        warn!(error = %e, "upload transport failure");
        return UploadOutcome::failure(GENERIC_FAILURE);
      }
    };

    if !response.status().is_success() {
      // Surface the server's structured message when there is one.
      let reason = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());
      return UploadOutcome::failure(reason);
    }

    match response.json::<serde_json::Value>().await {
      Ok(body) => {
        let url = body.get("url").and_then(|u| u.as_str());
        let file_name = body.get("fileName").and_then(|f| f.as_str()).unwrap_or_default();
        match url {
          Some(url) => UploadOutcome::Success {
            url: url.to_string(),
            file_name: file_name.to_string(),
          },
          None => UploadOutcome::failure(GENERIC_FAILURE),
        }
      }
      Err(e) => {
        warn!(error = %e, "malformed upload response");
        UploadOutcome::failure(GENERIC_FAILURE)
      }
    }
  }
}
