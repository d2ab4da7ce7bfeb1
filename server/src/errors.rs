// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use carniceria_core::UploadError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("{0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storage Error: {0}")]
  Storage(#[source] anyhow::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Upload validation failures surface verbatim as 400s.
impl From<UploadError> for AppError {
  fn from(err: UploadError) -> Self {
    AppError::Validation(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      // Storage details stay in the log; callers get a generic message.
      AppError::Storage(_) => HttpResponse::InternalServerError().json(json!({"error": "Failed to upload image"})),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
