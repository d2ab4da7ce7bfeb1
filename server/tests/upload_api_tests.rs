// tests/upload_api_tests.rs
mod common; // Reference the common module

use common::*;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use carniceria_server::web::configure_app_routes;
use serde_json::Value;

macro_rules! test_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state))
        .configure(configure_app_routes),
    )
    .await
  };
}

#[actix_web::test]
async fn test_upload_accepts_2mib_jpeg() {
  setup_tracing();
  let (state, upload_dir) = test_state();
  let app = test_app!(state);

  let bytes = vec![0xABu8; 2 * 1024 * 1024];
  let req = test::TestRequest::post()
    .uri("/api/upload-image")
    .insert_header((header::CONTENT_TYPE, multipart_content_type()))
    .set_payload(multipart_file_body("file", "bife.jpg", "image/jpeg", &bytes))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], Value::Bool(true));

  let file_name = body["fileName"].as_str().expect("fileName present");
  assert_blob_name(file_name, "jpg");

  let url = body["url"].as_str().expect("url present");
  assert!(!url.is_empty());
  assert_eq!(url, format!("http://shop.test/uploads/{file_name}"));

  // The blob actually landed on disk with the returned name.
  let stored = std::fs::read(upload_dir.join(file_name)).expect("stored blob readable");
  assert_eq!(stored.len(), bytes.len());
}

#[actix_web::test]
async fn test_upload_rejects_non_image_type() {
  setup_tracing();
  let (state, _dir) = test_state();
  let app = test_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/upload-image")
    .insert_header((header::CONTENT_TYPE, multipart_content_type()))
    .set_payload(multipart_file_body("file", "folleto.pdf", "application/pdf", b"%PDF-1.4"))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "File must be an image");
}

#[actix_web::test]
async fn test_upload_rejects_oversized_image() {
  setup_tracing();
  let (state, _dir) = test_state();
  let app = test_app!(state);

  let bytes = vec![0u8; 6 * 1024 * 1024];
  let req = test::TestRequest::post()
    .uri("/api/upload-image")
    .insert_header((header::CONTENT_TYPE, multipart_content_type()))
    .set_payload(multipart_file_body("file", "grande.png", "image/png", &bytes))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "File size exceeds 5MB");
}

#[actix_web::test]
async fn test_upload_without_file_field_is_400() {
  setup_tracing();
  let (state, _dir) = test_state();
  let app = test_app!(state);

  // A multipart body whose only field is not named "file".
  let req = test::TestRequest::post()
    .uri("/api/upload-image")
    .insert_header((header::CONTENT_TYPE, multipart_content_type()))
    .set_payload(multipart_file_body("document", "bife.jpg", "image/jpeg", b"abc"))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "No file found");
}

#[actix_web::test]
async fn test_storage_failure_is_500_with_generic_body() {
  setup_tracing();
  let app = test_app!(failing_state());

  // A perfectly valid upload; only the blob backend misbehaves. The caller
  // gets the generic message, never the backend detail.
  let req = test::TestRequest::post()
    .uri("/api/upload-image")
    .insert_header((header::CONTENT_TYPE, multipart_content_type()))
    .set_payload(multipart_file_body("file", "bife.jpg", "image/jpeg", &[0xAB; 1024]))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Failed to upload image");
  assert!(body.get("detail").is_none());
}

#[actix_web::test]
async fn test_auth_callback_redirects_to_next() {
  setup_tracing();
  let (state, _dir) = test_state();
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/auth/callback?next=/productos").to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  let location = resp
    .headers()
    .get(header::LOCATION)
    .and_then(|v| v.to_str().ok())
    .expect("Location header");
  assert_eq!(location, "http://shop.test/productos");
}

#[actix_web::test]
async fn test_auth_callback_defaults_to_root() {
  setup_tracing();
  let (state, _dir) = test_state();
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/auth/callback").to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  let location = resp
    .headers()
    .get(header::LOCATION)
    .and_then(|v| v.to_str().ok())
    .expect("Location header");
  assert_eq!(location, "http://shop.test/");
}

#[actix_web::test]
async fn test_health_endpoint() {
  setup_tracing();
  let (state, _dir) = test_state();
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/health").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
}
