// server/src/web/routes.rs

use actix_web::web;

// Liveness only; there is no database or downstream service to probe.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` (and the test harness) to configure
// services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .service(
      web::scope("/api")
        // Health Check Route
        .route("/health", web::get().to(health_check_handler))
        // Product image upload
        .route(
          "/upload-image",
          web::post().to(crate::web::handlers::upload_handlers::upload_image_handler),
        ),
    )
    // Auth provider redirects back here after establishing the session.
    .service(web::scope("/auth").route(
      "/callback",
      web::get().to(crate::web::handlers::auth_handlers::auth_callback_handler),
    ));
}
