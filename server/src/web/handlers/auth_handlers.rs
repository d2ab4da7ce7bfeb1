// server/src/web/handlers/auth_handlers.rs

use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::state::AppState;

// --- Request query ---
#[derive(Debug, Deserialize)]
pub struct AuthCallbackQuery {
  pub next: Option<String>,
}

/// `GET /auth/callback?next=<path>`: the external auth provider lands the
/// browser here after establishing the session; we only redirect it on to
/// `next` (default `/`) within the app origin.
#[instrument(name = "handler::auth_callback", skip(app_state))]
pub async fn auth_callback_handler(
  app_state: web::Data<AppState>,
  query: web::Query<AuthCallbackQuery>,
) -> HttpResponse {
  let next = query.next.as_deref().unwrap_or("/");
  let target = format!("{}{}", app_state.config.app_base_url.trim_end_matches('/'), next);
  info!(%target, "auth callback redirect");
  HttpResponse::SeeOther()
    .insert_header((header::LOCATION, target))
    .finish()
}
