// server/src/lib.rs

//! Carniceria server: the storefront's HTTP surface.
//!
//! Two routes of consequence: the image upload endpoint (multipart in, blob
//! store out, public URL back) and the auth callback redirect. Cart state
//! never touches this crate — carts live entirely client-side on the
//! `carniceria-core` model.

pub mod blob;
pub mod client;
pub mod config;
pub mod errors;
pub mod scheduler;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
