// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use carniceria_core::{CartItem, Product};
use tracing::Level;

// --- Common fixtures ---

pub fn product(id: u32, name: &str, price: i64) -> Product {
  Product {
    id,
    name: name.to_string(),
    price,
    image_url: None,
  }
}

pub fn line(id: u32, name: &str, price: i64, quantity: u32, vacuum_packed: bool) -> CartItem {
  CartItem {
    id,
    name: name.to_string(),
    price,
    quantity,
    image_url: None,
    vacuum_packed,
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
