// core/src/lib.rs

//! Carniceria core: the storefront's cart model and client-state machines.
//!
//! The only part of the storefront with real invariants is the cart — an
//! ordered set of lines unique under `(product id, vacuum packed)` with a
//! flat per-line packing surcharge — so that model lives here as pure
//! functions. Around it sit the injectable capabilities the UI-facing state
//! machines depend on:
//!  - Key-value storage (durable vs session scope) instead of ambient
//!    browser storage.
//!  - A clock and a one-shot timer scheduler, with virtual-time test
//!    implementations.
//!  - The first-visit loading gate, registration prompt timer, and
//!    navigation timer built on those seams.
//!  - Upload validation shared with the server endpoint.

pub mod cart;
pub mod gate;
pub mod money;
pub mod navigation;
pub mod prompt;
pub mod storage;
pub mod time;
pub mod upload;
pub mod visitor;

// --- Re-exports for the Public API ---

pub use crate::cart::{
  add_to_cart, cart_item_count, cart_total, clear_cart, remove_from_cart, update_cart_item_quantity, CartItem,
  Product, VACUUM_PACKING_FEE,
};
pub use crate::gate::{LoadingGate, LoadingGateState, LOADING_GATE_KEY};
pub use crate::money::format_price;
pub use crate::navigation::NavigationTimer;
pub use crate::prompt::{RegistrationPrompt, PROMPT_DELAY, PROMPT_DISMISSED_KEY, PROMPT_SHOWN_KEY};
pub use crate::storage::{KeyValueStore, MemoryStore};
pub use crate::time::{Clock, FixedClock, ManualScheduler, Scheduler, SystemClock, TimerId};
pub use crate::upload::{
  image_file_name, is_valid_image_url, validate_image_upload, UploadError, MAX_IMAGE_BYTES,
};
pub use crate::visitor::{AuthState, LANDING_ROUTE};
