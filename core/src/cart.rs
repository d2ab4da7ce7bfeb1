// core/src/cart.rs

//! The cart pricing and mutation model.
//!
//! A cart is an ordered sequence of [`CartItem`] lines, unique under the
//! composite key `(id, vacuum_packed)`: the same product can appear twice,
//! once plain and once vacuum packed, and those are distinct lines. All
//! mutation functions are pure transforms — they take a snapshot slice and
//! return a fresh `Vec`, never touching the input. Callers own state
//! management; applying each transform to the latest snapshot composes
//! correctly without any locking.

use serde::{Deserialize, Serialize};

/// Flat per-line surcharge (in pesos) for vacuum packing.
///
/// Charged once per cart line regardless of quantity.
pub const VACUUM_PACKING_FEE: i64 = 500;

/// Quantity-free product info, as shown in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: u32,
  pub name: String,
  /// Whole pesos. ARS prices carry no decimals.
  pub price: i64,
  pub image_url: Option<String>,
}

/// One line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
  pub id: u32,
  pub name: String,
  pub price: i64,
  /// Always positive; lines with quantity 0 never persist.
  pub quantity: u32,
  pub image_url: Option<String>,
  /// Part of the line identity, not just a display flag.
  #[serde(default)]
  pub vacuum_packed: bool,
}

impl CartItem {
  fn matches(&self, id: u32, vacuum_packed: bool) -> bool {
    self.id == id && self.vacuum_packed == vacuum_packed
  }
}

/// Total price of the cart: `price * quantity` per line, plus the vacuum
/// packing fee once per packed line.
pub fn cart_total(items: &[CartItem]) -> i64 {
  items
    .iter()
    .map(|item| {
      let surcharge = if item.vacuum_packed { VACUUM_PACKING_FEE } else { 0 };
      item.price * i64::from(item.quantity) + surcharge
    })
    .sum()
}

/// Number of units across all lines, for badge counters.
pub fn cart_item_count(items: &[CartItem]) -> u32 {
  items.iter().map(|item| item.quantity).sum()
}

/// Adds `quantity` units of `product` (with the chosen packing option) to the
/// cart.
///
/// If a line with the same `(id, vacuum_packed)` key exists, its quantity is
/// bumped in place; otherwise a new line is appended. `quantity == 0` is a
/// no-op and returns the cart unchanged.
pub fn add_to_cart(items: &[CartItem], product: &Product, vacuum_packed: bool, quantity: u32) -> Vec<CartItem> {
  let mut next = items.to_vec();
  if quantity == 0 {
    return next;
  }

  match next.iter_mut().find(|item| item.matches(product.id, vacuum_packed)) {
    Some(existing) => existing.quantity += quantity,
    None => next.push(CartItem {
      id: product.id,
      name: product.name.clone(),
      price: product.price,
      quantity,
      image_url: product.image_url.clone(),
      vacuum_packed,
    }),
  }
  next
}

/// Removes the line whose key matches `(id, vacuum_packed)` exactly, leaving
/// every other line untouched.
pub fn remove_from_cart(items: &[CartItem], id: u32, vacuum_packed: bool) -> Vec<CartItem> {
  items
    .iter()
    .filter(|item| !item.matches(id, vacuum_packed))
    .cloned()
    .collect()
}

/// Replaces the matching line's quantity with `new_quantity`.
///
/// `new_quantity == 0` behaves exactly as [`remove_from_cart`] — zero-quantity
/// lines never persist.
pub fn update_cart_item_quantity(items: &[CartItem], id: u32, new_quantity: u32, vacuum_packed: bool) -> Vec<CartItem> {
  if new_quantity == 0 {
    return remove_from_cart(items, id, vacuum_packed);
  }
  items
    .iter()
    .map(|item| {
      if item.matches(id, vacuum_packed) {
        let mut updated = item.clone();
        updated.quantity = new_quantity;
        updated
      } else {
        item.clone()
      }
    })
    .collect()
}

/// Empties the cart, unconditionally.
pub fn clear_cart() -> Vec<CartItem> {
  Vec::new()
}
