// core/src/gate.rs

//! First-visit loading gate.
//!
//! Decides, once per calendar day, whether the full-screen loading animation
//! plays before the storefront renders. The decision is keyed on a date
//! string in durable storage, so the gate resets at local midnight rather
//! than 24 hours after the last visit.

use std::sync::Arc;
use tracing::debug;

use crate::storage::KeyValueStore;
use crate::time::Clock;

/// Durable-storage key holding the date the animation last played.
pub const LOADING_GATE_KEY: &str = "loading-shown-date";

/// Where the gate is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingGateState {
  /// Not yet evaluated against storage.
  Pending,
  /// Play the animation.
  Show,
  /// Skip straight to the app.
  Hidden,
}

pub struct LoadingGate {
  store: Arc<dyn KeyValueStore>,
  clock: Arc<dyn Clock>,
  state: LoadingGateState,
}

impl LoadingGate {
  /// Starts in [`LoadingGateState::Pending`]; call [`resolve`](Self::resolve)
  /// to evaluate the stored marker.
  pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
    Self {
      store,
      clock,
      state: LoadingGateState::Pending,
    }
  }

  pub fn state(&self) -> LoadingGateState {
    self.state
  }

  /// Reads the per-day marker and resolves the gate: anything other than
  /// today's date string (including no marker at all) means show.
  pub fn resolve(&mut self) -> LoadingGateState {
    let today = self.clock.today().to_string();
    let marker = self.store.get(LOADING_GATE_KEY);
    self.state = if marker.as_deref() == Some(today.as_str()) {
      LoadingGateState::Hidden
    } else {
      LoadingGateState::Show
    };
    debug!(?marker, %today, state = ?self.state, "loading gate resolved");
    self.state
  }

  /// Marks the animation as played for today and hides the gate.
  pub fn complete(&mut self) {
    let today = self.clock.today().to_string();
    self.store.set(LOADING_GATE_KEY, &today);
    self.state = LoadingGateState::Hidden;
    debug!(%today, "loading gate completed");
  }

  /// Forces the animation to play again, ignoring the marker. Debug/demo
  /// override only.
  pub fn replay(&mut self) {
    self.state = LoadingGateState::Show;
  }
}
