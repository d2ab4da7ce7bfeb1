// core/src/storage.rs

//! Injected key-value storage capability.
//!
//! Stands in for the browser's durable (survives restarts) and session
//! (cleared when the browsing session ends) storage. Components take the
//! scope they need as an `Arc<dyn KeyValueStore>` instead of reaching for
//! ambient globals, so tests can hand them a [`MemoryStore`] and observe
//! every read and write.

use parking_lot::RwLock;
use std::collections::HashMap;

/// String-keyed, string-valued storage. Implementations must be safe to
/// share across threads; all operations are infallible by contract (a full
/// or unavailable store silently drops writes, as browser storage does).
pub trait KeyValueStore: Send + Sync {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&self, key: &str, value: &str);
}

/// In-memory store used by tests and in-process callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of keys currently stored. Handy for asserting a component wrote
  /// exactly what it was supposed to.
  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.read().is_empty()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Option<String> {
    self.entries.read().get(key).cloned()
  }

  fn set(&self, key: &str, value: &str) {
    self.entries.write().insert(key.to_string(), value.to_string());
  }
}
