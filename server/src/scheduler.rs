// server/src/scheduler.rs

//! Tokio-backed implementation of the core [`Scheduler`] capability.
//!
//! The core state machines (registration prompt, navigation timer) only see
//! the trait; under a runtime this implementation drives them with real
//! timers, while core tests use `ManualScheduler` and virtual time.

use carniceria_core::{Scheduler, TimerId};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Default)]
pub struct TokioScheduler {
  next_id: AtomicU64,
  tasks: Mutex<HashMap<TimerId, JoinHandle<()>>>,
}

impl TokioScheduler {
  /// Must be created and used within a Tokio runtime.
  pub fn new() -> Self {
    Self::default()
  }
}

impl Scheduler for TokioScheduler {
  fn schedule(&self, after: Duration, callback: Box<dyn FnOnce() + Send>) -> TimerId {
    let id = self.next_id.fetch_add(1, Ordering::SeqCst);
    let handle = tokio::spawn(async move {
      tokio::time::sleep(after).await;
      callback();
    });
    let mut tasks = self.tasks.lock();
    tasks.retain(|_, h| !h.is_finished());
    tasks.insert(id, handle);
    id
  }

  fn cancel(&self, id: TimerId) {
    if let Some(handle) = self.tasks.lock().remove(&id) {
      handle.abort();
    }
  }
}
