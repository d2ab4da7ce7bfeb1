// core/src/navigation.rs

//! Landing-route navigation timer.
//!
//! Counts elapsed whole seconds while an anonymous visitor stays on the
//! landing route, via a 1-second tick that re-schedules itself. Leaving the
//! route (or authenticating) cancels the pending tick and resets the count.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::time::{Scheduler, TimerId};
use crate::visitor::{AuthState, LANDING_ROUTE};

const TICK: Duration = Duration::from_secs(1);

struct NavState {
  scheduler: Arc<dyn Scheduler>,
  elapsed: AtomicU64,
  running: AtomicBool,
  timer: Mutex<Option<TimerId>>,
}

fn schedule_tick(state: &Arc<NavState>) {
  let next = Arc::clone(state);
  let id = state.scheduler.schedule(
    TICK,
    Box::new(move || {
      // The running check guards the window between a fire and a cancel
      // of an id that already expired.
      if next.running.load(Ordering::SeqCst) {
        next.elapsed.fetch_add(1, Ordering::SeqCst);
        schedule_tick(&next);
      }
    }),
  );
  *state.timer.lock() = Some(id);
}

pub struct NavigationTimer {
  state: Arc<NavState>,
}

impl NavigationTimer {
  pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
    Self {
      state: Arc::new(NavState {
        scheduler,
        elapsed: AtomicU64::new(0),
        running: AtomicBool::new(false),
        timer: Mutex::new(None),
      }),
    }
  }

  /// Seconds spent on the landing route since the timer last started.
  pub fn elapsed_secs(&self) -> u64 {
    self.state.elapsed.load(Ordering::SeqCst)
  }

  /// Starts or stops the counter based on the current route and auth state.
  pub fn update(&self, route: &str, auth: AuthState) {
    let eligible = route == LANDING_ROUTE && auth == AuthState::Anonymous;
    if eligible {
      if !self.state.running.swap(true, Ordering::SeqCst) {
        debug!("navigation timer started");
        schedule_tick(&self.state);
      }
    } else if self.state.running.swap(false, Ordering::SeqCst) {
      if let Some(id) = self.state.timer.lock().take() {
        self.state.scheduler.cancel(id);
      }
      self.state.elapsed.store(0, Ordering::SeqCst);
      debug!("navigation timer stopped");
    }
  }
}

impl Drop for NavigationTimer {
  fn drop(&mut self) {
    self.state.running.store(false, Ordering::SeqCst);
    if let Some(id) = self.state.timer.lock().take() {
      self.state.scheduler.cancel(id);
    }
  }
}
