// core/src/time.rs

//! Clock and timer capabilities.
//!
//! Both are injected traits so the state machines built on top of them
//! ([`crate::gate`], [`crate::prompt`], [`crate::navigation`]) can be driven
//! by virtual time in tests instead of the wall clock.

use chrono::NaiveDate;
use parking_lot::{Mutex, RwLock};
use std::time::Duration;

/// Source of "today" for calendar-date comparisons.
///
/// The loading gate compares date *strings*, not elapsed durations, so the
/// clock only needs day resolution.
pub trait Clock: Send + Sync {
  fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation, local timezone.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate {
    chrono::Local::now().date_naive()
  }
}

/// Settable clock for tests.
#[derive(Debug)]
pub struct FixedClock {
  today: RwLock<NaiveDate>,
}

impl FixedClock {
  pub fn new(today: NaiveDate) -> Self {
    Self {
      today: RwLock::new(today),
    }
  }

  pub fn set_today(&self, today: NaiveDate) {
    *self.today.write() = today;
  }
}

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate {
    *self.today.read()
  }
}

/// Identifies a scheduled timer so it can be cancelled.
pub type TimerId = u64;

/// One-shot timer capability.
///
/// Cancelling an id that already fired (or never existed) is a no-op; owners
/// may hold on to a stale id after expiry without harm.
pub trait Scheduler: Send + Sync {
  /// Schedules `callback` to run once, `after` from now.
  fn schedule(&self, after: Duration, callback: Box<dyn FnOnce() + Send>) -> TimerId;

  /// Cancels a pending timer. The callback will not run afterwards.
  fn cancel(&self, id: TimerId);
}

struct ManualTimer {
  id: TimerId,
  deadline: Duration,
  callback: Box<dyn FnOnce() + Send>,
}

#[derive(Default)]
struct ManualState {
  now: Duration,
  next_id: TimerId,
  timers: Vec<ManualTimer>,
}

/// Virtual-time scheduler for deterministic tests.
///
/// Timers fire from [`ManualScheduler::advance`], in deadline order.
/// Callbacks run with the internal lock released, so a firing callback may
/// schedule or cancel timers itself (the navigation tick re-schedules
/// every second this way).
#[derive(Default)]
pub struct ManualScheduler {
  state: Mutex<ManualState>,
}

impl ManualScheduler {
  pub fn new() -> Self {
    Self::default()
  }

  /// Moves virtual time forward by `by`, firing every timer whose deadline
  /// falls within the window.
  pub fn advance(&self, by: Duration) {
    let target = {
      let state = self.state.lock();
      state.now + by
    };

    loop {
      let due = {
        let mut state = self.state.lock();
        let next = state
          .timers
          .iter()
          .enumerate()
          .filter(|(_, t)| t.deadline <= target)
          .min_by_key(|(_, t)| (t.deadline, t.id))
          .map(|(idx, _)| idx);
        match next {
          Some(idx) => {
            let timer = state.timers.swap_remove(idx);
            state.now = state.now.max(timer.deadline);
            Some(timer)
          }
          None => {
            state.now = target;
            None
          }
        }
      };

      match due {
        Some(timer) => (timer.callback)(),
        None => break,
      }
    }
  }

  /// Number of timers still pending.
  pub fn pending(&self) -> usize {
    self.state.lock().timers.len()
  }
}

impl Scheduler for ManualScheduler {
  fn schedule(&self, after: Duration, callback: Box<dyn FnOnce() + Send>) -> TimerId {
    let mut state = self.state.lock();
    let id = state.next_id;
    state.next_id += 1;
    let deadline = state.now + after;
    state.timers.push(ManualTimer { id, deadline, callback });
    id
  }

  fn cancel(&self, id: TimerId) {
    let mut state = self.state.lock();
    state.timers.retain(|t| t.id != id);
  }
}
