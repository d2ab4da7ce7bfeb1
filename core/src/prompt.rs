// core/src/prompt.rs

//! Registration prompt timer.
//!
//! Offers account registration to anonymous visitors who linger on the
//! landing page. The prompt arms a one-shot 15-second timer; on expiry it
//! becomes visible and writes a session flag so it never re-arms within the
//! same browsing session, even across route changes. Whenever a gating
//! condition turns false before expiry the timer is cancelled outright — a
//! stale prompt must never fire after navigating away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::storage::KeyValueStore;
use crate::time::{Scheduler, TimerId};
use crate::visitor::{AuthState, LANDING_ROUTE};

/// Delay before the prompt appears.
pub const PROMPT_DELAY: Duration = Duration::from_secs(15);

/// Session flag: the prompt has been shown once this session.
pub const PROMPT_SHOWN_KEY: &str = "registration-prompt-shown";

/// Session flag written by [`RegistrationPrompt::dismiss_for_session`].
/// Write-only for now; nothing reads it back.
pub const PROMPT_DISMISSED_KEY: &str = "registration-prompt-dismissed";

pub struct RegistrationPrompt {
  session: Arc<dyn KeyValueStore>,
  scheduler: Arc<dyn Scheduler>,
  visible: Arc<AtomicBool>,
  timer: Option<TimerId>,
}

impl RegistrationPrompt {
  pub fn new(session: Arc<dyn KeyValueStore>, scheduler: Arc<dyn Scheduler>) -> Self {
    Self {
      session,
      scheduler,
      visible: Arc::new(AtomicBool::new(false)),
      timer: None,
    }
  }

  pub fn visible(&self) -> bool {
    self.visible.load(Ordering::SeqCst)
  }

  /// Re-evaluates the gating conditions. Arms the timer when the visitor is
  /// anonymous on the landing route and the prompt has not been shown this
  /// session; cancels any pending timer otherwise.
  pub fn update(&mut self, route: &str, auth: AuthState) {
    let eligible =
      route == LANDING_ROUTE && auth == AuthState::Anonymous && self.session.get(PROMPT_SHOWN_KEY).is_none();

    if !eligible {
      if let Some(id) = self.timer.take() {
        self.scheduler.cancel(id);
        debug!(route, ?auth, "registration prompt disarmed");
      }
      return;
    }

    if self.timer.is_some() || self.visible() {
      return;
    }

    let visible = Arc::clone(&self.visible);
    let session = Arc::clone(&self.session);
    let id = self.scheduler.schedule(
      PROMPT_DELAY,
      Box::new(move || {
        visible.store(true, Ordering::SeqCst);
        session.set(PROMPT_SHOWN_KEY, "true");
        debug!("registration prompt shown");
      }),
    );
    self.timer = Some(id);
    debug!("registration prompt armed");
  }

  /// Hides the prompt without recording anything.
  pub fn close(&mut self) {
    self.visible.store(false, Ordering::SeqCst);
  }

  /// Hides the prompt and records the dismissal for this session.
  pub fn dismiss_for_session(&mut self) {
    self.visible.store(false, Ordering::SeqCst);
    self.session.set(PROMPT_DISMISSED_KEY, "true");
  }
}

impl Drop for RegistrationPrompt {
  fn drop(&mut self) {
    if let Some(id) = self.timer.take() {
      self.scheduler.cancel(id);
    }
  }
}
