// core/src/visitor.rs

//! Visitor context shared by the route-gated components.

/// The landing route; the registration prompt and navigation timer only run
/// here.
pub const LANDING_ROUTE: &str = "/";

/// Auth state as seen by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
  /// Auth provider still resolving; treat as not-yet-known, not anonymous.
  Loading,
  Anonymous,
  Authenticated,
}
