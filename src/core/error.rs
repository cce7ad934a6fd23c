//! Error taxonomy for caller contract violations.
//!
//! All three variants mean the caller broke the engine's contract, not
//! that the game reached some recoverable condition. The engine checks
//! them up front in [`apply`](crate::rules::apply) and fails before
//! touching the session, so a rejected call never leaves corrupt state
//! behind.

use thiserror::Error;

use super::action::Action;

/// A caller contract violation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The submitted action is not in the legal set for the current state.
    #[error("action {0:?} is not legal in the current state")]
    InvalidAction(Action),

    /// An action index is outside `[0, 624)` or decodes to a structurally
    /// malformed action (a slide from a cell onto itself).
    #[error("index {0} does not decode to a well-formed action")]
    InvalidIndex(usize),

    /// `apply` was called after the session already reached a terminal state.
    #[error("session is terminated; no further actions are accepted")]
    SessionTerminated,
}
