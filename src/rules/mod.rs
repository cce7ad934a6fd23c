//! Session object and the rule engine.
//!
//! [`Session`] owns all per-match state; the free functions in
//! [`engine`] enumerate legal moves and drive the step transition.

pub mod engine;
pub mod session;

pub use engine::{apply, apply_with, legal_action_mask, legal_actions, legal_captures, Rewards, StepResult};
pub use session::{GlobalPhase, Outcome, Phase, Session, SessionBuilder, MOVE_LIMIT};
