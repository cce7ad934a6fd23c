//! # morris-engine
//!
//! A Nine Men's Morris rules engine and legal-move generator, built to
//! drive AI-vs-AI matches: a policy model consumes the encoded board
//! observation plus a legal-action mask and returns a flat action index.
//!
//! ## Design Principles
//!
//! 1. **Explicit sessions**: every engine call takes the [`Session`] it
//!    operates on. No globals, no ambient board.
//!
//! 2. **Fail fast at the boundary**: [`apply`](rules::apply) validates
//!    each action against its own legal enumeration and rejects contract
//!    violations with a typed error instead of corrupting state.
//!
//! 3. **Deterministic core**: the same action sequence always produces the
//!    same states. Randomness only exists in baseline policies, behind a
//!    seeded RNG.
//!
//! ## Modules
//!
//! - `core`: player identity, actions, the 624-slot action codec, errors, RNG
//! - `board`: the 24-cell board, mill table, adjacency graph
//! - `rules`: session state, legal-move enumeration, step transition,
//!   terminal detection
//! - `nn`: observation encoding and the policy seam
//!
//! ## Example
//!
//! ```
//! use morris_engine::nn::{Policy, RandomPolicy};
//! use morris_engine::rules::{self, Session};
//! use morris_engine::core::Action;
//!
//! let mut session = Session::new();
//! let mut policy = RandomPolicy::new(42);
//!
//! while !session.is_over() {
//!     let observation = morris_engine::nn::encode(&session);
//!     let mask = rules::legal_action_mask(&session);
//!     let index = policy.select_action(&observation, &mask);
//!     let action = Action::from_index(index).unwrap();
//!     rules::apply(&mut session, action).unwrap();
//! }
//!
//! assert!(session.outcome().is_some());
//! ```

pub mod board;
pub mod core;
pub mod nn;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Action, ActionRecord, EngineError, GameRng, Player, PlayerPair, ACTION_SPACE};

pub use crate::board::{Board, ADJACENCY, CELLS, MILLS, PIECES_PER_PLAYER};

pub use crate::rules::{
    apply, apply_with, legal_action_mask, legal_actions, legal_captures, GlobalPhase, Outcome,
    Phase, Rewards, Session, SessionBuilder, StepResult, MOVE_LIMIT,
};

pub use crate::nn::{encode, EncodedState, MorrisEncoder, Policy, RandomPolicy, StateEncoder};
