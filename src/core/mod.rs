//! Core engine types: players, actions, the flat action codec, errors, RNG.

pub mod action;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord, ACTION_SPACE, CAPTURE_BASE, SLIDE_BASE};
pub use error::EngineError;
pub use player::{Player, PlayerPair};
pub use rng::GameRng;
