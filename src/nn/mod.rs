//! Neural-network integration: observation encoding and the policy seam.
//!
//! The engine exposes observations as flat `f32` tensors plus a legal
//! mask; anything implementing [`Policy`] (a learned model, a baseline)
//! can drive a match. Inference itself lives outside this crate.

pub mod encoder;
pub mod traits;

pub use encoder::{encode, MorrisEncoder, StateEncoder, CHANNELS};
pub use traits::{EncodedState, Policy, RandomPolicy};
