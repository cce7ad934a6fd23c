//! Policy seam between the rule engine and an external move selector.
//!
//! The engine never chooses moves. A driver feeds the encoded observation
//! and the legal-action mask to something implementing [`Policy`]
//! (typically a neural network on the Python side) and applies whatever
//! index comes back. `RandomPolicy` is the in-crate baseline used by the
//! playout tests and benches.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor, e.g. `[channels, cells]`.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Whether the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Element at `(channel, cell)` for a two-dimensional encoding.
    #[must_use]
    pub fn at(&self, channel: usize, cell: usize) -> f32 {
        debug_assert_eq!(self.shape.len(), 2);
        self.tensor[channel * self.shape[1] + cell]
    }
}

/// An external move selector.
///
/// Given an observation and the 0/1 legal mask over the flat action
/// space, returns the chosen action index. Implementations must only
/// return indexes whose mask entry is set; the engine rejects anything
/// else with `InvalidAction`.
pub trait Policy {
    fn select_action(&mut self, observation: &EncodedState, legal_mask: &[f32]) -> usize;
}

/// Uniform random choice over the legal set (baseline for testing).
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a seeded random policy.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &EncodedState, legal_mask: &[f32]) -> usize {
        let legal: Vec<usize> = legal_mask
            .iter()
            .enumerate()
            .filter(|(_, &v)| v > 0.0)
            .map(|(i, _)| i)
            .collect();
        *self
            .rng
            .choose(&legal)
            .expect("policy queried with an empty legal mask")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_state_new() {
        let state = EncodedState::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        assert_eq!(state.len(), 4);
        assert_eq!(state.shape, vec![2, 2]);
        assert_eq!(state.at(1, 0), 3.0);
    }

    #[test]
    fn test_encoded_state_zeros() {
        let state = EncodedState::zeros(vec![7, 24]);
        assert_eq!(state.len(), 168);
        assert!(state.tensor.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_random_policy_respects_mask() {
        let mut policy = RandomPolicy::new(42);
        let observation = EncodedState::zeros(vec![4]);
        let mut mask = vec![0.0; 10];
        mask[3] = 1.0;
        mask[7] = 1.0;

        for _ in 0..50 {
            let choice = policy.select_action(&observation, &mask);
            assert!(choice == 3 || choice == 7);
        }
    }

    #[test]
    fn test_random_policy_deterministic() {
        let observation = EncodedState::zeros(vec![4]);
        let mask = vec![1.0; 16];

        let mut a = RandomPolicy::new(9);
        let mut b = RandomPolicy::new(9);
        for _ in 0..20 {
            assert_eq!(
                a.select_action(&observation, &mask),
                b.select_action(&observation, &mask)
            );
        }
    }

    #[test]
    fn test_encoded_state_serialization() {
        let state = EncodedState::new(vec![0.5, 1.0], vec![2]);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EncodedState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
