//! Observation encoding: session state to the 7x24 policy input.
//!
//! Pure projection; encoding never mutates the session and may be called
//! repeatedly (inference, logging, analysis).

use crate::board::{CELLS, PIECES_PER_PLAYER};
use crate::core::ACTION_SPACE;
use crate::rules::{Phase, Session};

use super::traits::EncodedState;

/// Observation channels, always from the perspective of the player about
/// to act.
pub const CHANNELS: usize = 7;

/// Encodes sessions into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the session from the current actor's perspective.
    fn encode(&self, session: &Session) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the flat action space (the policy head's output width).
    fn action_space_size(&self) -> usize;
}

/// The standard 7-channel board encoding:
///
/// - channel 0: cells occupied by the player about to act
/// - channel 1: cells occupied by the opponent
/// - channels 2-4: one-hot of the actor's phase (placement/movement/flying),
///   broadcast across all cells
/// - channel 5: actor's in-hand count divided by 9, broadcast
/// - channel 6: empty cells
#[derive(Clone, Copy, Debug, Default)]
pub struct MorrisEncoder;

impl StateEncoder for MorrisEncoder {
    fn encode(&self, session: &Session) -> EncodedState {
        encode(session)
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![CHANNELS, CELLS]
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE
    }
}

/// Encode a session into the 7x24 observation (see [`MorrisEncoder`]).
#[must_use]
pub fn encode(session: &Session) -> EncodedState {
    let actor = session.current_player();
    let board = session.board();
    let mut tensor = vec![0.0f32; CHANNELS * CELLS];

    let phase_channel = match session.phase(actor) {
        Phase::Placement => 2,
        Phase::Movement => 3,
        Phase::Flying => 4,
    };
    let hand_fill = f32::from(session.hand(actor)) / f32::from(PIECES_PER_PLAYER);

    for cell in 0..CELLS {
        match board.get(cell) {
            Some(owner) if owner == actor => tensor[cell] = 1.0,
            Some(_) => tensor[CELLS + cell] = 1.0,
            None => tensor[6 * CELLS + cell] = 1.0,
        }
        tensor[phase_channel * CELLS + cell] = 1.0;
        tensor[5 * CELLS + cell] = hand_fill;
    }

    EncodedState::new(tensor, vec![CHANNELS, CELLS])
}
