//! Action representation and the flat action-space codec.
//!
//! The policy model works over a fixed 624-slot index space, laid out as
//! three disjoint ranges:
//!
//! - `[0, 24)` — place a piece at cell `i`
//! - `[24, 600)` — slide a piece, encoded `24 + from * 24 + to` (dense
//!   24x24 table; self-slides and non-adjacent pairs simply never appear
//!   in the legal set)
//! - `[600, 624)` — capture the opponent piece at cell `i`
//!
//! `to_index` and `from_index` are exact inverses over the legal domain.
//! `from_index` additionally rejects indexes that are out of range or
//! decode to a slide self-loop, since those are unreachable from any
//! legal enumeration.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::player::Player;
use crate::board::CELLS;

/// First slide index.
pub const SLIDE_BASE: usize = CELLS;
/// First capture index.
pub const CAPTURE_BASE: usize = SLIDE_BASE + CELLS * CELLS;
/// Total size of the flat action space (624).
pub const ACTION_SPACE: usize = CAPTURE_BASE + CELLS;

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a piece from hand onto an empty cell (placement phase).
    Place { at: usize },
    /// Slide a piece from one cell to another (movement/flying phase).
    Slide { from: usize, to: usize },
    /// Remove an opponent piece after forming a mill.
    Capture { at: usize },
}

impl Action {
    /// Encode this action into the flat action space.
    #[must_use]
    pub fn to_index(self) -> usize {
        match self {
            Action::Place { at } => at,
            Action::Slide { from, to } => SLIDE_BASE + from * CELLS + to,
            Action::Capture { at } => CAPTURE_BASE + at,
        }
    }

    /// Decode a flat index back into an action.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if the index is outside
    /// `[0, 624)` or decodes to a slide self-loop.
    pub fn from_index(index: usize) -> Result<Self, EngineError> {
        if index < SLIDE_BASE {
            Ok(Action::Place { at: index })
        } else if index < CAPTURE_BASE {
            let offset = index - SLIDE_BASE;
            let from = offset / CELLS;
            let to = offset % CELLS;
            if from == to {
                return Err(EngineError::InvalidIndex(index));
            }
            Ok(Action::Slide { from, to })
        } else if index < ACTION_SPACE {
            Ok(Action::Capture {
                at: index - CAPTURE_BASE,
            })
        } else {
            Err(EngineError::InvalidIndex(index))
        }
    }

    /// The cell this action ends on (destination for slides).
    #[must_use]
    pub fn target(self) -> usize {
        match self {
            Action::Place { at } | Action::Capture { at } => at,
            Action::Slide { to, .. } => to,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { at } => write!(f, "place {at}"),
            Action::Slide { from, to } => write!(f, "slide {from}->{to}"),
            Action::Capture { at } => write!(f, "capture {at}"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay, persistence, and rendering collaborators that want
/// last-move metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Move counter value after the action was applied (starts at 1).
    pub move_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(SLIDE_BASE, 24);
        assert_eq!(CAPTURE_BASE, 600);
        assert_eq!(ACTION_SPACE, 624);
    }

    #[test]
    fn test_place_round_trip() {
        for at in 0..CELLS {
            let action = Action::Place { at };
            assert_eq!(Action::from_index(action.to_index()).unwrap(), action);
        }
        assert_eq!(Action::Place { at: 0 }.to_index(), 0);
        assert_eq!(Action::Place { at: 23 }.to_index(), 23);
    }

    #[test]
    fn test_slide_round_trip() {
        for from in 0..CELLS {
            for to in 0..CELLS {
                if from == to {
                    continue;
                }
                let action = Action::Slide { from, to };
                assert_eq!(Action::from_index(action.to_index()).unwrap(), action);
            }
        }
        assert_eq!(Action::Slide { from: 0, to: 1 }.to_index(), 25);
        assert_eq!(Action::Slide { from: 23, to: 22 }.to_index(), 598);
    }

    #[test]
    fn test_capture_round_trip() {
        for at in 0..CELLS {
            let action = Action::Capture { at };
            assert_eq!(Action::from_index(action.to_index()).unwrap(), action);
        }
        assert_eq!(Action::Capture { at: 0 }.to_index(), 600);
        assert_eq!(Action::Capture { at: 23 }.to_index(), 623);
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(
            Action::from_index(624),
            Err(EngineError::InvalidIndex(624))
        );
        assert_eq!(
            Action::from_index(usize::MAX),
            Err(EngineError::InvalidIndex(usize::MAX))
        );
    }

    #[test]
    fn test_slide_self_loop_rejected() {
        for from in 0..CELLS {
            let index = SLIDE_BASE + from * CELLS + from;
            assert_eq!(
                Action::from_index(index),
                Err(EngineError::InvalidIndex(index))
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Action::Place { at: 4 }), "place 4");
        assert_eq!(format!("{}", Action::Slide { from: 0, to: 1 }), "slide 0->1");
        assert_eq!(format!("{}", Action::Capture { at: 9 }), "capture 9");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Slide { from: 3, to: 10 };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord {
            player: Player::Black,
            action: Action::Capture { at: 7 },
            move_number: 12,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
