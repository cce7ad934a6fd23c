//! Game session: owned state for one match.
//!
//! A `Session` bundles everything one match mutates: board, per-player
//! bookkeeping, the two phase machines, the turn pointer, and the action
//! history. There is no ambient shared state; every engine call takes the
//! session explicitly, and mutation only happens through
//! [`apply`](crate::rules::apply).
//!
//! ## Phase machines
//!
//! The global phase and the per-player phases are deliberately separate
//! machines. The global phase flips from placement to movement exactly
//! once, when both hands empty. A player's own phase then advances to
//! flying, irreversibly, once their on-board count drops to three or
//! fewer. The two can diverge: one player flying while the other still
//! slides. Do not collapse them into one enum.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, PIECES_PER_PLAYER};
use crate::core::{ActionRecord, Player, PlayerPair};

/// Completed-action ceiling: one move past this ends the game in a draw.
pub const MOVE_LIMIT: u32 = 200;

/// A single player's phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Still holding pieces to place.
    Placement,
    /// Sliding pieces to adjacent empty cells.
    Movement,
    /// Three or fewer pieces left: may move to any empty cell.
    Flying,
}

/// The match-wide phase. Transitions to `Movement` exactly once, when both
/// players have empty hands, and never reverts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlobalPhase {
    Placement,
    Movement,
}

/// Final result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// All mutable state for one match.
///
/// Cloning is cheap (fixed-size fields plus a persistent history vector),
/// so search drivers can fork sessions freely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) global_phase: GlobalPhase,
    pub(crate) phases: PlayerPair<Phase>,
    pub(crate) hands: PlayerPair<u8>,
    pub(crate) on_board: PlayerPair<u8>,
    pub(crate) current_player: Player,
    pub(crate) move_count: u32,
    pub(crate) capture_owed: bool,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) history: Vector<ActionRecord>,
}

impl Session {
    /// A fresh match: empty board, both players in placement with full hands,
    /// White to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            global_phase: GlobalPhase::Placement,
            phases: PlayerPair::with_value(Phase::Placement),
            hands: PlayerPair::with_value(PIECES_PER_PLAYER),
            on_board: PlayerPair::with_value(0),
            current_player: Player::White,
            move_count: 0,
            capture_owed: false,
            outcome: None,
            history: Vector::new(),
        }
    }

    // === Read-only surface ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The match-wide phase.
    #[must_use]
    pub fn global_phase(&self) -> GlobalPhase {
        self.global_phase
    }

    /// A player's own phase.
    #[must_use]
    pub fn phase(&self, player: Player) -> Phase {
        self.phases[player]
    }

    /// Pieces a player still holds off-board.
    #[must_use]
    pub fn hand(&self, player: Player) -> u8 {
        self.hands[player]
    }

    /// Pieces a player currently has on the board.
    #[must_use]
    pub fn on_board(&self, player: Player) -> u8 {
        self.on_board[player]
    }

    /// Pieces of `player` the opponent has captured so far.
    ///
    /// `hand + on_board + captured == 9` holds at all times.
    #[must_use]
    pub fn captured_from(&self, player: Player) -> u8 {
        PIECES_PER_PLAYER - self.hands[player] - self.on_board[player]
    }

    /// The player about to act (or owing a capture).
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Completed actions so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Whether the current player formed a mill and still owes a capture
    /// before the turn passes.
    #[must_use]
    pub fn capture_owed(&self) -> bool {
        self.capture_owed
    }

    /// Final outcome, once the match has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Every action applied so far, in order (for persistence/replay).
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The most recent action (for rendering last-move markers).
    #[must_use]
    pub fn last_action(&self) -> Option<ActionRecord> {
        self.history.last().copied()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for custom starting positions (analysis, tests, puzzles).
///
/// Phases are derived, not set: the global phase is movement iff both
/// hands are empty, and a player flies once their on-board count is three
/// or fewer outside global placement.
///
/// ## Example
///
/// ```
/// use morris_engine::core::Player;
/// use morris_engine::rules::{Phase, SessionBuilder};
///
/// let session = SessionBuilder::new()
///     .pieces(Player::White, &[0, 1, 14])
///     .pieces(Player::Black, &[5, 13, 23, 18])
///     .to_move(Player::White)
///     .build();
///
/// assert_eq!(session.phase(Player::White), Phase::Flying);
/// assert_eq!(session.phase(Player::Black), Phase::Movement);
/// ```
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    white: Vec<usize>,
    black: Vec<usize>,
    hands: PlayerPair<u8>,
    to_move: Player,
    move_count: u32,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            white: Vec::new(),
            black: Vec::new(),
            hands: PlayerPair::with_value(0),
            to_move: Player::White,
            move_count: 0,
        }
    }
}

impl SessionBuilder {
    /// Empty board, empty hands, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a player's pieces on the given cells.
    #[must_use]
    pub fn pieces(mut self, player: Player, cells: &[usize]) -> Self {
        match player {
            Player::White => self.white = cells.to_vec(),
            Player::Black => self.black = cells.to_vec(),
        }
        self
    }

    /// Set a player's in-hand count.
    #[must_use]
    pub fn hand(mut self, player: Player, count: u8) -> Self {
        self.hands[player] = count;
        self
    }

    /// Set whose turn it is.
    #[must_use]
    pub fn to_move(mut self, player: Player) -> Self {
        self.to_move = player;
        self
    }

    /// Set the completed-action counter.
    #[must_use]
    pub fn move_count(mut self, count: u32) -> Self {
        self.move_count = count;
        self
    }

    /// Build the session, deriving counts and phases from the position.
    ///
    /// # Panics
    ///
    /// Panics if a cell is assigned twice or a player's hand plus board
    /// pieces exceed nine.
    #[must_use]
    pub fn build(self) -> Session {
        let mut board = Board::new();
        let mut on_board: PlayerPair<u8> = PlayerPair::with_value(0);

        for (&cell, player) in self
            .white
            .iter()
            .zip(std::iter::repeat(Player::White))
            .chain(self.black.iter().zip(std::iter::repeat(Player::Black)))
        {
            assert!(board.is_empty(cell), "cell {cell} assigned twice");
            board.occupy(cell, player);
            on_board[player] += 1;
        }

        for player in Player::both() {
            assert!(
                self.hands[player] + on_board[player] <= PIECES_PER_PLAYER,
                "{player} has more than {PIECES_PER_PLAYER} pieces"
            );
        }

        let global_phase = if Player::both().all(|p| self.hands[p] == 0) {
            GlobalPhase::Movement
        } else {
            GlobalPhase::Placement
        };
        let phases = PlayerPair::new(|p| match global_phase {
            GlobalPhase::Placement => Phase::Placement,
            GlobalPhase::Movement if on_board[p] <= 3 => Phase::Flying,
            GlobalPhase::Movement => Phase::Movement,
        });

        Session {
            board,
            global_phase,
            phases,
            hands: self.hands,
            on_board,
            current_player: self.to_move,
            move_count: self.move_count,
            capture_owed: false,
            outcome: None,
            history: Vector::new(),
        }
    }
}
