//! The rule engine: legal-move enumeration, step transition, terminal
//! detection, and the reward signal.
//!
//! The engine validates every submitted action against its own enumeration
//! before mutating anything, so an out-of-contract caller gets an
//! [`EngineError`] back instead of a silently corrupted session.
//!
//! ## Turn shape
//!
//! A turn is one place or slide action. If that action completes a mill
//! and at least one capture target exists, the turn does not pass: the
//! result reports `capture_owed` and the same player must submit exactly
//! one capture next. A capture always ends the turn; mills never chain
//! into multiple captures.

use serde::{Deserialize, Serialize};

use crate::board::ADJACENCY;
use crate::core::{Action, ActionRecord, EngineError, Player, ACTION_SPACE};
use crate::nn::{encode, EncodedState};

use super::session::{GlobalPhase, Outcome, Phase, Session, MOVE_LIMIT};

/// Pieces a player must drop below, outside placement, to lose.
const ELIMINATION_THRESHOLD: u8 = 3;

/// On-board count at which a player's phase advances to flying.
const FLYING_THRESHOLD: u8 = 3;

/// Scoring constants emitted by [`apply`].
///
/// These mirror the signal the policy was trained against; treat them as
/// a pluggable scoring policy, not game rules. The terminal bonuses
/// *replace* the per-step reward on the final action rather than adding
/// to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rewards {
    /// Constant penalty on every action, discouraging stalling.
    pub step_penalty: f32,
    /// Bonus for completing a mill.
    pub mill_bonus: f32,
    /// Bonus for executing a capture.
    pub capture_bonus: f32,
    /// Terminal reward for the winning action.
    pub win: f32,
    /// Terminal reward when the move ceiling forces a draw.
    pub draw: f32,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            step_penalty: -0.0035,
            mill_bonus: 0.1,
            capture_bonus: 0.05,
            win: 1.5,
            draw: 0.0,
        }
    }
}

impl Rewards {
    /// Override the terminal win reward.
    #[must_use]
    pub fn with_win(mut self, win: f32) -> Self {
        self.win = win;
        self
    }

    /// Override the per-step penalty.
    #[must_use]
    pub fn with_step_penalty(mut self, penalty: f32) -> Self {
        self.step_penalty = penalty;
        self
    }
}

/// Result of one applied action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Observation after the action, from the next actor's perspective.
    pub observation: EncodedState,
    /// Reward signal for the acting player.
    pub reward: f32,
    /// Whether the match ended on this action.
    pub done: bool,
    /// Whether this action completed a mill.
    pub mill_formed: bool,
    /// Whether the acting player still owes a capture before the turn passes.
    pub capture_owed: bool,
    /// Whether this action was a capture.
    pub captured: bool,
}

/// Enumerate the current player's phase actions.
///
/// Placement with pieces in hand yields one `Place` per empty cell;
/// movement yields `Slide`s to adjacent empty cells; flying yields
/// `Slide`s to every empty cell. When a capture is owed the turn action
/// is drawn from [`legal_captures`] instead, and after the match ends the
/// legal set is empty.
#[must_use]
pub fn legal_actions(session: &Session) -> Vec<Action> {
    if session.is_over() {
        return Vec::new();
    }

    let player = session.current_player();
    let board = session.board();
    let mut actions = Vec::new();

    match session.phase(player) {
        Phase::Placement => {
            if session.hand(player) > 0 {
                actions.extend(board.empty_cells().map(|at| Action::Place { at }));
            }
        }
        Phase::Movement => {
            for from in board.cells_of(player) {
                for &to in ADJACENCY[from] {
                    if board.is_empty(to) {
                        actions.push(Action::Slide { from, to });
                    }
                }
            }
        }
        Phase::Flying => {
            for from in board.cells_of(player) {
                for to in board.empty_cells() {
                    actions.push(Action::Slide { from, to });
                }
            }
        }
    }

    actions
}

/// Enumerate capture targets for the current player.
///
/// Every opponent cell is a candidate; a cell inside a complete opponent
/// mill is protected unless *all* opponent pieces sit in mills, in which
/// case protection is waived entirely. Only meaningful while
/// [`Session::capture_owed`] is set.
#[must_use]
pub fn legal_captures(session: &Session) -> Vec<Action> {
    if session.is_over() {
        return Vec::new();
    }

    let opponent = session.current_player().opponent();
    let board = session.board();
    let waive_protection = board.all_in_mills(opponent);

    board
        .cells_of(opponent)
        .filter(|&at| waive_protection || !board.is_in_mill(at, opponent))
        .map(|at| Action::Capture { at })
        .collect()
}

/// A 624-slot 0/1 mask over the flat action space.
///
/// Reflects the action actually required next: the capture set while a
/// capture is owed, the phase actions otherwise.
#[must_use]
pub fn legal_action_mask(session: &Session) -> Vec<f32> {
    let mut mask = vec![0.0; ACTION_SPACE];
    let actions = if session.capture_owed() {
        legal_captures(session)
    } else {
        legal_actions(session)
    };
    for action in actions {
        mask[action.to_index()] = 1.0;
    }
    mask
}

/// Apply one action with the default reward constants.
///
/// # Errors
///
/// [`EngineError::SessionTerminated`] after the match has ended, and
/// [`EngineError::InvalidAction`] for any action outside the enumerated
/// legal set; the session is untouched in both cases.
pub fn apply(session: &mut Session, action: Action) -> Result<StepResult, EngineError> {
    apply_with(session, action, &Rewards::default())
}

/// Apply one action with explicit reward constants.
pub fn apply_with(
    session: &mut Session,
    action: Action,
    rewards: &Rewards,
) -> Result<StepResult, EngineError> {
    if session.is_over() {
        return Err(EngineError::SessionTerminated);
    }

    let required = if session.capture_owed() {
        legal_captures(session)
    } else {
        legal_actions(session)
    };
    if !required.contains(&action) {
        return Err(EngineError::InvalidAction(action));
    }

    let acting = session.current_player();
    let mut reward = rewards.step_penalty;
    let mut mill_formed = false;
    let mut captured = false;

    match action {
        Action::Place { at } => {
            session.board.occupy(at, acting);
            session.hands[acting] -= 1;
            session.on_board[acting] += 1;
        }
        Action::Slide { from, to } => {
            session.board.vacate(from);
            session.board.occupy(to, acting);
        }
        Action::Capture { at } => {
            session.board.vacate(at);
            session.on_board[acting.opponent()] -= 1;
            session.capture_owed = false;
            captured = true;
            reward += rewards.capture_bonus;
        }
    }

    session.move_count += 1;
    session.history.push_back(ActionRecord {
        player: acting,
        action,
        move_number: session.move_count,
    });

    // A mill formed by a place/slide holds the turn open for one capture,
    // provided any capture target exists at all.
    if !captured && session.board.is_in_mill(action.target(), acting) {
        mill_formed = true;
        reward += rewards.mill_bonus;
        if !legal_captures(session).is_empty() {
            session.capture_owed = true;
            return Ok(StepResult {
                observation: encode(session),
                reward,
                done: false,
                mill_formed: true,
                capture_owed: true,
                captured: false,
            });
        }
    }

    session.current_player = acting.opponent();

    advance_phases(session);
    reward = settle_outcome(session, acting, reward, rewards);

    Ok(StepResult {
        observation: encode(session),
        reward,
        done: session.is_over(),
        mill_formed,
        capture_owed: false,
        captured,
    })
}

/// Recompute the global phase and per-player flying eligibility.
fn advance_phases(session: &mut Session) {
    if session.global_phase == GlobalPhase::Placement
        && Player::both().all(|p| session.hands[p] == 0)
    {
        session.global_phase = GlobalPhase::Movement;
        for player in Player::both() {
            session.phases[player] = Phase::Movement;
        }
    }

    // Flying unlocks at <= 3 rather than == 3: equivalent on reachable
    // paths (captures remove one piece at a time) but robust if a count
    // is ever skipped. Never reverts.
    if session.global_phase == GlobalPhase::Movement {
        for player in Player::both() {
            if session.on_board[player] <= FLYING_THRESHOLD {
                session.phases[player] = Phase::Flying;
            }
        }
    }
}

/// Terminal detection, in fixed priority order: elimination, blockade,
/// then the move-limit draw. Returns the (possibly replaced) reward.
fn settle_outcome(session: &mut Session, acting: Player, reward: f32, rewards: &Rewards) -> f32 {
    let mut reward = reward;

    // 1. Elimination: opponent dropped below three pieces outside placement.
    if session.global_phase != GlobalPhase::Placement
        && session.on_board[acting.opponent()] < ELIMINATION_THRESHOLD
    {
        session.outcome = Some(Outcome::Winner(acting));
        reward = rewards.win;
    }

    // 2. Blockade: the player about to move has no legal action. A
    // placement-phase player with an exhausted hand is not blocked; they
    // merely wait for the global phase to flip.
    if session.outcome.is_none() {
        let next = session.current_player;
        let board = &session.board;
        let has_move = match session.phases[next] {
            Phase::Placement => board.empty_cells().next().is_some(),
            Phase::Movement => board
                .cells_of(next)
                .any(|from| ADJACENCY[from].iter().any(|&to| board.is_empty(to))),
            Phase::Flying => board.empty_cells().next().is_some(),
        };
        if !has_move {
            session.outcome = Some(Outcome::Winner(acting));
            reward = rewards.win;
        }
    }

    // 3. Attrition: past the move ceiling the match is drawn, but a win
    // detected on this same step takes priority.
    if session.outcome.is_none() && session.move_count > MOVE_LIMIT {
        session.outcome = Some(Outcome::Draw);
        reward = rewards.draw;
    }

    reward
}
