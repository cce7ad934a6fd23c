//! Full-game random playouts: termination, bookkeeping invariants, and
//! determinism under a fixed seed.

use morris_engine::board::PIECES_PER_PLAYER;
use morris_engine::core::{Action, Player};
use morris_engine::nn::{encode, Policy, RandomPolicy};
use morris_engine::rules::{apply, legal_action_mask, GlobalPhase, Phase, Session, MOVE_LIMIT};

/// Every match ends within the move ceiling plus the one action that
/// crosses it (captures extend a turn but still count as moves).
const STEP_CEILING: u32 = MOVE_LIMIT + 2;

/// Drive one seeded match to completion, checking per-step invariants.
fn play_to_completion(seed: u64) -> Session {
    let mut session = Session::new();
    let mut policy = RandomPolicy::new(seed);

    let mut seen_movement = false;
    let mut seen_flying = [false; 2];

    while !session.is_over() {
        assert!(
            session.move_count() < STEP_CEILING,
            "seed {seed}: match still running after {} moves",
            session.move_count()
        );

        let observation = encode(&session);
        let mask = legal_action_mask(&session);
        let index = policy.select_action(&observation, &mask);
        let action = Action::from_index(index).unwrap();

        apply(&mut session, action).unwrap();

        for player in Player::both() {
            let on_board = session.on_board(player);
            let hand = session.hand(player);

            assert_eq!(
                session.board().count_of(player),
                on_board,
                "seed {seed}: board count drifted from session count"
            );
            assert!(hand + on_board <= PIECES_PER_PLAYER);
            assert_eq!(
                session.captured_from(player),
                PIECES_PER_PLAYER - hand - on_board
            );
        }

        // Phases only ever advance.
        if session.global_phase() == GlobalPhase::Movement {
            seen_movement = true;
        } else {
            assert!(!seen_movement, "seed {seed}: global phase regressed");
        }
        for player in Player::both() {
            let idx = player.index();
            if session.phase(player) == Phase::Flying {
                seen_flying[idx] = true;
            } else {
                assert!(!seen_flying[idx], "seed {seed}: {player} left flying");
            }
        }
    }

    assert!(session.outcome().is_some());
    session
}

#[test]
fn test_random_playouts_terminate_with_invariants() {
    for seed in 0..20 {
        play_to_completion(seed);
    }
}

#[test]
fn test_same_seed_reproduces_match() {
    for seed in [7, 42, 1234] {
        let a = play_to_completion(seed);
        let b = play_to_completion(seed);
        assert_eq!(a, b);
        assert_eq!(a.history(), b.history());
    }
}

#[test]
fn test_history_replay_reproduces_session() {
    let finished = play_to_completion(11);

    let mut replayed = Session::new();
    for record in finished.history() {
        apply(&mut replayed, record.action).unwrap();
    }

    assert_eq!(replayed, finished);
}

mod codec_properties {
    use morris_engine::core::{Action, EngineError, ACTION_SPACE};
    use proptest::prelude::*;

    fn arbitrary_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (0usize..24).prop_map(|at| Action::Place { at }),
            (0usize..24, 0usize..24)
                .prop_filter("slides must move", |(from, to)| from != to)
                .prop_map(|(from, to)| Action::Slide { from, to }),
            (0usize..24).prop_map(|at| Action::Capture { at }),
        ]
    }

    proptest! {
        #[test]
        fn index_round_trip(action in arbitrary_action()) {
            let index = action.to_index();
            prop_assert!(index < ACTION_SPACE);
            prop_assert_eq!(Action::from_index(index).unwrap(), action);
        }

        #[test]
        fn out_of_range_index_rejected(index in ACTION_SPACE..ACTION_SPACE * 4) {
            prop_assert_eq!(
                Action::from_index(index),
                Err(EngineError::InvalidIndex(index))
            );
        }

        #[test]
        fn stationary_slide_index_rejected(cell in 0usize..24) {
            let index = 24 + cell * 24 + cell;
            prop_assert_eq!(
                Action::from_index(index),
                Err(EngineError::InvalidIndex(index))
            );
        }
    }
}
