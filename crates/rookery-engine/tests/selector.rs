//! Integration tests for the move selector.
//!
//! Covers the free-capture guarantee, reproducibility under a seeded RNG,
//! and the error paths callers are expected to handle.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rookery_core::{is_legal, GameState, Move, Side, Square};
use rookery_engine::{
    score_moves, select_move, SelectError, SelectionPolicy, SelectorConfig,
};

/// Black queen on d5 hangs to the rook on d1.
const FREE_QUEEN_FEN: &str = "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1";

/// Rook lift to a8 mates.
const BACK_RANK_FEN: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";

const SICILIAN_FEN: &str = "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2";

fn state(fen: &str) -> GameState {
    fen.parse().unwrap()
}

// ── Scoring ──────────────────────────────────────────────────────────────────

#[test]
fn free_queen_capture_ranks_first() {
    let ranked = score_moves(&state(FREE_QUEEN_FEN), &SelectorConfig::default());
    assert_eq!(ranked[0].mv, Move::new(Square::D1, Square::D5));
}

#[test]
fn free_queen_capture_is_always_picked_with_top_one() {
    let config = SelectorConfig {
        policy: SelectionPolicy::TopK(1),
        ..SelectorConfig::default()
    };
    let state = state(FREE_QUEEN_FEN);
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mv = select_move(&state, Side::White, &config, &mut rng).unwrap();
        assert_eq!(mv, Move::new(Square::D1, Square::D5));
    }
}

#[test]
fn mate_in_one_ranks_first() {
    let ranked = score_moves(&state(BACK_RANK_FEN), &SelectorConfig::default());
    assert_eq!(ranked[0].mv, Move::new(Square::A1, Square::A8));
}

#[test]
fn ranking_is_sorted_and_complete() {
    let state = state(SICILIAN_FEN);
    let ranked = score_moves(&state, &SelectorConfig::default());
    assert_eq!(ranked.len(), rookery_core::legal_moves(&state).len());
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

// ── Randomness ───────────────────────────────────────────────────────────────

#[test]
fn same_seed_same_move() {
    let state = GameState::new();
    let config = SelectorConfig::default();
    for seed in [0, 7, 42, 1234] {
        let a = select_move(&state, Side::White, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = select_move(&state, Side::White, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(a, b, "seed {seed} gave different moves");
    }
}

#[test]
fn varying_seeds_spread_over_the_top_three() {
    let state = GameState::new();
    let config = SelectorConfig::default();
    let top: Vec<Move> = score_moves(&state, &config)
        .iter()
        .take(3)
        .map(|m| m.mv)
        .collect();

    let mut seen = HashSet::new();
    for seed in 0..64 {
        let mv = select_move(&state, Side::White, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert!(top.contains(&mv), "{mv} is outside the candidate set");
        seen.insert(mv);
    }
    assert!(seen.len() > 1, "64 seeds always picked the same move");
}

#[test]
fn margin_policy_only_returns_near_best_moves() {
    let state = state(SICILIAN_FEN);
    let config = SelectorConfig {
        policy: SelectionPolicy::Margin(15),
        ..SelectorConfig::default()
    };
    let ranked = score_moves(&state, &config);
    let best = ranked[0].score;
    for seed in 0..16 {
        let mv = select_move(&state, Side::White, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert!(is_legal(&state, mv));
        let score = ranked.iter().find(|m| m.mv == mv).unwrap().score;
        assert!(score >= best - 15);
    }
}

#[test]
fn negative_margin_still_moves() {
    let state = GameState::new();
    let config = SelectorConfig {
        policy: SelectionPolicy::Margin(-1),
        ..SelectorConfig::default()
    };
    let best = score_moves(&state, &config)[0].mv;
    for seed in 0..4 {
        let mv = select_move(&state, Side::White, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(mv, best);
    }
}

// ── Errors ───────────────────────────────────────────────────────────────────

#[test]
fn no_moves_after_mate() {
    let state = state(BACK_RANK_FEN).play(Move::new(Square::A1, Square::A8)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        select_move(&state, Side::Black, &SelectorConfig::default(), &mut rng),
        Err(SelectError::NoLegalMoves)
    );
}

#[test]
fn no_moves_in_stalemate() {
    let state = state("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        select_move(&state, Side::Black, &SelectorConfig::default(), &mut rng),
        Err(SelectError::NoLegalMoves)
    );
}

#[test]
fn wrong_side_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = select_move(&GameState::new(), Side::Black, &SelectorConfig::default(), &mut rng)
        .unwrap_err();
    assert_eq!(err, SelectError::NotSideToMove { requested: "black" });
    assert_eq!(err.to_string(), "black is not to move");
}
