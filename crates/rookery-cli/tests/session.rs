use std::io::Cursor;

use rookery_cli::{Mode, SelectOutcome, Session, SessionConfig, Shell};
use rookery_core::{GameState, Side, Square};

fn config(mode: Mode) -> SessionConfig {
    SessionConfig {
        mode,
        seed: Some(42),
        ..SessionConfig::default()
    }
}

#[test]
fn selecting_opponent_piece_is_a_no_op() {
    let mut session = Session::new(config(Mode::PvP));
    let before = session.state().clone();

    assert_eq!(session.select(Square::E7), SelectOutcome::Cleared);
    assert_eq!(session.selected(), None);
    assert!(session.destinations().is_empty());
    assert_eq!(session.state(), &before);
}

#[test]
fn selecting_empty_square_clears_selection() {
    let mut session = Session::new(config(Mode::PvP));
    session.select(Square::B1);
    assert_eq!(session.selected(), Some(Square::B1));

    assert_eq!(session.select(Square::E5), SelectOutcome::Cleared);
    assert_eq!(session.selected(), None);
    assert_eq!(session.state(), &GameState::new());
}

#[test]
fn destinations_of_opponent_piece_are_empty() {
    let session = Session::new(config(Mode::PvP));
    assert!(session.destinations_of(Square::G8).is_empty());
    assert_eq!(session.destinations_of(Square::G1).len(), 2);
}

#[test]
fn undo_restores_prior_state() {
    let mut session = Session::new(config(Mode::PvP));
    assert!(session.play(Square::E2, Square::E4));
    let after_e4 = session.state().clone();
    assert!(session.play(Square::D7, Square::D5));
    assert!(session.play(Square::E4, Square::D5));
    assert_eq!(session.state().captured_by(Side::White).len(), 1);

    assert!(session.undo());
    assert!(session.undo());
    assert_eq!(session.state(), &after_e4);
    assert_eq!(session.last_move().map(|mv| mv.to), Some(Square::E4));

    assert!(session.undo());
    assert_eq!(session.state(), &GameState::new());
    assert_eq!(session.last_move(), None);
    assert!(!session.undo());
}

#[test]
fn bot_answers_a_human_move() {
    let mut session = Session::new(config(Mode::Bot));
    assert!(session.play(Square::E2, Square::E4));

    let state = session.state();
    assert_eq!(state.side_to_move(), Side::White);
    assert_eq!(state.history().len(), 2);
    assert_eq!(state.history()[0], "e4");
}

#[test]
fn bot_mode_rejects_moving_for_the_bot() {
    let mut session = Session::new(config(Mode::Bot));
    assert!(!session.play(Square::E7, Square::E5));
    assert_eq!(session.state(), &GameState::new());
}

#[test]
fn undo_in_bot_mode_returns_to_human_turn() {
    let mut session = Session::new(config(Mode::Bot));
    assert!(session.play(Square::D2, Square::D4));
    assert!(session.undo());
    assert_eq!(session.state(), &GameState::new());
}

#[test]
fn same_seed_gives_same_bot_game() {
    let play = || {
        let mut session = Session::new(config(Mode::Bot));
        session.play(Square::E2, Square::E4);
        session.play(Square::G1, Square::F3);
        session.state().clone()
    };
    assert_eq!(play(), play());
}

#[test]
fn no_moves_after_game_over() {
    let mut session = Session::new(config(Mode::PvP));
    let mated: GameState = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1".parse().unwrap();
    session.load(mated);
    assert!(session.play(Square::A1, Square::A8));
    assert!(session.opponent_move().is_err());
    assert!(!session.play(Square::G8, Square::H8));
}

#[test]
fn shell_runs_a_script() {
    let script = "\
set mode pvp
move e2 e4
e7e5
select g1
select f3
moves e8
history
captured
status
bogus
quit
show
";
    let mut out = Vec::new();
    Shell::new(config(Mode::Bot))
        .run_with(Cursor::new(script), &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("mode pvp"));
    assert!(out.contains("selected g1: e2 f3 h3"));
    assert!(out.contains("1. e4 e5"));
    assert!(out.contains("2. Kf3"));
    assert!(out.contains("e8: e7"));
    assert!(out.contains("white captured: - (0 cp)"));
    assert!(out.contains("normal"));
    assert!(out.contains("unknown command: bogus"));
}

#[test]
fn shell_reports_errors_and_continues() {
    let script = "select z9\nmove e2 e5\nfen nonsense\nset color red\n";
    let mut out = Vec::new();
    Shell::new(config(Mode::PvP))
        .run_with(Cursor::new(script), &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("illegal move: e2e5"));
    assert_eq!(out.matches("error:").count(), 3);
}

#[test]
fn shell_totals_captured_material() {
    let script = "set mode pvp\ne2e4\nd7d5\ne4d5\nd8d5\ncaptured\n";
    let mut out = Vec::new();
    Shell::new(config(Mode::Bot))
        .run_with(Cursor::new(script), &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("white captured: p (100 cp)"));
    assert!(out.contains("black captured: P (100 cp)"));
}

#[test]
fn shell_refuses_position_with_king_en_prise() {
    let script = "fen 4k3/8/8/8/8/8/8/4K2r b - - 0 1\nbot\nstatus\n";
    let mut out = Vec::new();
    Shell::new(config(Mode::PvP))
        .run_with(Cursor::new(script), &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("error: invalid FEN: white is in check but not on turn"));
    assert!(out.contains("bot plays"));
    assert!(out.contains("normal"));
}
