//! Static one-ply move scoring.
//!
//! A move is scored by what it wins, where it puts the piece, and what the
//! opponent can do about it on the very next ply. Nothing deeper is searched.

pub mod material;
pub mod pst;

use rookery_core::{
    legal_destinations, legal_moves, GameState, GameStatus, Move, MoveKind, Piece, PieceKind,
    Side, Square,
};

use crate::config::SelectorConfig;

/// The four central squares.
const CENTER: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// Score `mv` for the side to move in `state`. Higher is better for the mover.
///
/// `mv` is expected to be legal; a move from an empty square scores 0.
pub fn score_move(state: &GameState, mv: Move, config: &SelectorConfig) -> i32 {
    let Some(piece) = state.board().piece_at(mv.from) else {
        return 0;
    };
    let side = piece.side();
    let kind = state.move_kind(mv);
    let next = state.make_move(mv);

    let mut score = 0;

    if let Some(victim) = victim(state, mv, kind) {
        score += material::value(victim.kind());
    }

    score += pst::pst_value(piece.kind(), side, mv.to) - pst::pst_value(piece.kind(), side, mv.from);

    match next.status() {
        GameStatus::Check => score += config.check_bonus,
        GameStatus::Checkmate => score += config.check_bonus + config.mate_bonus,
        GameStatus::Normal | GameStatus::Stalemate => {}
    }

    if matches!(kind, MoveKind::Castle(_)) {
        score += config.castle_bonus;
    }

    if CENTER.contains(&mv.to) {
        score += config.center_bonus;
    }

    if is_hanging(&next, mv.to) {
        score -= material::value(piece.kind()) / config.hanging_divisor.max(1);
    }

    if king_danger(&next, side) > config.king_danger_threshold {
        score -= config.king_danger_penalty;
    }

    score
}

/// The piece `mv` removes from the board, if any.
fn victim(state: &GameState, mv: Move, kind: MoveKind) -> Option<Piece> {
    match kind {
        MoveKind::EnPassant => Some(Piece::new(PieceKind::Pawn, state.side_to_move().flip())),
        MoveKind::Castle(_) => None,
        _ => state.board().piece_at(mv.to),
    }
}

/// Whether the side to move in `next` has a legal move landing on `sq`.
fn is_hanging(next: &GameState, sq: Square) -> bool {
    legal_moves(next).as_slice().iter().any(|m| m.to == sq)
}

/// Number of enemy pieces in `next` with a legal move onto `side`'s king
/// square or one of its neighbors. `next` has the enemy to move.
fn king_danger(next: &GameState, side: Side) -> usize {
    let Some(king_sq) = next.board().find_king(side) else {
        return 0;
    };
    next.board()
        .pieces_of(side.flip())
        .filter(|&(from, _)| {
            legal_destinations(next, from)
                .as_slice()
                .iter()
                .any(|&to| is_adjacent_or_same(to, king_sq))
        })
        .count()
}

fn is_adjacent_or_same(a: Square, b: Square) -> bool {
    a.rank().index().abs_diff(b.rank().index()) <= 1 && a.file().index().abs_diff(b.file().index()) <= 1
}

#[cfg(test)]
mod tests {
    use rookery_core::{GameState, Move, Square};

    use super::{king_danger, score_move};
    use crate::config::SelectorConfig;

    fn state(fen: &str) -> GameState {
        fen.parse().unwrap()
    }

    #[test]
    fn free_queen_is_worth_its_value() {
        let state = state("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
        let config = SelectorConfig::default();
        let capture = score_move(&state, Move::new(Square::D1, Square::D5), &config);
        // 900 for the queen, rook PST d1 -> d5 is 5 -> 0, plus the center bonus.
        assert_eq!(capture, 900 - 5 + config.center_bonus);
    }

    #[test]
    fn defended_target_costs_half_the_attacker() {
        // The knight on d5 is guarded by the pawn on e6.
        let state = state("4k3/8/4p3/3n4/8/8/8/3QK3 w - - 0 1");
        let config = SelectorConfig::default();
        let capture = score_move(&state, Move::new(Square::D1, Square::D5), &config);
        // queen PST d1 -5 -> d5 5, knight 300, center 20, hanging queen 450
        assert_eq!(capture, 300 + 10 + config.center_bonus - 450);
    }

    #[test]
    fn mate_outscores_everything() {
        let state = state("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let config = SelectorConfig::default();
        let mate = score_move(&state, Move::new(Square::A1, Square::A8), &config);
        assert!(mate >= config.mate_bonus);
    }

    #[test]
    fn castling_earns_its_bonus() {
        let state = state("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        let config = SelectorConfig::default();
        let castle = score_move(&state, Move::new(Square::E1, Square::G1), &config);
        let step = score_move(&state, Move::new(Square::E1, Square::F1), &config);
        assert_eq!(castle, 30 + config.castle_bonus);
        assert_eq!(step, 10);
    }

    #[test]
    fn king_danger_counts_pieces_not_moves() {
        // Both rooks reach several squares around the white king, the black
        // king reaches none.
        let next = state("3rkr2/8/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(king_danger(&next, rookery_core::Side::White), 2);
    }
}
