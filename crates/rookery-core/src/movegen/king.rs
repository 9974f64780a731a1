//! King steps and castling.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::check::is_in_check;
use crate::file::File;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

use super::SquareList;
use super::knights::step_targets;

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// One step in any direction onto a square not holding a friendly piece.
pub(super) fn king_targets(board: &Board, from: Square, side: Side, out: &mut SquareList) {
    step_targets(board, from, side, &KING_STEPS, out);
}

/// Add castling landing squares for the side to move's king on `from`.
///
/// A wing qualifies when its right is still held, the side's rook stands on
/// its corner, every square between king and rook is empty, the king is not
/// in check, and neither the square it crosses nor the one it lands on would
/// put it in check.
pub(super) fn castling_targets(state: &GameState, from: Square, out: &mut SquareList) {
    let side = state.side_to_move;
    let back = side.back_rank();
    let board = &state.board;

    if from != Square::new(back, File::FileE) || !state.castling.has_any(side) {
        return;
    }
    if is_in_check(board, side) {
        return;
    }

    let king = Piece::new(PieceKind::King, side);
    let rook = Piece::new(PieceKind::Rook, side);
    for wing in CastleSide::ALL {
        if !state.castling.has(side, wing) {
            continue;
        }
        let rook_sq = Square::new(back, wing.rook_from());
        if board.piece_at(rook_sq) != Some(rook) {
            continue;
        }

        let (lo, hi) = ordered(from.file().index(), rook_sq.file().index());
        let path_clear = File::ALL[lo + 1..hi]
            .iter()
            .all(|&file| !board.is_occupied(Square::new(back, file)));
        if !path_clear {
            continue;
        }

        let step: i8 = match wing {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        };
        let vacated = board.with_piece(from, None);
        let safe = (1..=2).all(|n| {
            from.offset(0, step * n).is_some_and(|sq| {
                let probe = vacated.with_piece(sq, Some(king));
                !is_in_check(&probe, side)
            })
        });
        if safe {
            out.push(Square::new(back, wing.king_to()));
        }
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}
