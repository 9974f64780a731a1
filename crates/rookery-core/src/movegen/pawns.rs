//! Pawn pushes and captures.

use crate::board::Board;
use crate::side::Side;
use crate::square::Square;

use super::SquareList;

/// Single and double pushes onto empty squares, diagonal captures of enemy
/// pieces, and the en passant capture when the target sits on the rank
/// this side captures onto.
pub(super) fn pawn_targets(
    board: &Board,
    from: Square,
    side: Side,
    en_passant: Option<Square>,
    out: &mut SquareList,
) {
    let forward = side.forward();

    if let Some(one) = from.offset(forward, 0) {
        if !board.is_occupied(one) {
            out.push(one);
            if from.rank() == side.pawn_rank() {
                if let Some(two) = one.offset(forward, 0) {
                    if !board.is_occupied(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(diag) = from.offset(forward, d_file) else {
            continue;
        };
        match board.side_at(diag) {
            Some(owner) if owner != side => out.push(diag),
            None if en_passant == Some(diag) && diag.rank() == side.en_passant_rank() => {
                out.push(diag)
            }
            _ => {}
        }
    }
}
