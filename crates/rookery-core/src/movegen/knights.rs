//! Knight moves.

use crate::board::Board;
use crate::side::Side;
use crate::square::Square;

use super::SquareList;

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// Add every on-board knight jump from `from` not landing on a friendly piece.
pub(super) fn knight_targets(board: &Board, from: Square, side: Side, out: &mut SquareList) {
    step_targets(board, from, side, &KNIGHT_STEPS, out);
}

/// Shared by knights and kings: one hop per offset, stopping only at
/// friendly pieces.
pub(super) fn step_targets(
    board: &Board,
    from: Square,
    side: Side,
    steps: &[(i8, i8)],
    out: &mut SquareList,
) {
    for &(d_rank, d_file) in steps {
        if let Some(to) = from.offset(d_rank, d_file) {
            if board.side_at(to) != Some(side) {
                out.push(to);
            }
        }
    }
}
