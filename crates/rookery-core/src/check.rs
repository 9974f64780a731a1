//! Check detection on a bare board.
//!
//! A square is attacked when any enemy piece has it among its pseudo-legal
//! destinations. Castling never captures, so the pseudo tier leaving it out
//! loses nothing here, and en passant is irrelevant because a king never
//! stands on an en passant target.

use crate::board::Board;
use crate::movegen::pseudo_destinations;
use crate::side::Side;
use crate::square::Square;

/// Return `true` if some piece of side `by` could move to `target`.
pub fn can_reach(board: &Board, target: Square, by: Side) -> bool {
    board
        .pieces_of(by)
        .any(|(from, _)| pseudo_destinations(board, from, None).contains(target))
}

/// Return `true` if `side`'s king is attacked.
///
/// # Panics
///
/// Panics if `side` has no king on `board`.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    can_reach(board, board.king_square(side), side.flip())
}
