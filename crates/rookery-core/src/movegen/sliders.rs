//! Sliding piece (bishop, rook, queen) moves.

use crate::board::Board;
use crate::side::Side;
use crate::square::Square;

use super::SquareList;

pub(super) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Walk each ray from `from` until the edge or the first occupied square.
/// An enemy blocker is included, a friendly one is not.
pub(super) fn slider_targets(
    board: &Board,
    from: Square,
    side: Side,
    directions: &[(i8, i8)],
    out: &mut SquareList,
) {
    for &(d_rank, d_file) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_rank, d_file) {
            match board.side_at(to) {
                None => out.push(to),
                Some(owner) => {
                    if owner != side {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{slider_targets, DIAGONALS, ORTHOGONALS};
    use crate::board::Board;
    use crate::movegen::SquareList;
    use crate::piece::Piece;
    use crate::side::Side;
    use crate::square::Square;

    #[test]
    fn rook_on_empty_board() {
        let board = Board::EMPTY.with_piece(Square::D4, Some(Piece::WHITE_ROOK));
        let mut out = SquareList::new();
        slider_targets(&board, Square::D4, Side::White, &ORTHOGONALS, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn queen_in_the_center_reaches_27() {
        let board = Board::EMPTY.with_piece(Square::D4, Some(Piece::WHITE_QUEEN));
        let mut out = SquareList::new();
        slider_targets(&board, Square::D4, Side::White, &DIAGONALS, &mut out);
        slider_targets(&board, Square::D4, Side::White, &ORTHOGONALS, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn ray_stops_at_blockers() {
        let board = Board::EMPTY
            .with_piece(Square::A1, Some(Piece::WHITE_BISHOP))
            .with_piece(Square::C3, Some(Piece::BLACK_KNIGHT))
            .with_piece(Square::B1, Some(Piece::WHITE_PAWN));
        let mut out = SquareList::new();
        slider_targets(&board, Square::A1, Side::White, &DIAGONALS, &mut out);
        assert_eq!(out.as_slice(), &[Square::B2, Square::C3]);

        let mut out = SquareList::new();
        slider_targets(&board, Square::A1, Side::White, &ORTHOGONALS, &mut out);
        assert_eq!(out.len(), 7);
        assert!(!out.contains(Square::B1));
    }
}
