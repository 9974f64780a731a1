//! Material values on a centipawn scale.

use rookery_core::{Piece, PieceKind};

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | cp  |
/// |--------|-----|
/// | Pawn   | 100 |
/// | Knight | 300 |
/// | Bishop | 300 |
/// | Rook   | 500 |
/// | Queen  | 900 |
/// | King   |   0 |
///
/// The king is worth nothing here; taking it is never a legal move and
/// mating it is rewarded separately.
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [
    100, // Pawn
    300, // Knight
    300, // Bishop
    500, // Rook
    900, // Queen
    0,   // King
];

/// Material value of a piece kind.
#[inline]
pub const fn value(kind: PieceKind) -> i32 {
    MATERIAL_VALUE[kind.index()]
}

/// Total material of the pieces in a capture ledger.
pub fn ledger_value(pieces: &[Piece]) -> i32 {
    pieces.iter().map(|p| value(p.kind())).sum()
}
