//! A piece: a kind owned by a side.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// A piece belonging to one side. Which square it stands on is tracked by
/// the [`Board`](crate::Board), not by the piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Side::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Side::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Side::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Side::White);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Side::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Side::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Side::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Side::Black);

    /// Create a piece from a kind and a side.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece { kind, side }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the owning side.
    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    /// Same side, different kind. Used for promotion.
    #[inline]
    pub const fn with_kind(self, kind: PieceKind) -> Piece {
        Piece::new(kind, self.side)
    }

    /// Parse a FEN character: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Piece::new(kind, side))
    }

    /// Return the FEN character for this piece.
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.side {
            Side::White => base.to_ascii_uppercase(),
            Side::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_prefix = match self.side {
            Side::White => 'W',
            Side::Black => 'B',
        };
        write!(f, "{}{}", side_prefix, self.kind.fen_char().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;

    #[test]
    fn new_roundtrip() {
        for side in Side::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, side);
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.side(), side);
            }
        }
    }

    #[test]
    fn fen_char_case() {
        assert_eq!(Piece::from_fen_char('N'), Some(Piece::WHITE_KNIGHT));
        assert_eq!(Piece::from_fen_char('q'), Some(Piece::BLACK_QUEEN));
        assert_eq!(Piece::from_fen_char('z'), None);
        assert_eq!(Piece::WHITE_KING.fen_char(), 'K');
        assert_eq!(Piece::BLACK_PAWN.fen_char(), 'p');
    }

    #[test]
    fn promotion_keeps_side() {
        let queen = Piece::BLACK_PAWN.with_kind(PieceKind::Queen);
        assert_eq!(queen, Piece::BLACK_QUEEN);
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Piece::WHITE_ROOK), "WR");
        assert_eq!(format!("{:?}", Piece::BLACK_KNIGHT), "BN");
    }
}
