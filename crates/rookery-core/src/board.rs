//! The 8×8 board: which piece, if any, stands on each square.

use std::fmt;

use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::side::Side;
use crate::square::Square;

/// Piece placement, indexed by [`Square::index()`].
///
/// `Board` is `Copy`; every transition produces a fresh board and never
/// edits one that another owner can see.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const EMPTY: Board = Board {
        squares: [None; Square::COUNT],
    };

    /// Return the standard starting placement.
    pub fn starting_position() -> Board {
        let mut board = Board::EMPTY;
        for side in Side::ALL {
            for (file, kind) in File::ALL.into_iter().zip(PieceKind::BACK_RANK) {
                board.squares[Square::new(side.back_rank(), file).index()] =
                    Some(Piece::new(kind, side));
                board.squares[Square::new(side.pawn_rank(), file).index()] =
                    Some(Piece::new(PieceKind::Pawn, side));
            }
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Return the side owning the piece on `sq`, if any.
    #[inline]
    pub fn side_at(&self, sq: Square) -> Option<Side> {
        self.piece_at(sq).map(Piece::side)
    }

    /// Return a copy with `sq` set to `piece`.
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Option<Piece>) -> Board {
        self.squares[sq.index()] = piece;
        self
    }

    /// Write `piece` to `sq`. Only for boards this module's callers own
    /// exclusively, i.e. copies made for a transition.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Remove and return whatever stands on `sq`.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Iterate over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterate over the squares holding `side`'s pieces.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.side() == side)
    }

    /// Locate `side`'s king, `None` only on a malformed board.
    pub fn find_king(&self, side: Side) -> Option<Square> {
        let king = Piece::new(PieceKind::King, side);
        self.pieces().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    /// Return the square of `side`'s king.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king for that side (invalid board state).
    pub fn king_square(&self, side: Side) -> Square {
        self.find_king(side)
            .expect("board must have a king for each side")
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for side in Side::ALL {
            let king = Piece::new(PieceKind::King, side);
            let count = self.pieces().filter(|&(_, p)| p == king).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    side: side.name(),
                    count,
                });
            }
        }

        let pawn_on_back_rank = self.pieces().any(|(sq, p)| {
            p.kind() == PieceKind::Pawn && matches!(sq.rank(), Rank::Rank1 | Rank::Rank8)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::ALL {
                let c = self
                    .0
                    .piece_at(Square::new(rank, file))
                    .map_or('.', Piece::fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
