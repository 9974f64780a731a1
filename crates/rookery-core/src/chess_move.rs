//! Move representation: an origin and a destination square.

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleSide;
use crate::error::ParseMoveError;
use crate::square::Square;

/// The special-move family a move belongs to in a given position.
///
/// A [`Move`] itself carries only squares; the family is derived from the
/// position it is played in (see [`GameState::move_kind`](crate::GameState::move_kind)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Any move not listed below, capture or not.
    Normal,
    /// Pawn advancing two ranks from its start rank.
    DoublePush,
    /// Pawn capturing diagonally onto the en passant target.
    EnPassant,
    /// King moving two files, taking the rook along.
    Castle(CastleSide),
    /// Pawn reaching the last rank (always becomes a queen).
    Promotion,
}

/// A move from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Coordinate text such as `e2e4`.
    pub fn to_coord(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse coordinate text (`e2e4`). A trailing promotion letter is
    /// accepted and ignored since pawns always promote to a queen.
    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        let err = || ParseMoveError {
            found: s.to_string(),
        };
        if !(4..=5).contains(&s.len()) || !s.is_ascii() {
            return Err(err());
        }
        if s.len() == 5 && !matches!(&s[4..], "q" | "Q") {
            return Err(err());
        }
        let from = Square::from_algebraic(&s[0..2]).ok_or_else(err)?;
        let to = Square::from_algebraic(&s[2..4]).ok_or_else(err)?;
        Ok(Move::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
