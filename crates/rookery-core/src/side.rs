//! The two competing sides.

use std::fmt;
use std::ops::Not;

use crate::rank::Rank;

/// One of the two players. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// Both sides in index order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank delta of a single pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// The rank holding this side's king and rooks at the start.
    #[inline]
    pub const fn back_rank(self) -> Rank {
        match self {
            Side::White => Rank::Rank1,
            Side::Black => Rank::Rank8,
        }
    }

    /// The rank this side's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> Rank {
        match self {
            Side::White => Rank::Rank2,
            Side::Black => Rank::Rank7,
        }
    }

    /// The rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> Rank {
        match self {
            Side::White => Rank::Rank8,
            Side::Black => Rank::Rank1,
        }
    }

    /// The rank this side's pawns land on when capturing en passant.
    #[inline]
    pub const fn en_passant_rank(self) -> Rank {
        match self {
            Side::White => Rank::Rank6,
            Side::Black => Rank::Rank3,
        }
    }

    /// Lowercase English name, as shown to players.
    pub const fn name(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "w"),
            Side::Black => write!(f, "b"),
        }
    }
}
