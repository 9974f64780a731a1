//! Board ranks (rows 1–8).

use std::fmt;

/// A rank (row), from Rank1 (White's back rank) to Rank8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// All ranks from 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index, `None` when off the board.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        if index < 8 {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// Step `delta` ranks up (toward rank 8) or down, `None` off the board.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Rank> {
        let idx = self as i8 + delta;
        if idx < 0 || idx > 7 {
            None
        } else {
            Some(Rank::ALL[idx as usize])
        }
    }

    /// Parse a rank digit (`1`..`8`).
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '1'..='8' => Rank::from_index(c as u8 - b'1'),
            _ => None,
        }
    }

    /// The rank digit.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn from_index_bounds() {
        assert_eq!(Rank::from_index(0), Some(Rank::Rank1));
        assert_eq!(Rank::from_index(7), Some(Rank::Rank8));
        assert_eq!(Rank::from_index(8), None);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Rank::Rank1.offset(-1), None);
        assert_eq!(Rank::Rank8.offset(1), None);
        assert_eq!(Rank::Rank2.offset(2), Some(Rank::Rank4));
        assert_eq!(Rank::Rank7.offset(-2), Some(Rank::Rank5));
    }

    #[test]
    fn char_roundtrip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_char(rank.to_char()), Some(rank));
        }
        assert_eq!(Rank::from_char('9'), None);
        assert_eq!(format!("{}", Rank::Rank8), "8");
    }

    #[test]
    fn ordering() {
        assert!(Rank::Rank1 < Rank::Rank8);
    }
}
