//! Game outcome classification.

use std::fmt;

use crate::check::is_in_check;
use crate::game_state::GameState;
use crate::movegen::has_legal_move;
use crate::side::Side;

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    Normal,
    /// In check, with at least one legal move.
    Check,
    /// In check with no legal move. The other side has won.
    Checkmate,
    /// Not in check and no legal move. Drawn.
    Stalemate,
}

impl GameStatus {
    /// Return `true` once no further moves can be played.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Normal => "normal",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

impl GameState {
    /// Return `true` if `side`'s king is attacked in this position.
    pub fn is_in_check(&self, side: Side) -> bool {
        is_in_check(&self.board, side)
    }

    /// Classify the position for the side to move. Computed fresh on every call.
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check(self.side_to_move);
        match (in_check, has_legal_move(self)) {
            (false, true) => GameStatus::Normal,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// The side that delivered checkmate, if the game ended that way.
    pub fn winner(&self) -> Option<Side> {
        (self.status() == GameStatus::Checkmate).then(|| self.side_to_move.flip())
    }
}
