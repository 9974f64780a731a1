//! The complete game snapshot passed between components.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::piece::Piece;
use crate::side::Side;
use crate::square::Square;

/// Everything needed to continue a game from this point.
///
/// A `GameState` is a value: moves are applied with
/// [`make_move`](GameState::make_move), which returns a new state and leaves
/// `self` as it was, so earlier states stay valid for undo.
#[derive(Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Side,
    pub(crate) castling: CastleRights,
    /// Square skipped by the previous move's double pawn push.
    pub(crate) en_passant: Option<Square>,
    /// Plies since the last capture or pawn move. Tracked, never enforced.
    pub(crate) halfmove_clock: u16,
    /// Starts at 1, incremented after Black moves.
    pub(crate) fullmove_number: u16,
    /// Pieces taken by each side, indexed by [`Side::index()`] of the capturer.
    pub(crate) captured: [Vec<Piece>; Side::COUNT],
    /// Move log, one notation string per ply.
    pub(crate) history: Vec<String>,
}

impl GameState {
    /// Standard initial position: full castling rights, no en passant
    /// target, halfmove clock 0, fullmove number 1.
    pub fn new() -> GameState {
        GameState::from_parts(
            Board::starting_position(),
            Side::White,
            CastleRights::ALL,
            None,
            0,
            1,
        )
    }

    /// Assemble a state with empty ledger and history. Used by FEN parsing
    /// and tests.
    pub fn from_parts(
        board: Board,
        side_to_move: Side,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> GameState {
        GameState {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            captured: [Vec::new(), Vec::new()],
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Pieces `side` has captured, oldest first.
    #[inline]
    pub fn captured_by(&self, side: Side) -> &[Piece] {
        &self.captured[side.index()]
    }

    /// The move log, oldest first.
    #[inline]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GameState(\"{self}\")")
    }
}
